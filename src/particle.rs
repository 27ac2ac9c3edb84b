use eframe::egui::Color32;
use eframe::epaint::Vec2;
use rand::Rng;

use crate::error::Result;
use crate::params::FluidParams;

/// Density of the heavier class.
pub const DENSE_DENSITY: f32 = 2.0;
/// Density of the lighter class.
pub const LIGHT_DENSITY: f32 = 1.0;

/// The two populations a set is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityClass {
    /// Black, density 2.0, spawned in the top half.
    Dense,
    /// White, density 1.0, spawned in the bottom half.
    Light,
}

impl DensityClass {
    pub fn density(self) -> f32 {
        match self {
            DensityClass::Dense => DENSE_DENSITY,
            DensityClass::Light => LIGHT_DENSITY,
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            DensityClass::Dense => Color32::BLACK,
            DensityClass::Light => Color32::WHITE,
        }
    }
}

/// A single particle, copied out of (or into) a [`ParticleSet`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color32,
    pub density: f32,
}

impl Particle {
    /// A particle of `class` at rest at `position`.
    pub fn at_rest(class: DensityClass, position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            color: class.color(),
            density: class.density(),
        }
    }
}

// ===================================================================================
// Particle Storage
// ===================================================================================

/// Stores the particle data in a **Structure of Arrays** (SoA) layout.
///
/// The set is fixed-size: particles are created all at once and then only
/// their positions and velocities change. Index order is creation order and
/// is the order the stepper visits them in.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    /// Per-particle x-coordinate in screen units.
    pub(crate) x: Vec<f32>,
    /// Per-particle y-coordinate in screen units (+y is down).
    pub(crate) y: Vec<f32>,
    /// Per-particle velocity in the x-direction.
    pub(crate) vx: Vec<f32>,
    /// Per-particle velocity in the y-direction.
    pub(crate) vy: Vec<f32>,
    /// Per-particle colour used when drawing.
    pub(crate) colors: Vec<Color32>,
    /// Per-particle density, written once at creation.
    pub(crate) density: Vec<f32>,
}

impl ParticleSet {
    /// Constructs an empty `ParticleSet` with room for `n` particles.
    fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            vx: Vec::with_capacity(n),
            vy: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            density: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, p: Particle) {
        self.x.push(p.position.x);
        self.y.push(p.position.y);
        self.vx.push(p.velocity.x);
        self.vy.push(p.velocity.y);
        self.colors.push(p.color);
        self.density.push(p.density);
    }

    /// Builds the initial population: the first half dense particles scattered
    /// over the top half of the box, the second half light particles over the
    /// bottom half, all at rest.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `params` fails validation.
    pub fn spawn(params: &FluidParams, rng: &mut impl Rng) -> Result<Self> {
        params.validate()?;

        let n = params.num_particles;
        let half_height = params.height / 2.0;
        let mut set = Self::with_capacity(n);

        for _ in 0..n / 2 {
            let x = rng.random_range(0.0..params.width);
            let y = rng.random_range(0.0..half_height);
            set.push(Particle::at_rest(DensityClass::Dense, Vec2::new(x, y)));
        }
        for _ in 0..n / 2 {
            let x = rng.random_range(0.0..params.width);
            let y = rng.random_range(half_height..params.height);
            set.push(Particle::at_rest(DensityClass::Light, Vec2::new(x, y)));
        }

        Ok(set)
    }

    /// Builds a set from explicit particles, keeping their order.
    pub fn from_particles(particles: impl IntoIterator<Item = Particle>) -> Self {
        let mut set = Self::default();
        for p in particles {
            set.push(p);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns a copy of particle `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<Particle> {
        if i >= self.len() {
            return None;
        }
        Some(Particle {
            position: Vec2::new(self.x[i], self.y[i]),
            velocity: Vec2::new(self.vx[i], self.vy[i]),
            color: self.colors[i],
            density: self.density[i],
        })
    }

    /// Iterates over copies of every particle in creation order.
    pub fn iter(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// True while every position and velocity component is a finite number.
    pub fn all_finite(&self) -> bool {
        [&self.x, &self.y, &self.vx, &self.vy]
            .iter()
            .all(|column| column.iter().all(|v| v.is_finite()))
    }

    /// Mean y-coordinate of the particles in `class`, or `None` if there are none.
    pub fn mean_height(&self, class: DensityClass) -> Option<f32> {
        let wanted = class.density();
        let (sum, count) = self
            .y
            .iter()
            .zip(&self.density)
            .filter(|&(_, &d)| d == wanted)
            .fold((0.0_f32, 0usize), |(sum, count), (&y, _)| (sum + y, count + 1));
        (count > 0).then(|| sum / count as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spawn_partitions_by_class() -> Result<()> {
        let params = FluidParams::default();
        let mut rng = StdRng::seed_from_u64(12345);
        let set = ParticleSet::spawn(&params, &mut rng)?;

        assert_eq!(set.len(), params.num_particles);
        let half = params.num_particles / 2;
        for (i, p) in set.iter().enumerate() {
            assert!(p.position.x >= 0.0 && p.position.x < params.width);
            assert_eq!(p.velocity, Vec2::ZERO);
            if i < half {
                assert!(p.position.y >= 0.0 && p.position.y < params.height / 2.0);
                assert_eq!(p.density, DENSE_DENSITY);
                assert_eq!(p.color, Color32::BLACK);
            } else {
                assert!(p.position.y >= params.height / 2.0 && p.position.y < params.height);
                assert_eq!(p.density, LIGHT_DENSITY);
                assert_eq!(p.color, Color32::WHITE);
            }
        }
        Ok(())
    }

    #[test]
    fn spawn_is_reproducible_with_a_seed() -> Result<()> {
        let params = FluidParams {
            num_particles: 64,
            ..FluidParams::default()
        };
        let a = ParticleSet::spawn(&params, &mut StdRng::seed_from_u64(7))?;
        let b = ParticleSet::spawn(&params, &mut StdRng::seed_from_u64(7))?;
        let c = ParticleSet::spawn(&params, &mut StdRng::seed_from_u64(8))?;

        assert!(a.iter().eq(b.iter()));
        assert!(!a.iter().eq(c.iter()));
        Ok(())
    }

    #[test]
    fn spawn_rejects_odd_count() {
        let params = FluidParams {
            num_particles: 3,
            ..FluidParams::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(ParticleSet::spawn(&params, &mut rng).is_err());
    }

    #[test]
    fn get_past_end_is_none() {
        let set = ParticleSet::from_particles([Particle::at_rest(
            DensityClass::Light,
            Vec2::new(1.0, 2.0),
        )]);
        assert_eq!(set.len(), 1);
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
    }

    #[test]
    fn mean_height_per_class() {
        let set = ParticleSet::from_particles([
            Particle::at_rest(DensityClass::Dense, Vec2::new(0.0, 10.0)),
            Particle::at_rest(DensityClass::Dense, Vec2::new(0.0, 30.0)),
            Particle::at_rest(DensityClass::Light, Vec2::new(0.0, 500.0)),
        ]);
        assert_eq!(set.mean_height(DensityClass::Dense), Some(20.0));
        assert_eq!(set.mean_height(DensityClass::Light), Some(500.0));

        let empty = ParticleSet::default();
        assert_eq!(empty.mean_height(DensityClass::Dense), None);
    }

    #[test]
    fn all_finite_detects_nan() {
        let mut set = ParticleSet::from_particles([Particle::at_rest(
            DensityClass::Dense,
            Vec2::new(5.0, 5.0),
        )]);
        assert!(set.all_finite());
        set.vy[0] = f32::NAN;
        assert!(!set.all_finite());
    }
}
