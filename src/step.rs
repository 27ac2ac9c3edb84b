//! Per-frame advancement of a [`ParticleSet`].

use crate::params::FluidParams;
use crate::particle::ParticleSet;

/// Advances every particle by `dt` seconds, in place.
///
/// Particles are visited in index order. Each one gets gravity, a velocity flip
/// on any axis where its previous position lies outside the box, an explicit
/// Euler position update, and then the pair force from every other particle
/// within `interaction_threshold`.
///
/// The pair loop reads the live arrays, so particle `i` sees particles `j < i`
/// where they ended up this frame and `j > i` where they were last frame. The
/// force is therefore not exactly antisymmetric within one step.
pub fn step(particles: &mut ParticleSet, params: &FluidParams, dt: f32) {
    let n = particles.len();

    for i in 0..n {
        particles.vy[i] += params.gravity * particles.density[i] * dt;

        reflect_at_walls(particles, i, params);

        particles.x[i] += particles.vx[i] * dt;
        particles.y[i] += particles.vy[i] * dt;

        apply_pair_forces(particles, i, params);
    }
}

/// Flips velocity components for particle `i` if it sits outside `[0, W] x [0, H]`.
/// The position is left where it is.
fn reflect_at_walls(particles: &mut ParticleSet, i: usize, params: &FluidParams) {
    let x = particles.x[i];
    if x < 0.0 || x > params.width {
        particles.vx[i] = -particles.vx[i];
    }
    let y = particles.y[i];
    if y < 0.0 || y > params.height {
        particles.vy[i] = -particles.vy[i];
    }
}

/// O(n^2) inner loop: accumulates the density-difference force on particle `i`.
fn apply_pair_forces(particles: &mut ParticleSet, i: usize, params: &FluidParams) {
    let threshold = params.interaction_threshold;
    let (xi, yi, di) = (particles.x[i], particles.y[i], particles.density[i]);

    for j in 0..particles.len() {
        if j == i {
            continue;
        }

        let dx = particles.x[j] - xi;
        let dy = particles.y[j] - yi;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist < threshold {
            // coincident pair => dx = dy = 0, contributes nothing
            let force = pair_force(di, particles.density[j], dist, params);
            particles.vx[i] += force * dx;
            particles.vy[i] += force * dy;
        }
    }
}

/// Scalar pair coefficient; multiply by the displacement `q - p` to get the
/// velocity change of `p`. Positive when `p` is the denser of the two.
#[inline]
pub fn pair_force(density_p: f32, density_q: f32, dist: f32, params: &FluidParams) -> f32 {
    params.interaction_strength * (density_p - density_q) / dist.max(params.min_distance)
}
