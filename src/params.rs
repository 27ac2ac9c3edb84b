use crate::error::{Error, Result};

// ===================================================================================
// Default Constants
// ===================================================================================

pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 600.0;
pub const DEFAULT_NUM_PARTICLES: usize = 1000;
pub const DEFAULT_GRAVITY: f32 = 9.8;
pub const DEFAULT_INTERACTION_STRENGTH: f32 = 0.001;
pub const DEFAULT_INTERACTION_THRESHOLD: f32 = 10.0;
pub const DEFAULT_MIN_DISTANCE: f32 = 1.0e-4;
pub const DEFAULT_RADIUS: f32 = 2.0;

/// Fixed simulation constants, gathered so the spawner and stepper can be driven
/// with something other than the compiled-in values in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FluidParams {
    /// Box width in screen units.
    pub width: f32,
    /// Box height in screen units. +y points down.
    pub height: f32,
    /// Total particle count; half dense, half light.
    pub num_particles: usize,
    /// Downward acceleration, scaled by each particle's density.
    pub gravity: f32,
    /// Pair force coefficient.
    pub interaction_strength: f32,
    /// Pairs closer than this interact.
    pub interaction_threshold: f32,
    /// Lower bound on the pair-force denominator.
    pub min_distance: f32,
    /// Drawn circle radius.
    pub radius: f32,
}

impl Default for FluidParams {
    fn default() -> Self {
        FluidParams {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_particles: DEFAULT_NUM_PARTICLES,
            gravity: DEFAULT_GRAVITY,
            interaction_strength: DEFAULT_INTERACTION_STRENGTH,
            interaction_threshold: DEFAULT_INTERACTION_THRESHOLD,
            min_distance: DEFAULT_MIN_DISTANCE,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl FluidParams {
    /// Checks every field against its allowed range.
    ///
    /// Errors:
    /// - `Error::InvalidParam` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        if self.num_particles == 0 || self.num_particles % 2 != 0 {
            return Err(Error::InvalidParam(format!(
                "num_particles must be even and > 0, got {}",
                self.num_particles
            )));
        }
        finite("gravity", self.gravity)?;
        finite("interaction_strength", self.interaction_strength)?;
        positive("interaction_threshold", self.interaction_threshold)?;
        positive("min_distance", self.min_distance)?;
        positive("radius", self.radius)?;
        Ok(())
    }
}

fn finite(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidParam(format!("{name} must be finite, got {value}")));
    }
    Ok(())
}

fn positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParam(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}
