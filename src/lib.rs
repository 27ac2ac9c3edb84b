//! Two-density particle "fluid": dense particles start on top, light ones below,
//! and gravity plus a short-range density-difference force let them mix.
//!
//! The core is [`ParticleSet::spawn`] and [`step`]; [`FluidApp`] is the eframe
//! viewer that drives them once per frame.

pub mod app;
pub mod error;
pub mod params;
pub mod particle;
pub mod step;

pub use app::FluidApp;
pub use error::{Error, Result};
pub use params::FluidParams;
pub use particle::{DensityClass, Particle, ParticleSet};
pub use step::step;
