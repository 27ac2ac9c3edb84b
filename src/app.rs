/// The `egui` re-export for building native GUIs with the eframe framework.
use eframe::egui::{self, Color32};
use eframe::epaint::Vec2;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::params::FluidParams;
use crate::particle::{DensityClass, ParticleSet};
use crate::step::step;

/// Window title.
pub const TITLE: &str = "Fluid Simulation";
/// Fill behind the particles.
pub const BACKGROUND: Color32 = Color32::BLUE;
/// How often (in frames) the class heights are logged at debug level.
const REPORT_EVERY_FRAMES: u64 = 120;

/// Viewer state:
/// - the fixed parameters and the particle set they produced
/// - the RNG used to (re)spawn the set
/// - a "running" flag toggled with Space; R re-spawns
pub struct FluidApp {
    params: FluidParams,
    particles: ParticleSet,
    rng: StdRng,
    running: bool,
    frames: u64,
    reported_blow_up: bool,
}

impl FluidApp {
    /// Creates the viewer with an OS-seeded RNG.
    pub fn new(params: FluidParams) -> Result<Self> {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Creates the viewer with a fixed seed, giving the same opening layout every run.
    pub fn with_seed(params: FluidParams, seed: u64) -> Result<Self> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: FluidParams, mut rng: StdRng) -> Result<Self> {
        let particles = ParticleSet::spawn(&params, &mut rng)?;
        log::info!(
            "Spawned {} particles in a {}x{} box",
            particles.len(),
            params.width,
            params.height
        );
        Ok(Self {
            params,
            particles,
            rng,
            running: true,
            frames: 0,
            reported_blow_up: false,
        })
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        log::debug!("running = {}", self.running);
    }

    /// Throws away the current set and spawns a fresh one from the viewer's RNG.
    pub fn reset(&mut self) -> Result<()> {
        self.particles = ParticleSet::spawn(&self.params, &mut self.rng)?;
        self.frames = 0;
        self.reported_blow_up = false;
        log::debug!("Particle set re-spawned");
        Ok(())
    }

    /// One simulation tick of `dt` seconds, plus the diagnostics that ride along with it.
    pub fn advance(&mut self, dt: f32) {
        if !self.running {
            return;
        }

        step(&mut self.particles, &self.params, dt);
        self.frames += 1;

        if !self.reported_blow_up && !self.particles.all_finite() {
            self.reported_blow_up = true;
            log::warn!(
                "Particle state became non-finite after {} frames (dt = {dt})",
                self.frames
            );
        }

        if self.frames % REPORT_EVERY_FRAMES == 0 {
            log::debug!(
                "frame {}: mean y dense = {:?}, light = {:?}",
                self.frames,
                self.particles.mean_height(DensityClass::Dense),
                self.particles.mean_height(DensityClass::Light)
            );
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (toggle, reset) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
            )
        });

        if toggle {
            self.toggle_running();
        }
        if reset {
            if let Err(e) = self.reset() {
                log::warn!("Reset failed: {e}");
            }
        }
    }
}

impl eframe::App for FluidApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Wall-clock seconds since the previous frame.
        let dt = ctx.input(|i| i.unstable_dt);
        self.advance(dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let painter = ui.painter();
                let origin = ui.max_rect().min;

                for p in self.particles.iter() {
                    let pos = origin + Vec2::new(p.position.x, p.position.y);
                    painter.circle_filled(pos, self.params.radius, p.color);
                }
            });

        // Keep animating.
        ctx.request_repaint();
    }
}
