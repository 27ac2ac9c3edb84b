use density_fluid::app::{FluidApp, TITLE};
use density_fluid::FluidParams;
use eframe::egui;

// ===================================================================================
// main
// ===================================================================================

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = FluidParams::default();
    log::info!("Starting fluid simulation: {params:?}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([params.width, params.height])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(FluidApp::new(params)?))),
    )
}
