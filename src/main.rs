use anyhow::anyhow;
use eframe::NativeOptions;
use yieldcurve::config::ConfigManager;
use yieldcurve::ui::YieldCurveApp;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug also traces raw API responses
    env_logger::init();

    let config = ConfigManager::load_or_default();
    log::info!("Configuration loaded from {}", config.path().display());

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([900.0, 540.0])
            .with_title("Yield Curve Analyser"),
        ..Default::default()
    };

    eframe::run_native(
        "YieldCurve",
        native_options,
        Box::new(|cc| Ok(Box::new(YieldCurveApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("UI terminated: {}", e))
}
