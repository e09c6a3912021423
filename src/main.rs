use crop_dashboard::app::CropDashboardApp;
use crop_dashboard::config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::load().unwrap_or_else(|e| {
        log::error!("{e}; using default configuration");
        DashboardConfig::default()
    });
    log::debug!("Configuration: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Agri-Crop Production Dashboard")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Agri-Crop Production Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(CropDashboardApp::new(config)))),
    )
}
