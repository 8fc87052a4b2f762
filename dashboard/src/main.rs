use std::sync::Arc;

use dashboard::config::ClientConfig;
use dashboard::debug::{self, DebugConfig};
use dashboard::services::api::ApiClient;
use dashboard::ui::DashboardUi;
use dashboard::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let _log_guard = debug::init_logger(&DebugConfig::from_env());

    let config = ClientConfig::from_env()?;
    config.validate()?;
    tracing::info!(
        backend_url = %config.backend_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting dashboard"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("dashboard-io")
        .build()?;

    let client = ApiClient::new(&config)?;
    let app = App::new(Arc::new(client), runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MemeForge Dashboard")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MemeForge Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardUi::new(cc, app)))),
    )?;

    tracing::info!("Dashboard closed");
    Ok(())
}
