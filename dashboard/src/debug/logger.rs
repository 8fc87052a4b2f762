//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_FILTER, LOG_FILE_NAME};

/// Initialize logging.
///
/// - daily-rotated `dashboard.log` under `DASHBOARD_LOG_DIR`, written off
///   the UI thread
/// - optional stderr mirror (`DASHBOARD_LOG_STDERR=1`)
/// - panic hook that logs location and message
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
/// Returns `None` when the log directory cannot be created; logging is then
/// stderr-only.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", config.log_dir.display(), e);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
        setup_panic_hook();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stderr_layer = config
        .log_to_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(true));

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Warning: Logging already initialized: {}", e);
    }

    setup_panic_hook();

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    Some(guard)
}

/// Log panics before handing off to the default hook.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
