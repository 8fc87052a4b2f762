//! # Logging
//!
//! Structured `tracing` output to a daily-rotated file, configured from the
//! environment:
//!
//! - `RUST_LOG`: filter directive (default `dashboard=info,shared=info,warn`)
//! - `DASHBOARD_LOG_DIR`: log directory (default `logs`)
//! - `DASHBOARD_LOG_STDERR`: mirror to stderr (`1` = on)
//!
//! ```rust,no_run
//! use dashboard::debug::{self, DebugConfig};
//!
//! let _guard = debug::init_logger(&DebugConfig::from_env());
//! tracing::info!(path = "tokens", duration_ms = 12, "API call completed");
//! ```

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
