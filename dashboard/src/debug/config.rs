//! Logging configuration from environment variables

use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "dashboard.log";
pub const DEFAULT_LOG_FILTER: &str = "dashboard=info,shared=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Directory for the rotated log file
    pub log_dir: PathBuf,
    /// Filter directive (e.g. "dashboard=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lookup("DASHBOARD_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_to_stderr: lookup("DASHBOARD_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
