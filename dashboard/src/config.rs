//! # Client Configuration
//!
//! Process-wide settings resolved once at startup and passed explicitly to
//! the API client and the app. There is no runtime reconfiguration.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BACKEND_URL` | `http://127.0.0.1:8001` | Backend origin; the API lives under `/api` |
//! | `DASHBOARD_REQUEST_TIMEOUT_SECS` | `10` | Timeout applied to every request |
//!
//! ```rust,no_run
//! use dashboard::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//! assert!(config.api_base().ends_with("/api"));
//! # Ok::<(), dashboard::core::AppError>(())
//! ```

use std::env;
use std::time::Duration;

use crate::core::error::{AppError, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash
    pub backend_url: String,

    /// Timeout applied by the HTTP client to every request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url: String = backend_url.into();
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let backend_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let timeout_secs: u64 = env::var("DASHBOARD_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(format!(
                    "DASHBOARD_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?;

        Ok(Self {
            request_timeout: Duration::from_secs(timeout_secs),
            ..Self::new(backend_url)
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "BACKEND_URL must start with http:// or https:// (got '{}')",
                self.backend_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(AppError::Config(
                "DASHBOARD_REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL every API path is appended to
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}
