//! # Common Error Types
//!
//! - [`RequestError`]: a single failed call to the backend
//! - [`AppError`]: application-level failures (API, configuration, input validation)
//!
//! ## Usage Pattern
//!
//! ```rust
//! use dashboard::core::error::AppError;
//!
//! fn validate_symbol(symbol: &str) -> Result<&str, AppError> {
//!     if symbol.trim().is_empty() {
//!         return Err(AppError::Validation("Symbol is required".to_string()));
//!     }
//!     Ok(symbol)
//! }
//!
//! assert!(validate_symbol("").is_err());
//! ```

use thiserror::Error;

/// Failure of one request to the backend.
///
/// There are no retries: a `RequestError` is terminal for the attempt that
/// produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Transport failure: connection refused, DNS, timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `detail` is the error body's `detail` field, if any.
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    /// 2xx response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("Request failed with status {status}"),
    }
}

impl RequestError {
    /// Server-provided message, when the backend sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            RequestError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Server-provided message, or `fallback` when there is none
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    /// HTTP status code for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] RequestError),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error.
    ///
    /// Used for rejected form submissions (missing name or symbol) and
    /// out-of-range values.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
