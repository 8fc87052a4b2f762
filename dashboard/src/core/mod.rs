//! # Core Abstractions
//!
//! Error types and the service trait that every controller talks to.
//!
//! ## Modules
//!
//! - **[`error`]**: `RequestError` for API calls, `AppError` for everything else
//! - **[`service`]**: The [`ApiService`] trait implemented by the HTTP client
//!
//! ## Dependency Injection
//!
//! Controllers take `&dyn ApiService`, so tests can substitute a scripted
//! in-memory backend:
//!
//! ```rust,ignore
//! use dashboard::core::service::ApiService;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config)?);
//!
//! // In tests: a mock implementation
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, RequestError, Result};
pub use service::ApiService;
