//! # MemeForge Dashboard
//!
//! Desktop client for the MemeForge backend: launch memecoins, watch their
//! deployment, check prices and set up auto-sell rules.
//!
//! ## Module Structure
//!
//! - **config**: backend URL and request timeout from the environment
//! - **core**: error types and the [`core::ApiService`] trait
//! - **services**: HTTP client ([`services::api::ApiClient`]) and desktop
//!   side effects (clipboard, browser)
//! - **controllers**: per-screen view state and request lifecycles
//! - **app**: [`app::App`], routing, events and background tasks
//! - **ui**: egui rendering
//! - **debug**: logging setup
//! - **utils**: validation and display formatting
//!
//! ## Headless use
//!
//! Controllers can be driven without a window against any `ApiService`:
//!
//! ```rust,no_run
//! use dashboard::config::ClientConfig;
//! use dashboard::controllers::DashboardController;
//! use dashboard::services::api::ApiClient;
//!
//! # async fn run() -> dashboard::core::Result<()> {
//! let client = ApiClient::new(&ClientConfig::from_env()?)?;
//! let mut dashboard = DashboardController::default();
//! dashboard.load(&client).await;
//! println!("{} tokens", dashboard.tokens().count());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod controllers;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::ClientConfig;
pub use core::{ApiService, AppError, RequestError};
