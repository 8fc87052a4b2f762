//! # Backend API Client Module
//!
//! HTTP client for the MemeForge backend. All paths are relative to
//! `{BACKEND_URL}/api`.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient, generic get/post, ApiService impl
//! ├── dashboard.rs  - Dashboard aggregates and health check
//! ├── tokens.rs     - Token list, details, price, creation
//! └── trading.rs    - Auto-sell strategies
//! ```

pub mod client;
pub mod dashboard;
pub mod tokens;
pub mod trading;

pub use client::ApiClient;
