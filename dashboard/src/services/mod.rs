//! # External Services
//!
//! - **[`api`]**: HTTP client for the MemeForge backend
//! - **[`desktop`]**: Clipboard and browser side effects

pub mod api;
pub mod desktop;
