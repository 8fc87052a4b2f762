//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the MemeForge backend and the
//! dashboard client. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::token`]**: Tokens, networks, deployment status, prices
//!   - **[`dto::trading`]**: Auto-sell strategies and trades
//!   - **[`dto::dashboard`]**: Aggregate dashboard stats and health
//!   - **[`dto::error`]**: The backend's `{detail}` error body
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten contract addresses for display
//!   - **[`utils::format_supply`]**: Group supply digits with commas
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in both Rust and JSON
//! - Enums serialize to snake_case strings (`"bsc_testnet"`, `"deployed"`)
//! - Fields the backend sometimes omits carry `#[serde(default)]` so that
//!   partial "token-like" payloads still decode
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::token::{Token, TokenStatus};
//!
//! let token: Token = serde_json::from_str(
//!     r#"{"name":"DogeMax","symbol":"DMAX","network":"bsc_testnet","status":"deploying"}"#,
//! ).unwrap();
//! assert_eq!(token.status, TokenStatus::Deploying);
//! assert!(token.contract_address.is_none());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
