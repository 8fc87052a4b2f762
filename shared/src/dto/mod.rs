//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the backend under the `/api` prefix.
//!
//! ## Module Organization
//!
//! - [`token`] - Token records, networks, status, creation requests, prices
//! - [`trading`] - Auto-sell strategies, setup requests and acks, trades
//! - [`dashboard`] - Dashboard aggregates and the health endpoint
//! - [`error`] - Error body returned on non-2xx responses
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/tokens/create-best
//! Content-Type: application/json
//!
//! { "network": "bsc_testnet" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "id": "5b0c...",
//!   "name": "DogeMax",
//!   "symbol": "DMAX",
//!   "total_supply": 1000000000,
//!   "network": "bsc_testnet",
//!   "status": "deploying",
//!   "contract_address": null
//! }
//! ```

pub mod dashboard;
pub mod error;
pub mod token;
pub mod trading;

pub use dashboard::*;
pub use error::*;
pub use token::*;
pub use trading::*;
