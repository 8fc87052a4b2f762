//! # View Controllers
//!
//! One controller per screen plus one per token card. Controllers hold view
//! state and decide what a request result does to it; they never touch egui.
//!
//! Each request slot has a split API:
//!
//! - `mount` / `begin_*` issue [`request::Ticket`]s and return what to send
//! - `apply_*` takes the ticket back with the result
//!
//! The app runs the requests on its runtime in between. The async drivers
//! (`load`, `submit`, `setup`, `fetch_price`) do both halves in place against
//! any [`crate::core::ApiService`].

pub mod auto_trading;
pub mod create_token;
pub mod dashboard;
pub mod request;
pub mod status;
pub mod token_card;
pub mod token_details;

#[cfg(test)]
pub(crate) mod mock;

pub use auto_trading::{AutoTradingController, StrategyForm};
pub use create_token::{CreateMode, CreateTokenController, TokenForm};
pub use dashboard::DashboardController;
pub use request::{InFlight, RequestState, SubmitRejected, Ticket};
pub use status::{status_color, status_icon, StatusColor, StatusIcon};
pub use token_card::TokenCardController;
pub use token_details::TokenDetailsController;
