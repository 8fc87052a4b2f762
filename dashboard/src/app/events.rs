//! # Application Events
//!
//! Results of background requests, sent from Tokio tasks to the UI thread.
//! Every request-backed event carries the [`Ticket`] it was issued with.

use shared::{AutoSellAck, DashboardOverview, HealthStatus, StrategyList, Token, TokenPriceResponse};

use crate::controllers::Ticket;
use crate::core::error::RequestError;

/// Which card a price result belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceTarget {
    /// Card on the dashboard grid, by token id
    Dashboard(String),
    /// Card on the token details screen
    Details,
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// `/dashboard` overview received
    OverviewLoaded {
        ticket: Ticket,
        result: Result<DashboardOverview, RequestError>,
    },
    /// Token list for the dashboard received
    DashboardTokensLoaded {
        ticket: Ticket,
        result: Result<Vec<Token>, RequestError>,
    },
    /// Token list for the auto-trading screen received
    TradingTokensLoaded {
        ticket: Ticket,
        result: Result<Vec<Token>, RequestError>,
    },
    /// Strategy list received
    StrategiesLoaded {
        ticket: Ticket,
        result: Result<StrategyList, RequestError>,
    },
    /// Token creation finished
    TokenCreated {
        ticket: Ticket,
        result: Result<Token, RequestError>,
    },
    /// Auto-sell setup finished
    AutoSellSubmitted {
        ticket: Ticket,
        result: Result<AutoSellAck, RequestError>,
    },
    /// Single token for the details screen received
    TokenLoaded {
        ticket: Ticket,
        result: Result<Token, RequestError>,
    },
    /// Price for one card received
    PriceLoaded {
        target: PriceTarget,
        ticket: Ticket,
        result: Result<TokenPriceResponse, RequestError>,
    },
    /// Health check finished
    HealthChecked(Result<HealthStatus, RequestError>),
}

impl AppEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::OverviewLoaded { .. } => "overview_loaded",
            AppEvent::DashboardTokensLoaded { .. } => "dashboard_tokens_loaded",
            AppEvent::TradingTokensLoaded { .. } => "trading_tokens_loaded",
            AppEvent::StrategiesLoaded { .. } => "strategies_loaded",
            AppEvent::TokenCreated { .. } => "token_created",
            AppEvent::AutoSellSubmitted { .. } => "auto_sell_submitted",
            AppEvent::TokenLoaded { .. } => "token_loaded",
            AppEvent::PriceLoaded { .. } => "price_loaded",
            AppEvent::HealthChecked(_) => "health_checked",
        }
    }
}
