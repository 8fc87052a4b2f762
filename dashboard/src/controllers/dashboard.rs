//! # Dashboard Controller
//!
//! Loads the aggregate overview and the token list side by side on mount.
//! Each slot is filled independently; a failure in one is logged and never
//! hides what the other returned.

use shared::{DashboardOverview, DashboardStats, Token, Trade};

use super::request::{InFlight, Ticket};
use super::token_card::TokenCardController;
use crate::core::error::RequestError;
use crate::core::service::ApiService;

pub use super::status::{status_color, status_icon, StatusColor, StatusIcon};

/// Tickets for the two requests issued on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLoad {
    pub overview: Ticket,
    pub tokens: Ticket,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardController {
    overview: Option<DashboardOverview>,
    cards: Vec<TokenCardController>,
    tokens_loading: bool,
    overview_flight: InFlight,
    tokens_flight: InFlight,
}

impl DashboardController {
    /// Start both loads. Any results still outstanding from a previous mount
    /// become stale.
    pub fn mount(&mut self) -> DashboardLoad {
        self.tokens_loading = true;
        DashboardLoad {
            overview: self.overview_flight.restart(),
            tokens: self.tokens_flight.restart(),
        }
    }

    /// Drop interest in outstanding loads.
    pub fn unmount(&mut self) {
        self.overview_flight.abandon();
        self.tokens_flight.abandon();
        self.tokens_loading = false;
    }

    pub fn apply_overview(&mut self, ticket: Ticket, result: Result<DashboardOverview, RequestError>) {
        if !self.overview_flight.settle(ticket) {
            return;
        }

        match result {
            Ok(overview) => self.overview = Some(overview),
            Err(e) => tracing::warn!(error = %e, "Failed to load dashboard"),
        }
    }

    pub fn apply_tokens(&mut self, ticket: Ticket, result: Result<Vec<Token>, RequestError>) {
        if !self.tokens_flight.settle(ticket) {
            return;
        }

        self.tokens_loading = false;
        match result {
            Ok(tokens) => {
                self.cards = tokens.into_iter().map(TokenCardController::new).collect();
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load tokens"),
        }
    }

    /// Mount and run both loads concurrently.
    pub async fn load(&mut self, api: &dyn ApiService) {
        let load = self.mount();
        let (overview, tokens) = futures::join!(api.get_dashboard(), api.list_tokens());
        self.apply_overview(load.overview, overview);
        self.apply_tokens(load.tokens, tokens);
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.overview.as_ref().map(|o| &o.stats)
    }

    pub fn recent_tokens(&self) -> &[Token] {
        self.overview
            .as_ref()
            .map(|o| o.recent_tokens.as_slice())
            .unwrap_or_default()
    }

    pub fn recent_trades(&self) -> &[Trade] {
        self.overview
            .as_ref()
            .map(|o| o.recent_trades.as_slice())
            .unwrap_or_default()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.cards.iter().map(TokenCardController::token)
    }

    pub fn cards(&self) -> &[TokenCardController] {
        &self.cards
    }

    pub fn card_mut(&mut self, token_id: &str) -> Option<&mut TokenCardController> {
        self.cards.iter_mut().find(|card| card.token().id == token_id)
    }

    pub fn is_loading(&self) -> bool {
        self.tokens_loading
    }

    /// Token list finished loading and is empty.
    pub fn show_empty_state(&self) -> bool {
        !self.tokens_loading && self.cards.is_empty()
    }
}
