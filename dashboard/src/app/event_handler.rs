//! # Event Handler
//!
//! Applies task results to [`AppState`](crate::app::AppState). Each event
//! takes the write lock once and updates a single controller slot.

use crate::app::events::{AppEvent, PriceTarget};
use crate::app::state::BackendHealth;
use crate::app::{tasks, App};

impl App {
    /// Apply one task result.
    pub fn handle_event(&mut self, event: AppEvent) {
        tracing::trace!(event = event.kind(), "Handling event");

        match event {
            AppEvent::OverviewLoaded { ticket, result } => {
                self.state.write().dashboard.apply_overview(ticket, result);
            }
            AppEvent::DashboardTokensLoaded { ticket, result } => {
                self.state.write().dashboard.apply_tokens(ticket, result);
            }
            AppEvent::TradingTokensLoaded { ticket, result } => {
                self.state.write().auto_trading.apply_tokens(ticket, result);
            }
            AppEvent::StrategiesLoaded { ticket, result } => {
                self.state.write().auto_trading.apply_strategies(ticket, result);
            }
            AppEvent::TokenCreated { ticket, result } => {
                self.state.write().create_token.apply(ticket, result);
            }
            AppEvent::AutoSellSubmitted { ticket, result } => {
                let refetch = self.state.write().auto_trading.apply_setup(ticket, result);
                if let Some(ticket) = refetch {
                    tasks::trading::fetch_strategies(&self.tasks(), ticket);
                }
            }
            AppEvent::TokenLoaded { ticket, result } => {
                self.state.write().token_details.apply(ticket, result);
            }
            AppEvent::PriceLoaded { target, ticket, result } => {
                let mut state = self.state.write();
                let card = match &target {
                    PriceTarget::Dashboard(token_id) => state.dashboard.card_mut(token_id),
                    PriceTarget::Details => state.token_details.card_mut(),
                };
                match card {
                    Some(card) => card.apply_price(ticket, result),
                    None => tracing::debug!(price_target = ?target, "Price for a card no longer shown"),
                }
            }
            AppEvent::HealthChecked(result) => {
                let mut state = self.state.write();
                state.health_checking = false;
                state.health = match result {
                    Ok(status) => {
                        tracing::info!(status = %status.status, networks = status.networks.len(), "Backend health");
                        BackendHealth::Online(status)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Health check failed");
                        BackendHealth::Offline
                    }
                };
            }
        }
    }
}
