//! # Token Details Controller
//!
//! Backs the `/token/{id}` route. Load failures are logged and the view
//! falls back to a "not found" message.

use shared::Token;

use super::request::{InFlight, RequestState, Ticket};
use super::token_card::TokenCardController;
use crate::core::error::RequestError;
use crate::core::service::ApiService;

#[derive(Debug, Clone, Default)]
pub struct TokenDetailsController {
    token_id: String,
    state: RequestState<Token>,
    card: Option<TokenCardController>,
    flight: InFlight,
}

impl TokenDetailsController {
    pub fn mount(&mut self, token_id: &str) -> Ticket {
        self.token_id = token_id.to_string();
        self.state = RequestState::Pending;
        self.card = None;
        self.flight.restart()
    }

    pub fn unmount(&mut self) {
        self.flight.abandon();
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    pub fn state(&self) -> &RequestState<Token> {
        &self.state
    }

    pub fn card(&self) -> Option<&TokenCardController> {
        self.card.as_ref()
    }

    pub fn card_mut(&mut self) -> Option<&mut TokenCardController> {
        self.card.as_mut()
    }

    pub fn is_not_found(&self) -> bool {
        self.state.error().is_some()
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<Token, RequestError>) {
        if !self.flight.settle(ticket) {
            return;
        }

        match result {
            Ok(token) => {
                self.card = Some(TokenCardController::new(token.clone()));
                self.state = RequestState::Succeeded(token);
            }
            Err(e) => {
                tracing::warn!(token_id = %self.token_id, error = %e, "Failed to load token");
                self.state = RequestState::Failed(e.to_string());
            }
        }
    }

    pub async fn load(&mut self, api: &dyn ApiService, token_id: &str) {
        let ticket = self.mount(token_id);
        let result = api.get_token(token_id).await;
        self.apply(ticket, result);
    }
}
