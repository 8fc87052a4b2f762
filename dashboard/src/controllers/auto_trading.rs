//! # Auto-Trading Controller
//!
//! Lists deployed tokens and active auto-sell rules, and submits new rules.
//! Every failure on this screen is logged only; the user keeps what they
//! entered and whatever list was already shown.

use shared::{AutoSellAck, AutoSellRequest, Network, Strategy, StrategyList, Token};

use super::request::{InFlight, SubmitRejected, Ticket};
use crate::core::error::{AppError, RequestError};
use crate::core::service::ApiService;

pub const DEFAULT_SELL_PERCENTAGE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyForm {
    token_address: String,
    pub network: Network,
    trigger_price: f64,
    sell_percentage: f64,
    pub enabled: bool,
}

impl Default for StrategyForm {
    fn default() -> Self {
        Self {
            token_address: String::new(),
            network: Network::default(),
            trigger_price: 0.0,
            sell_percentage: DEFAULT_SELL_PERCENTAGE,
            enabled: true,
        }
    }
}

impl StrategyForm {
    pub fn token_address(&self) -> &str {
        &self.token_address
    }

    pub fn trigger_price(&self) -> f64 {
        self.trigger_price
    }

    /// Negative (and NaN) prices become zero.
    pub fn set_trigger_price(&mut self, price: f64) {
        self.trigger_price = if price > 0.0 { price } else { 0.0 };
    }

    pub fn sell_percentage(&self) -> f64 {
        self.sell_percentage
    }

    pub fn set_sell_percentage(&mut self, percentage: f64) {
        self.sell_percentage = if percentage.is_nan() {
            DEFAULT_SELL_PERCENTAGE
        } else {
            percentage.clamp(1.0, 100.0)
        };
    }

    fn to_request(&self) -> AutoSellRequest {
        AutoSellRequest {
            token_address: self.token_address.clone(),
            network: self.network,
            trigger_price: self.trigger_price,
            sell_percentage: self.sell_percentage,
            enabled: self.enabled,
        }
    }
}

/// Tickets for the two mount loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingLoad {
    pub tokens: Ticket,
    pub strategies: Ticket,
}

/// An auto-sell request accepted by [`AutoTradingController::begin_setup`].
#[derive(Debug, Clone, PartialEq)]
pub struct SetupSubmission {
    pub ticket: Ticket,
    pub request: AutoSellRequest,
}

#[derive(Debug, Clone, Default)]
pub struct AutoTradingController {
    pub form: StrategyForm,
    deployed_tokens: Vec<Token>,
    strategies: Vec<Strategy>,
    tokens_flight: InFlight,
    strategies_flight: InFlight,
    setup_flight: InFlight,
}

impl AutoTradingController {
    pub fn mount(&mut self) -> TradingLoad {
        TradingLoad {
            tokens: self.tokens_flight.restart(),
            strategies: self.strategies_flight.restart(),
        }
    }

    pub fn unmount(&mut self) {
        self.tokens_flight.abandon();
        self.strategies_flight.abandon();
    }

    /// Keep only deployed tokens; they are the only ones a rule can target.
    pub fn apply_tokens(&mut self, ticket: Ticket, result: Result<Vec<Token>, RequestError>) {
        if !self.tokens_flight.settle(ticket) {
            return;
        }

        match result {
            Ok(tokens) => {
                self.deployed_tokens = tokens.into_iter().filter(Token::is_deployed).collect();
            }
            Err(e) => tracing::warn!(error = %e, "Failed to load tokens"),
        }
    }

    pub fn apply_strategies(&mut self, ticket: Ticket, result: Result<StrategyList, RequestError>) {
        if !self.strategies_flight.settle(ticket) {
            return;
        }

        match result {
            Ok(list) => self.strategies = list.strategies,
            Err(e) => tracing::warn!(error = %e, "Failed to load strategies"),
        }
    }

    pub fn deployed_tokens(&self) -> &[Token] {
        &self.deployed_tokens
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn is_submitting(&self) -> bool {
        self.setup_flight.is_busy()
    }

    /// Pick the rule target by contract address.
    pub fn select_token(&mut self, address: &str) {
        self.form.token_address = address.to_string();
        if let Some(token) = self
            .deployed_tokens
            .iter()
            .find(|t| t.contract_address() == Some(address))
        {
            self.form.network = token.network;
        }
    }

    /// Selected token, when it is still in the deployed list.
    pub fn selected_token(&self) -> Option<&Token> {
        self.deployed_tokens
            .iter()
            .find(|t| t.contract_address() == Some(self.form.token_address.as_str()))
    }

    pub fn submit_disabled(&self) -> bool {
        self.form.token_address.is_empty() || self.is_submitting()
    }

    pub fn begin_setup(&mut self) -> Result<SetupSubmission, SubmitRejected> {
        if self.form.token_address.is_empty() {
            return Err(SubmitRejected::Invalid(AppError::Validation(
                "Select a token first".to_string(),
            )));
        }

        let ticket = self.setup_flight.try_begin().ok_or(SubmitRejected::Busy)?;
        let request = self.form.to_request();
        tracing::info!(
            token_address = %request.token_address,
            trigger_price = request.trigger_price,
            sell_percentage = request.sell_percentage,
            "Submitting auto-sell strategy"
        );

        Ok(SetupSubmission { ticket, request })
    }

    /// Apply the setup outcome. On success the form resets and the returned
    /// ticket must be used for the strategy re-fetch.
    pub fn apply_setup(&mut self, ticket: Ticket, result: Result<AutoSellAck, RequestError>) -> Option<Ticket> {
        if !self.setup_flight.settle(ticket) {
            return None;
        }

        match result {
            Ok(ack) => {
                tracing::info!(strategy_id = ?ack.strategy_id, "Auto-sell strategy created");
                self.form = StrategyForm::default();
                Some(self.strategies_flight.restart())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to set up auto-sell");
                None
            }
        }
    }

    /// Mount and run both loads concurrently.
    pub async fn load(&mut self, api: &dyn ApiService) {
        let load = self.mount();
        let (tokens, strategies) = futures::join!(api.list_tokens(), api.list_strategies());
        self.apply_tokens(load.tokens, tokens);
        self.apply_strategies(load.strategies, strategies);
    }

    /// Submit the form; on success re-fetch the strategy list.
    pub async fn setup(&mut self, api: &dyn ApiService) -> Result<(), SubmitRejected> {
        let submission = self.begin_setup()?;
        let result = api.setup_auto_sell(&submission.request).await;

        if let Some(ticket) = self.apply_setup(submission.ticket, result) {
            let strategies = api.list_strategies().await;
            self.apply_strategies(ticket, strategies);
        }
        Ok(())
    }
}
