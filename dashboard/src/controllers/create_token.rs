//! # Create Token Controller
//!
//! Two ways to launch a token:
//!
//! - [`CreateMode::Best`]: the backend picks name, symbol and supply; only the
//!   network is chosen.
//! - [`CreateMode::Custom`]: every field comes from [`TokenForm`].
//!
//! Failures here are shown to the user as [`RequestState::Failed`] carrying
//! the server's message.

use shared::{AutoTokenRequest, CreateTokenRequest, Network, Token};

use super::request::{InFlight, RequestState, SubmitRejected, Ticket};
use crate::core::error::{AppError, RequestError};
use crate::core::service::ApiService;
use crate::utils::validation::{
    first_failure, validate_tax_rate, validate_token_name, validate_token_symbol, MAX_TAX_RATE,
};

pub const DEFAULT_TOTAL_SUPPLY: u64 = 1_000_000_000;
pub const DEFAULT_TAX_RATE: u32 = 5;
const CREATE_FAILED: &str = "Failed to create token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    #[default]
    Best,
    Custom,
}

/// Fields of the custom create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenForm {
    pub name: String,
    symbol: String,
    pub total_supply: u64,
    pub network: Network,
    tax_rate: u32,
}

impl Default for TokenForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply: DEFAULT_TOTAL_SUPPLY,
            network: Network::default(),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl TokenForm {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Symbols are stored uppercase as they are typed.
    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = symbol.to_uppercase();
    }

    pub fn tax_rate(&self) -> u32 {
        self.tax_rate
    }

    pub fn set_tax_rate(&mut self, tax_rate: u32) {
        self.tax_rate = tax_rate.min(MAX_TAX_RATE);
    }

    fn to_request(&self) -> CreateTokenRequest {
        CreateTokenRequest {
            name: self.name.trim().to_string(),
            symbol: self.symbol.trim().to_string(),
            total_supply: self.total_supply,
            network: self.network,
            tax_rate: self.tax_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    Custom(CreateTokenRequest),
    Best(AutoTokenRequest),
}

/// A create request accepted by [`CreateTokenController::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub payload: SubmitPayload,
}

impl Submission {
    pub async fn send(&self, api: &dyn ApiService) -> Result<Token, RequestError> {
        match &self.payload {
            SubmitPayload::Custom(request) => api.create_token(request).await,
            SubmitPayload::Best(request) => api.create_best_token(request).await,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateTokenController {
    pub mode: CreateMode,
    /// Custom fields; `form.network` is shared by both modes.
    pub form: TokenForm,
    state: RequestState<Token>,
    flight: InFlight,
}

impl CreateTokenController {
    pub fn state(&self) -> &RequestState<Token> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.flight.is_busy()
    }

    /// Whether the submit control for the current mode should be disabled.
    pub fn submit_disabled(&self) -> bool {
        if self.is_loading() {
            return true;
        }
        match self.mode {
            CreateMode::Best => false,
            CreateMode::Custom => {
                self.form.name.trim().is_empty() || self.form.symbol.trim().is_empty()
            }
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        first_failure([
            validate_token_name(&self.form.name),
            validate_token_symbol(&self.form.symbol),
            validate_tax_rate(self.form.tax_rate),
        ])
        .into_result()
    }

    /// Validate and move to `Pending`. A rejected submit leaves the state
    /// untouched.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::Busy);
        }

        let payload = match self.mode {
            CreateMode::Custom => {
                self.validate()?;
                SubmitPayload::Custom(self.form.to_request())
            }
            CreateMode::Best => SubmitPayload::Best(AutoTokenRequest {
                network: self.form.network,
            }),
        };

        let ticket = self.flight.try_begin().ok_or(SubmitRejected::Busy)?;
        self.state = RequestState::Pending;
        tracing::info!(mode = ?self.mode, "Submitting token creation");

        Ok(Submission { ticket, payload })
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<Token, RequestError>) {
        if !self.flight.settle(ticket) {
            return;
        }

        self.state = match result {
            Ok(token) => {
                tracing::info!(token_id = %token.id, symbol = %token.symbol, status = %token.status, "Token created");
                RequestState::Succeeded(token)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token creation failed");
                RequestState::Failed(e.detail_or(CREATE_FAILED))
            }
        };
    }

    /// Submit the current mode's request and wait for the outcome.
    pub async fn submit(&mut self, api: &dyn ApiService) -> Result<(), SubmitRejected> {
        let submission = self.begin_submit()?;
        let result = submission.send(api).await;
        self.apply(submission.ticket, result);
        Ok(())
    }
}
