//! # Token Card Controller
//!
//! One per rendered token. Owns the on-demand price fetch and the
//! copy-address / open-explorer actions.

use shared::{PriceSnapshot, Token, TokenPriceResponse};

use super::request::{InFlight, Ticket};
use super::status::{status_color, status_icon, StatusColor, StatusIcon};
use crate::core::error::RequestError;
use crate::core::service::ApiService;
use crate::services::desktop::DesktopShell;

/// Price request issued by [`TokenCardController::begin_price_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFetch {
    pub ticket: Ticket,
    pub token_id: String,
}

#[derive(Debug, Clone)]
pub struct TokenCardController {
    token: Token,
    price: Option<PriceSnapshot>,
    price_flight: InFlight,
}

impl TokenCardController {
    pub fn new(token: Token) -> Self {
        Self {
            token,
            price: None,
            price_flight: InFlight::default(),
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn price(&self) -> Option<&PriceSnapshot> {
        self.price.as_ref()
    }

    pub fn is_loading_price(&self) -> bool {
        self.price_flight.is_busy()
    }

    pub fn status_color(&self) -> StatusColor {
        status_color(self.token.status)
    }

    pub fn status_icon(&self) -> StatusIcon {
        status_icon(self.token.status)
    }

    /// Only deployed tokens with a contract address have a price.
    pub fn can_fetch_price(&self) -> bool {
        self.token.is_deployed() && self.token.contract_address().is_some()
    }

    /// Start a price fetch. `None` when the token is not priceable or a
    /// fetch is already outstanding.
    pub fn begin_price_fetch(&mut self) -> Option<PriceFetch> {
        if !self.can_fetch_price() {
            tracing::debug!(token_id = %self.token.id, status = %self.token.status, "Price fetch skipped: token not deployed");
            return None;
        }

        let ticket = self.price_flight.try_begin()?;
        Some(PriceFetch {
            ticket,
            token_id: self.token.id.clone(),
        })
    }

    /// Apply a price result. Failures keep the previous snapshot.
    pub fn apply_price(&mut self, ticket: Ticket, result: Result<TokenPriceResponse, RequestError>) {
        if !self.price_flight.settle(ticket) {
            return;
        }

        match result {
            Ok(response) => self.price = Some(response.price_data),
            Err(e) => {
                tracing::warn!(token_id = %self.token.id, error = %e, "Failed to load price");
            }
        }
    }

    /// Fetch the price and apply it. Returns `false` when no request was made.
    pub async fn fetch_price(&mut self, api: &dyn ApiService) -> bool {
        let Some(fetch) = self.begin_price_fetch() else {
            return false;
        };
        let result = api.get_token_price(&fetch.token_id).await;
        self.apply_price(fetch.ticket, result);
        true
    }

    /// Copy the contract address; no-op without one.
    pub fn copy_contract_address(&self, shell: &mut dyn DesktopShell) -> bool {
        match self.token.contract_address() {
            Some(address) => {
                shell.copy_to_clipboard(address);
                true
            }
            None => false,
        }
    }

    /// Open the block explorer page; no-op without a URL.
    pub fn open_explorer(&self, shell: &mut dyn DesktopShell) -> bool {
        match self.token.explorer_url() {
            Some(url) => {
                shell.open_url(url);
                true
            }
            None => false,
        }
    }
}
