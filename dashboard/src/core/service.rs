//! # Service Traits
//!
//! The seam between controllers and the backend. Controllers only ever see
//! `&dyn ApiService`; the production implementation is
//! [`crate::services::api::ApiClient`].

use async_trait::async_trait;
use shared::{
    AutoSellAck, AutoSellRequest, AutoTokenRequest, CreateTokenRequest, DashboardOverview,
    HealthStatus, StrategyList, Token, TokenPriceResponse,
};

use super::error::RequestError;

/// Backend operations used by the dashboard views.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `GET /dashboard`
    async fn get_dashboard(&self) -> Result<DashboardOverview, RequestError>;

    /// `GET /tokens`
    async fn list_tokens(&self) -> Result<Vec<Token>, RequestError>;

    /// `GET /tokens/{id}`
    async fn get_token(&self, token_id: &str) -> Result<Token, RequestError>;

    /// `GET /tokens/{id}/price`
    async fn get_token_price(&self, token_id: &str) -> Result<TokenPriceResponse, RequestError>;

    /// `POST /tokens/create`
    async fn create_token(&self, request: &CreateTokenRequest) -> Result<Token, RequestError>;

    /// `POST /tokens/create-best`
    async fn create_best_token(&self, request: &AutoTokenRequest) -> Result<Token, RequestError>;

    /// `GET /trading/strategies`
    async fn list_strategies(&self) -> Result<StrategyList, RequestError>;

    /// `POST /trading/auto-sell`
    async fn setup_auto_sell(&self, request: &AutoSellRequest) -> Result<AutoSellAck, RequestError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, RequestError>;
}
