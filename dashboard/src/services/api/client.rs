//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every call is a single request: no retry, no per-call timeout, no
//! cancellation. It resolves to the parsed body or a [`RequestError`].

use std::time::Instant;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AutoSellAck, AutoSellRequest, AutoTokenRequest, CreateTokenRequest, DashboardOverview,
    ErrorResponse, HealthStatus, StrategyList, Token, TokenPriceResponse,
};

use crate::config::ClientConfig;
use crate::core::error::{AppError, RequestError};
use crate::core::service::ApiService;

/// HTTP client for communicating with the backend API server.
///
/// Cheap to share behind an `Arc`; reqwest keeps one connection pool per client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    api_base: String,
}

impl ApiClient {
    /// Build a client for the configured backend.
    ///
    /// The configured timeout applies to every request made by this client.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: config.api_base(),
        })
    }

    /// Base URL for API requests, e.g. `http://127.0.0.1:8001/api`.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// `GET {api_base}/{path}` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let start = Instant::now();
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Network error");
            RequestError::Network(e.to_string())
        })?;

        Self::read_response(response, &url, start).await
    }

    /// `POST {api_base}/{path}` with a JSON body and decode the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Network error");
            RequestError::Network(e.to_string())
        })?;

        Self::read_response(response, &url, start).await
    }

    async fn read_response<T: DeserializeOwned>(
        response: Response,
        url: &str,
        start: Instant,
    ) -> Result<T, RequestError> {
        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to read response body");
            RequestError::Network(e.to_string())
        })?;
        let duration = start.elapsed();

        if status.is_success() {
            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                tracing::error!(
                    error = %e,
                    url = %url,
                    status = status.as_u16(),
                    duration_ms = duration.as_millis(),
                    "Response parse error"
                );
                RequestError::Decode(e.to_string())
            })?;

            tracing::debug!(
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request completed"
            );
            Ok(parsed)
        } else {
            let detail = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|error| error.message());

            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                detail = ?detail,
                duration_ms = duration.as_millis(),
                "Request failed with non-success status"
            );
            Err(RequestError::Status {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn get_dashboard(&self) -> Result<DashboardOverview, RequestError> {
        super::dashboard::get_dashboard(self).await
    }

    async fn list_tokens(&self) -> Result<Vec<Token>, RequestError> {
        super::tokens::list_tokens(self).await
    }

    async fn get_token(&self, token_id: &str) -> Result<Token, RequestError> {
        super::tokens::get_token(self, token_id).await
    }

    async fn get_token_price(&self, token_id: &str) -> Result<TokenPriceResponse, RequestError> {
        super::tokens::get_token_price(self, token_id).await
    }

    async fn create_token(&self, request: &CreateTokenRequest) -> Result<Token, RequestError> {
        super::tokens::create_token(self, request).await
    }

    async fn create_best_token(&self, request: &AutoTokenRequest) -> Result<Token, RequestError> {
        super::tokens::create_best_token(self, request).await
    }

    async fn list_strategies(&self) -> Result<StrategyList, RequestError> {
        super::trading::list_strategies(self).await
    }

    async fn setup_auto_sell(&self, request: &AutoSellRequest) -> Result<AutoSellAck, RequestError> {
        super::trading::setup_auto_sell(self, request).await
    }

    async fn health(&self) -> Result<HealthStatus, RequestError> {
        super::dashboard::health(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = ApiClient::new(&ClientConfig::new("http://localhost:8001/")).unwrap();
        assert_eq!(client.api_base(), "http://localhost:8001/api");
        assert_eq!(client.url("/tokens"), "http://localhost:8001/api/tokens");
        assert_eq!(client.url("trading/strategies"), "http://localhost:8001/api/trading/strategies");
    }
}
