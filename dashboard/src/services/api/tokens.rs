//! # Token Endpoints
//!
//! Token list, single token lookup, on-demand price and the two creation
//! flavours (custom parameters or backend-picked "best" parameters).

use shared::{AutoTokenRequest, CreateTokenRequest, Token, TokenPriceResponse};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// List every token known to the backend, newest first.
#[tracing::instrument(skip(client))]
pub async fn list_tokens(client: &ApiClient) -> Result<Vec<Token>, RequestError> {
    let tokens: Vec<Token> = client.get("tokens").await?;
    tracing::debug!(count = tokens.len(), "Token list fetched");
    Ok(tokens)
}

/// `tokens/{id}` with the id percent-encoded as a single path segment.
fn token_path(token_id: &str) -> String {
    format!("tokens/{}", urlencoding::encode(token_id))
}

/// Fetch a single token by id.
#[tracing::instrument(skip(client))]
pub async fn get_token(client: &ApiClient, token_id: &str) -> Result<Token, RequestError> {
    client.get(&token_path(token_id)).await
}

/// Fetch the current USD price of a deployed token.
#[tracing::instrument(skip(client))]
pub async fn get_token_price(
    client: &ApiClient,
    token_id: &str,
) -> Result<TokenPriceResponse, RequestError> {
    let response: TokenPriceResponse = client.get(&format!("{}/price", token_path(token_id))).await?;
    tracing::debug!(price_usd = response.price_data.price_usd, "Token price fetched");
    Ok(response)
}

/// Create a token with caller-chosen parameters.
#[tracing::instrument(skip(client, request), fields(symbol = %request.symbol, network = %request.network))]
pub async fn create_token(
    client: &ApiClient,
    request: &CreateTokenRequest,
) -> Result<Token, RequestError> {
    let token: Token = client.post("tokens/create", request).await?;
    tracing::info!(token_id = %token.id, status = %token.status, "Token creation accepted");
    Ok(token)
}

/// Let the backend pick name, symbol, supply and tax for the given network.
#[tracing::instrument(skip(client, request), fields(network = %request.network))]
pub async fn create_best_token(
    client: &ApiClient,
    request: &AutoTokenRequest,
) -> Result<Token, RequestError> {
    let token: Token = client.post("tokens/create-best", request).await?;
    tracing::info!(
        token_id = %token.id,
        symbol = %token.symbol,
        status = %token.status,
        "Best-token creation accepted"
    );
    Ok(token)
}
