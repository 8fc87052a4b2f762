//! # Trading Endpoints
//!
//! Auto-sell strategy listing and setup.

use shared::{AutoSellAck, AutoSellRequest, StrategyList};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// List the active auto-sell strategies.
#[tracing::instrument(skip(client))]
pub async fn list_strategies(client: &ApiClient) -> Result<StrategyList, RequestError> {
    let list: StrategyList = client.get("trading/strategies").await?;
    tracing::debug!(count = list.strategies.len(), "Strategies fetched");
    Ok(list)
}

/// Register a new auto-sell rule.
#[tracing::instrument(
    skip(client, request),
    fields(token_address = %request.token_address, network = %request.network)
)]
pub async fn setup_auto_sell(
    client: &ApiClient,
    request: &AutoSellRequest,
) -> Result<AutoSellAck, RequestError> {
    let ack: AutoSellAck = client.post("trading/auto-sell", request).await?;
    tracing::info!(strategy_id = ?ack.strategy_id, "Auto-sell strategy registered");
    Ok(ack)
}
