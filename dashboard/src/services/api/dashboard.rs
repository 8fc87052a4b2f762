//! # Dashboard Endpoints
//!
//! Aggregate statistics and the backend health probe.

use shared::{DashboardOverview, HealthStatus};

use super::client::ApiClient;
use crate::core::error::RequestError;

/// Fetch aggregate stats plus the most recent tokens and trades.
#[tracing::instrument(skip(client))]
pub async fn get_dashboard(client: &ApiClient) -> Result<DashboardOverview, RequestError> {
    let overview: DashboardOverview = client.get("dashboard").await?;
    tracing::debug!(
        total_tokens = overview.stats.total_tokens,
        deployed_tokens = overview.stats.deployed_tokens,
        recent_tokens = overview.recent_tokens.len(),
        "Dashboard fetched"
    );
    Ok(overview)
}

/// Probe backend health.
#[tracing::instrument(skip(client))]
pub async fn health(client: &ApiClient) -> Result<HealthStatus, RequestError> {
    client.get("health").await
}
