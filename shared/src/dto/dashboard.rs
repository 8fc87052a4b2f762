use serde::{Deserialize, Serialize};

use super::token::Token;
use super::trading::Trade;

/// Aggregate counters computed by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tokens: u64,
    pub deployed_tokens: u64,
    pub active_strategies: u64,
    pub total_trades: u64,
}

/// `GET /api/dashboard` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_tokens: Vec<Token>,
    #[serde(default)]
    pub recent_trades: Vec<Trade>,
}

/// `GET /api/health` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub networks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
