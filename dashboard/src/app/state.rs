//! # Application State
//!
//! Everything the UI renders, shared between the UI thread and the event
//! handler behind `Arc<RwLock<AppState>>`.

use shared::HealthStatus;

use super::router::Route;
use crate::controllers::{
    AutoTradingController, CreateTokenController, DashboardController, TokenDetailsController,
};

/// Last known backend health.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BackendHealth {
    /// No check has completed yet
    #[default]
    Unknown,
    Online(HealthStatus),
    Offline,
}

impl BackendHealth {
    pub fn is_online(&self) -> bool {
        matches!(self, BackendHealth::Online(_))
    }

    /// Nav bar label, e.g. `online (4 networks)`.
    pub fn label(&self) -> String {
        match self {
            BackendHealth::Unknown => "checking...".to_string(),
            BackendHealth::Online(status) => format!("online ({} networks)", status.networks.len()),
            BackendHealth::Offline => "offline".to_string(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Screen currently shown
    pub route: Route,

    pub dashboard: DashboardController,
    pub create_token: CreateTokenController,
    pub auto_trading: AutoTradingController,
    pub token_details: TokenDetailsController,

    pub health: BackendHealth,
    pub health_checking: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_label() {
        assert_eq!(BackendHealth::Unknown.label(), "checking...");
        assert_eq!(BackendHealth::Offline.label(), "offline");

        let status = HealthStatus {
            status: "healthy".to_string(),
            networks: vec!["bsc_testnet".to_string(), "bsc".to_string()],
            timestamp: None,
        };
        let online = BackendHealth::Online(status);
        assert!(online.is_online());
        assert_eq!(online.label(), "online (2 networks)");
    }
}
