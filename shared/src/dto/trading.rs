use serde::{Deserialize, Serialize};

use super::token::{lenient_timestamp, Network};
use chrono::NaiveDateTime;

fn default_enabled() -> bool {
    true
}

/// Auto-sell rule stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub token_address: String,
    pub network: Network,
    pub trigger_price: f64,
    pub sell_percentage: f64,
    /// The strategies endpoint only lists enabled rules and omits the flag
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

/// `GET /api/trading/strategies` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_strategies: Option<u64>,
    #[serde(default)]
    pub strategies: Vec<Strategy>,
}

/// `POST /api/trading/auto-sell` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSellRequest {
    pub token_address: String,
    pub network: Network,
    pub trigger_price: f64,
    pub sell_percentage: f64,
    pub enabled: bool,
}

/// Acknowledgement for a new auto-sell rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoSellAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Executed trade, as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub token_address: String,
    pub network: Network,
    pub action: String,
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_list_without_strategies_is_empty() {
        let list: StrategyList = serde_json::from_str(r#"{"active_strategies":0}"#).unwrap();
        assert!(list.strategies.is_empty());

        let list: StrategyList = serde_json::from_str("{}").unwrap();
        assert!(list.strategies.is_empty());
    }

    #[test]
    fn test_strategy_enabled_defaults_true() {
        let strategy: Strategy = serde_json::from_str(
            r#"{"id":"s1","token_address":"0xabc","network":"bsc","trigger_price":0.002,"sell_percentage":25.0,"created_at":"2024-05-01T10:00:00"}"#,
        )
        .unwrap();
        assert!(strategy.enabled);
        assert_eq!(strategy.sell_percentage, 25.0);
        assert!(strategy.created_at.is_some());
    }

    #[test]
    fn test_auto_sell_request_wire_shape() {
        let request = AutoSellRequest {
            token_address: "0xabc".to_string(),
            network: Network::BscTestnet,
            trigger_price: 0.5,
            sell_percentage: 10.0,
            enabled: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["network"], "bsc_testnet");
        assert_eq!(value["sell_percentage"], 10.0);
        assert_eq!(value["enabled"], true);
    }
}
