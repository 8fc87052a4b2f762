use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Blockchain networks the backend can deploy to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    #[default]
    BscTestnet,
    Bsc,
    Ethereum,
    Polygon,
}

impl Network {
    /// All networks in selector order
    pub fn all() -> &'static [Network] {
        &[
            Network::BscTestnet,
            Network::Bsc,
            Network::Ethereum,
            Network::Polygon,
        ]
    }

    /// Wire identifier, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::BscTestnet => "bsc_testnet",
            Network::Bsc => "bsc",
            Network::Ethereum => "ethereum",
            Network::Polygon => "polygon",
        }
    }

    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            Network::BscTestnet => "BSC Testnet (Free)",
            Network::Bsc => "BSC Mainnet",
            Network::Ethereum => "Ethereum",
            Network::Polygon => "Polygon",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment status reported by the backend.
///
/// Any value the client does not know decodes as [`TokenStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStatus {
    #[default]
    Pending,
    Deploying,
    Deployed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl TokenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStatus::Pending => "pending",
            TokenStatus::Deploying => "deploying",
            TokenStatus::Deployed => "deployed",
            TokenStatus::Failed => "failed",
            TokenStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token record as returned by the backend.
///
/// Create responses and dashboard `recent_tokens` are "token-like": they may
/// omit `id`, `total_supply` or `tax_rate`, which then decode to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub total_supply: u64,
    pub network: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<u32>,
    pub status: TokenStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

impl Token {
    pub fn is_deployed(&self) -> bool {
        self.status == TokenStatus::Deployed
    }

    /// Contract address, treating an empty string as absent
    pub fn contract_address(&self) -> Option<&str> {
        self.contract_address
            .as_deref()
            .filter(|address| !address.trim().is_empty())
    }

    /// Explorer link, treating an empty string as absent
    pub fn explorer_url(&self) -> Option<&str> {
        self.explorer_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// `POST /api/tokens/create` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenRequest {
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub network: Network,
    pub tax_rate: u32,
}

/// `POST /api/tokens/create-best` body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoTokenRequest {
    pub network: Network,
}

/// Point-in-time USD price for a deployed token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub price_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<f64>,
}

/// `GET /api/tokens/{id}/price` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPriceResponse {
    #[serde(default)]
    pub token_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    pub price_data: PriceSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Accepts RFC 3339 timestamps as well as the naive ISO-8601 form the backend
/// emits; anything unparseable becomes `None` rather than failing the record.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        DateTime::parse_from_rfc3339(&value)
            .map(|dt| dt.naive_utc())
            .or_else(|_| value.parse::<NaiveDateTime>())
            .ok()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_wire_names() {
        for network in Network::all() {
            let json = serde_json::to_string(network).unwrap();
            assert_eq!(json, format!("\"{}\"", network.as_str()));
        }
    }

    #[test]
    fn test_unknown_status_decodes() {
        let status: TokenStatus = serde_json::from_str("\"queued\"").unwrap();
        assert_eq!(status, TokenStatus::Unknown);
    }

    #[test]
    fn test_token_like_payload_decodes_with_defaults() {
        let token: Token = serde_json::from_str(
            r#"{"name":"DogeMax","symbol":"DMAX","total_supply":1000000000,"network":"bsc_testnet","status":"deploying"}"#,
        )
        .unwrap();

        assert_eq!(token.id, "");
        assert_eq!(token.total_supply, 1_000_000_000);
        assert_eq!(token.network, Network::BscTestnet);
        assert_eq!(token.status, TokenStatus::Deploying);
        assert!(token.tax_rate.is_none());
        assert!(token.contract_address().is_none());
    }

    #[test]
    fn test_created_at_accepts_naive_and_rfc3339() {
        let naive: Token = serde_json::from_str(
            r#"{"name":"A","symbol":"A","network":"bsc","status":"deployed","created_at":"2024-05-01T12:30:00.250000"}"#,
        )
        .unwrap();
        assert!(naive.created_at.is_some());

        let zoned: Token = serde_json::from_str(
            r#"{"name":"A","symbol":"A","network":"bsc","status":"deployed","created_at":"2024-05-01T12:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(naive.created_at.map(|t| t.date()), zoned.created_at.map(|t| t.date()));

        let garbage: Token = serde_json::from_str(
            r#"{"name":"A","symbol":"A","network":"bsc","status":"deployed","created_at":"yesterday"}"#,
        )
        .unwrap();
        assert!(garbage.created_at.is_none());
    }

    #[test]
    fn test_empty_contract_address_is_absent() {
        let token = Token {
            contract_address: Some("  ".to_string()),
            explorer_url: Some(String::new()),
            ..Token::default()
        };
        assert!(token.contract_address().is_none());
        assert!(token.explorer_url().is_none());
    }
}
