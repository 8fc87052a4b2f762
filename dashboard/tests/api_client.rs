//! # API Client Tests
//!
//! `ApiClient` over real HTTP against the mock backend.

mod common;

use common::{refused_client, seeded, Backend, MockBackend, DEPLOYED_ADDRESS};
use dashboard::core::{ApiService, RequestError};
use serde_json::Value;
use shared::{AutoSellRequest, AutoTokenRequest, CreateTokenRequest, Network, TokenStatus};

#[tokio::test]
async fn test_list_tokens_and_dashboard() {
    // Arrange
    let server = MockBackend::start(seeded()).await;
    let client = server.client();

    // Act
    let tokens = client.list_tokens().await.unwrap();
    let overview = client.get_dashboard().await.unwrap();

    // Assert
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].contract_address(), Some(DEPLOYED_ADDRESS));
    assert_eq!(overview.stats.total_tokens, 2);
    assert_eq!(overview.stats.deployed_tokens, 1);
    assert!(overview.recent_trades.is_empty());
}

#[tokio::test]
async fn test_empty_token_list() {
    let server = MockBackend::start(Backend::default()).await;
    let tokens = server.client().list_tokens().await.unwrap();
    assert!(tokens.is_empty());
}

#[tokio::test]
async fn test_create_best_decodes_token_like_payload() {
    // Arrange
    let server = MockBackend::start(Backend::default()).await;
    let request = AutoTokenRequest {
        network: Network::BscTestnet,
    };

    // Act
    let token = server.client().create_best_token(&request).await.unwrap();

    // Assert
    assert_eq!(token.name, "DogeMax");
    assert_eq!(token.symbol, "DMAX");
    assert_eq!(token.total_supply, 1_000_000_000);
    assert_eq!(token.network, Network::BscTestnet);
    assert_eq!(token.status, TokenStatus::Deploying);
    assert_eq!(token.id, "");
}

#[tokio::test]
async fn test_error_detail_is_surfaced() {
    // Arrange
    let server = MockBackend::start(seeded()).await;
    let request = CreateTokenRequest {
        name: "Duplicate".to_string(),
        symbol: "T1".to_string(),
        total_supply: 1_000,
        network: Network::Bsc,
        tax_rate: 0,
    };

    // Act
    let err = server.client().create_token(&request).await.unwrap_err();

    // Assert
    assert_eq!(
        err,
        RequestError::Status {
            status: 400,
            detail: Some("Symbol already exists".to_string()),
        }
    );
    assert_eq!(err.to_string(), "Symbol already exists");
}

#[tokio::test]
async fn test_missing_token_is_404_with_detail() {
    let server = MockBackend::start(seeded()).await;
    let err = server.client().get_token("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Token not found"));
}

#[tokio::test]
async fn test_token_id_with_query_characters_stays_in_path() {
    let server = MockBackend::start(seeded()).await;
    let err = server.client().get_token("t1?x=1").await.unwrap_err();
    assert_eq!(err.status(), Some(404));

    let token = server.client().get_token("t1").await.unwrap();
    assert_eq!(token.id, "t1");
}

#[tokio::test]
async fn test_price_for_undeployed_token_fails_with_detail() {
    let server = MockBackend::start(seeded()).await;
    let err = server.client().get_token_price("t2").await.unwrap_err();
    assert_eq!(err.detail(), Some("Token not yet deployed"));

    let price = server.client().get_token_price("t1").await.unwrap();
    assert_eq!(price.price_data.price_usd, 0.00004217);
    assert_eq!(price.price_data.change_24h, Some(12.5));
}

#[tokio::test]
async fn test_server_error_without_body_is_generic() {
    // Arrange
    let server = MockBackend::start(Backend::default()).await;

    // Act
    let err = server.client().get::<Value>("broken").await.unwrap_err();

    // Assert
    assert_eq!(err, RequestError::Status { status: 500, detail: None });
    assert_eq!(err.to_string(), "Request failed with status 500");
    assert_eq!(err.detail_or("Failed to create token"), "Failed to create token");
}

#[tokio::test]
async fn test_structured_detail_is_stringified() {
    let server = MockBackend::start(Backend::default()).await;
    let err = server.client().get::<Value>("validation").await.unwrap_err();
    let detail = err.detail().unwrap();
    assert!(detail.contains("field required"));
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let server = MockBackend::start(Backend::default()).await;
    let err = server.client().get::<Value>("not-json").await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let client = refused_client().await;
    let err = client.list_tokens().await.unwrap_err();
    assert!(matches!(err, RequestError::Network(_)));
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn test_auto_sell_ack_and_strategy_list() {
    // Arrange
    let server = MockBackend::start(seeded()).await;
    let client = server.client();
    let request = AutoSellRequest {
        token_address: DEPLOYED_ADDRESS.to_string(),
        network: Network::BscTestnet,
        trigger_price: 0.001,
        sell_percentage: 25.0,
        enabled: true,
    };

    // Act
    let ack = client.setup_auto_sell(&request).await.unwrap();
    let list = client.list_strategies().await.unwrap();

    // Assert
    assert_eq!(ack.strategy_id.as_deref(), Some("s1"));
    assert_eq!(list.strategies.len(), 1);
    assert_eq!(list.strategies[0].token_address, DEPLOYED_ADDRESS);
}

#[tokio::test]
async fn test_health() {
    let server = MockBackend::start(Backend::default()).await;
    let health = server.client().health().await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.networks.len(), 4);
}
