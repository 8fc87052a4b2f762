//! # Mock Backend
//!
//! In-process axum server speaking the backend's `/api` surface, bound to an
//! ephemeral port.

#![allow(dead_code)]

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{
    AutoSellRequest, CreateTokenRequest, DashboardOverview, DashboardStats, Network, Strategy,
    StrategyList, Token, TokenStatus,
};

use dashboard::config::ClientConfig;
use dashboard::services::api::ApiClient;

pub const DEPLOYED_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

#[derive(Default)]
pub struct Backend {
    pub tokens: Vec<Token>,
    pub strategies: Vec<Strategy>,
    /// When set, `POST /trading/auto-sell` responds 500 with this detail
    pub fail_auto_sell: Option<String>,
}

pub type SharedBackend = Arc<Mutex<Backend>>;

pub fn token(id: &str, status: TokenStatus, address: Option<&str>) -> Token {
    Token {
        id: id.to_string(),
        name: format!("Token {}", id),
        symbol: id.to_uppercase(),
        total_supply: 1_000_000_000,
        network: Network::BscTestnet,
        tax_rate: Some(5),
        status,
        contract_address: address.map(str::to_string),
        explorer_url: address.map(|a| format!("https://testnet.bscscan.com/token/{}", a)),
        transaction_hash: None,
        created_at: None,
    }
}

/// Backend with one deployed and one deploying token.
pub fn seeded() -> Backend {
    Backend {
        tokens: vec![
            token("t1", TokenStatus::Deployed, Some(DEPLOYED_ADDRESS)),
            token("t2", TokenStatus::Deploying, None),
        ],
        ..Backend::default()
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn dashboard(State(backend): State<SharedBackend>) -> Json<DashboardOverview> {
    let backend = backend.lock();
    let deployed = backend.tokens.iter().filter(|t| t.is_deployed()).count() as u64;
    Json(DashboardOverview {
        stats: DashboardStats {
            total_tokens: backend.tokens.len() as u64,
            deployed_tokens: deployed,
            active_strategies: backend.strategies.len() as u64,
            total_trades: 0,
        },
        recent_tokens: backend.tokens.iter().take(5).cloned().collect(),
        recent_trades: Vec::new(),
    })
}

async fn list_tokens(State(backend): State<SharedBackend>) -> Json<Vec<Token>> {
    Json(backend.lock().tokens.clone())
}

async fn get_token(State(backend): State<SharedBackend>, Path(id): Path<String>) -> Response {
    match backend.lock().tokens.iter().find(|t| t.id == id) {
        Some(token) => Json(token.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Token not found"),
    }
}

async fn token_price(State(backend): State<SharedBackend>, Path(id): Path<String>) -> Response {
    let backend = backend.lock();
    let Some(token) = backend.tokens.iter().find(|t| t.id == id) else {
        return detail(StatusCode::NOT_FOUND, "Token not found");
    };
    if !token.is_deployed() {
        return detail(StatusCode::BAD_REQUEST, "Token not yet deployed");
    }
    Json(json!({
        "token_id": token.id,
        "contract_address": token.contract_address,
        "price_data": { "price_usd": 0.00004217, "market_cap": 42170.0, "change_24h": 12.5 },
        "last_updated": "2024-03-09T14:05:00Z"
    }))
    .into_response()
}

async fn create_token(State(backend): State<SharedBackend>, Json(request): Json<CreateTokenRequest>) -> Response {
    if request.tax_rate > 20 {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Tax rate must be between 0 and 20");
    }
    let mut backend = backend.lock();
    if backend.tokens.iter().any(|t| t.symbol == request.symbol) {
        return detail(StatusCode::BAD_REQUEST, "Symbol already exists");
    }
    let token = Token {
        id: format!("t{}", backend.tokens.len() + 1),
        name: request.name,
        symbol: request.symbol,
        total_supply: request.total_supply,
        network: request.network,
        tax_rate: Some(request.tax_rate),
        status: TokenStatus::Deploying,
        ..Token::default()
    };
    backend.tokens.push(token.clone());
    Json(token).into_response()
}

async fn create_best(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "name": "DogeMax",
        "symbol": "DMAX",
        "total_supply": 1_000_000_000u64,
        "network": body["network"],
        "status": "deploying"
    }))
}

async fn strategies(State(backend): State<SharedBackend>) -> Json<StrategyList> {
    let backend = backend.lock();
    Json(StrategyList {
        active_strategies: Some(backend.strategies.len() as u64),
        strategies: backend.strategies.clone(),
    })
}

async fn auto_sell(State(backend): State<SharedBackend>, Json(request): Json<AutoSellRequest>) -> Response {
    let mut backend = backend.lock();
    if let Some(message) = backend.fail_auto_sell.clone() {
        return detail(StatusCode::INTERNAL_SERVER_ERROR, &message);
    }
    let id = format!("s{}", backend.strategies.len() + 1);
    backend.strategies.push(Strategy {
        id: id.clone(),
        token_address: request.token_address,
        network: request.network,
        trigger_price: request.trigger_price,
        sell_percentage: request.sell_percentage,
        enabled: request.enabled,
        created_at: None,
    });
    Json(json!({ "strategy_id": id, "message": "Auto-sell strategy created" })).into_response()
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "networks": ["bsc_testnet", "bsc", "ethereum", "polygon"],
        "timestamp": "2024-03-09T14:05:00Z"
    }))
}

async fn bare_500() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

async fn structured_detail() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": [{ "loc": ["body", "name"], "msg": "field required" }] })),
    )
        .into_response()
}

fn router(backend: SharedBackend) -> Router {
    Router::new()
        .route("/api/dashboard", get(dashboard))
        .route("/api/tokens", get(list_tokens))
        .route("/api/tokens/create", post(create_token))
        .route("/api/tokens/create-best", post(create_best))
        .route("/api/tokens/{id}", get(get_token))
        .route("/api/tokens/{id}/price", get(token_price))
        .route("/api/trading/strategies", get(strategies))
        .route("/api/trading/auto-sell", post(auto_sell))
        .route("/api/health", get(health))
        .route("/api/broken", get(bare_500))
        .route("/api/not-json", get(not_json))
        .route("/api/validation", get(structured_detail))
        .with_state(backend)
}

/// Running mock backend.
pub struct MockBackend {
    pub backend: SharedBackend,
    pub url: String,
}

impl MockBackend {
    pub async fn start(backend: Backend) -> Self {
        let backend = Arc::new(Mutex::new(backend));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(backend.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            backend,
            url: format!("http://{}", addr),
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ClientConfig::new(&self.url)).unwrap()
    }
}

/// Client pointed at a port nothing listens on.
pub async fn refused_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ApiClient::new(&ClientConfig::new(format!("http://{}", addr))).unwrap()
}
