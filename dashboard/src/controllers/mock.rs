//! Scripted in-memory backend for controller tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    AutoSellAck, AutoSellRequest, AutoTokenRequest, CreateTokenRequest, DashboardOverview,
    HealthStatus, Network, PriceSnapshot, Strategy, StrategyList, Token, TokenPriceResponse,
    TokenStatus,
};

use crate::core::error::RequestError;
use crate::core::service::ApiService;

fn unscripted<T>() -> Mutex<Result<T, RequestError>> {
    Mutex::new(Err(RequestError::Network("connection refused".to_string())))
}

/// Each endpoint returns a clone of its scripted result. A successful
/// auto-sell setup appends the new rule to `strategies`, like the real backend.
pub struct MockApi {
    pub overview: Mutex<Result<DashboardOverview, RequestError>>,
    pub tokens: Mutex<Result<Vec<Token>, RequestError>>,
    pub token: Mutex<Result<Token, RequestError>>,
    pub price: Mutex<Result<TokenPriceResponse, RequestError>>,
    pub created: Mutex<Result<Token, RequestError>>,
    pub strategies: Mutex<Result<StrategyList, RequestError>>,
    pub setup: Mutex<Result<AutoSellAck, RequestError>>,
    pub health: Mutex<Result<HealthStatus, RequestError>>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            overview: unscripted(),
            tokens: unscripted(),
            token: unscripted(),
            price: unscripted(),
            created: unscripted(),
            strategies: unscripted(),
            setup: unscripted(),
            health: unscripted(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn get_dashboard(&self) -> Result<DashboardOverview, RequestError> {
        self.record("GET /dashboard");
        self.overview.lock().clone()
    }

    async fn list_tokens(&self) -> Result<Vec<Token>, RequestError> {
        self.record("GET /tokens");
        self.tokens.lock().clone()
    }

    async fn get_token(&self, token_id: &str) -> Result<Token, RequestError> {
        self.record(format!("GET /tokens/{}", token_id));
        self.token.lock().clone()
    }

    async fn get_token_price(&self, token_id: &str) -> Result<TokenPriceResponse, RequestError> {
        self.record(format!("GET /tokens/{}/price", token_id));
        self.price.lock().clone()
    }

    async fn create_token(&self, _request: &CreateTokenRequest) -> Result<Token, RequestError> {
        self.record("POST /tokens/create");
        self.created.lock().clone()
    }

    async fn create_best_token(&self, _request: &AutoTokenRequest) -> Result<Token, RequestError> {
        self.record("POST /tokens/create-best");
        self.created.lock().clone()
    }

    async fn list_strategies(&self) -> Result<StrategyList, RequestError> {
        self.record("GET /trading/strategies");
        self.strategies.lock().clone()
    }

    async fn setup_auto_sell(&self, request: &AutoSellRequest) -> Result<AutoSellAck, RequestError> {
        self.record("POST /trading/auto-sell");
        let ack = self.setup.lock().clone()?;
        let mut strategies = self.strategies.lock();
        if let Ok(list) = strategies.as_mut() {
            list.strategies.push(Strategy {
                id: ack.strategy_id.clone().unwrap_or_else(|| "new".to_string()),
                token_address: request.token_address.clone(),
                network: request.network,
                trigger_price: request.trigger_price,
                sell_percentage: request.sell_percentage,
                enabled: request.enabled,
                created_at: None,
            });
        }
        Ok(ack)
    }

    async fn health(&self) -> Result<HealthStatus, RequestError> {
        self.record("GET /health");
        self.health.lock().clone()
    }
}

pub fn token(id: &str, status: TokenStatus, contract_address: Option<&str>) -> Token {
    Token {
        id: id.to_string(),
        name: format!("Token {}", id),
        symbol: id.to_uppercase(),
        total_supply: 1_000_000_000,
        network: Network::BscTestnet,
        tax_rate: Some(5),
        status,
        contract_address: contract_address.map(str::to_string),
        explorer_url: contract_address.map(|a| format!("https://testnet.bscscan.com/token/{}", a)),
        transaction_hash: None,
        created_at: None,
    }
}

pub fn strategy(id: &str, token_address: &str) -> Strategy {
    Strategy {
        id: id.to_string(),
        token_address: token_address.to_string(),
        network: Network::BscTestnet,
        trigger_price: 0.001,
        sell_percentage: 25.0,
        enabled: true,
        created_at: None,
    }
}

pub fn price(token_id: &str, price_usd: f64) -> TokenPriceResponse {
    TokenPriceResponse {
        token_id: token_id.to_string(),
        contract_address: None,
        price_data: PriceSnapshot {
            price_usd,
            ..PriceSnapshot::default()
        },
        last_updated: None,
    }
}
