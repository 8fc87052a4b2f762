pub mod auto_trading;
pub mod create_token;
pub mod dashboard;
pub mod token_details;
