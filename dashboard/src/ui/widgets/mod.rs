pub mod nav_bar;
pub mod notifications;
pub mod token_card;
