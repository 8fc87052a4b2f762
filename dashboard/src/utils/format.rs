//! Display formatting shared by the screens.

use chrono::NaiveDateTime;

/// USD price with eight decimal places, e.g. `$0.00004217`.
pub fn format_price_usd(price: f64) -> String {
    format!("${:.8}", price)
}

/// Percentage change with an explicit sign.
pub fn format_change(change: f64) -> String {
    format!("{:+.2}%", change)
}

pub fn format_timestamp(timestamp: Option<&NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}
