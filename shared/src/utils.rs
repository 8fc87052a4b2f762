//! # Shared Utility Functions
//!
//! Formatting helpers used by both the backend and the dashboard.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_supply};
//!
//! let address = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
//! assert_eq!(format_address(address, 6, 4), "0x5FbD...0aa3");
//! assert_eq!(format_supply(420_690_000), "420,690,000");
//! ```

/// Format a contract address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
/// assert_eq!(format_address(addr, 6, 4), "0x5FbD...0aa3");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a contract address keeping the `0x` prefix plus four characters on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Group the digits of a token supply with commas.
///
/// ```rust
/// use shared::utils::format_supply;
///
/// assert_eq!(format_supply(1_000_000_000), "1,000,000,000");
/// assert_eq!(format_supply(999), "999");
/// ```
pub fn format_supply(supply: u64) -> String {
    let digits = supply.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
