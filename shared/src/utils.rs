//! # Shared Utility Functions
//!
//! Pure formatting helpers used by the asset core and the wallet web front end.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters, joined by an ellipsis
//! - [`truncate_address`] - [`format_address`] with the wallet's display defaults
//!
//! ## Amount Formatting
//!
//! - [`format_number`] - Comma-grouped decimal formatting
//! - [`format_main_currency`] - Dollar-prefixed two-decimal formatting
//!
//! ## Explorer URLs
//!
//! - [`token_explorer_url`] - `{explorer}/token/{contract}`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 4, 4), "8W6Q...JKAL");
//! ```

/// Characters kept at the start by [`truncate_address`]. Covers `0x` plus four hex digits.
pub const ADDRESS_PREFIX_LEN: usize = 6;
/// Characters kept at the end by [`truncate_address`].
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Format an address or hash by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Values too short to shorten are returned unchanged. Counts are in characters,
/// so non-ASCII input never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();

    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten a contract address or transaction hash for display.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
/// assert_eq!(truncate_address(addr), "0x6B17...1d0F");
/// assert_eq!(truncate_address(""), "");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}

/// Build the explorer page for a token contract.
///
/// ```rust
/// use shared::utils::token_explorer_url;
///
/// assert_eq!(
///     token_explorer_url("https://etherscan.io/", "0xabc"),
///     "https://etherscan.io/token/0xabc"
/// );
/// ```
pub fn token_explorer_url(explorer_base: &str, contract_address: &str) -> String {
    format!("{}/token/{}", explorer_base.trim_end_matches('/'), contract_address)
}

/// Format a number with comma separators (e.g., 1234567.891 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut result: String = grouped.chars().rev().collect();

    if !decimal_part.is_empty() {
        result.push('.');
        result.push_str(decimal_part);
    }
    if value < 0.0 && result.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }

    result
}

/// Format a main-currency (USD) value, e.g. `$1,204.50`.
pub fn format_main_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value, 2))
    } else {
        format!("${}", format_number(value, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
        assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
        assert_eq!(format_address(addr, 2, 2), "8W...AL");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("12345678", 4, 4), "12345678");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("ααααβββββγγγγ", 2, 2), "αα...γγ");
    }

    #[test]
    fn test_truncate_tx_hash() {
        let hash = "0x5f1e3c0a9b7d2e4f6a8c0b1d3e5f7a9c1b3d5e7f9a1c3e5b7d9f1a3c5e7b9d1f";
        assert_eq!(truncate_address(hash), "0x5f1e...9d1f");
    }

    #[test]
    fn test_token_explorer_url() {
        assert_eq!(
            token_explorer_url("https://polygonscan.com", "0xabc"),
            "https://polygonscan.com/token/0xabc"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(0.5, 4), "0.5000");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1500.0, 1), "-1,500.0");
    }

    #[test]
    fn test_format_main_currency() {
        assert_eq!(format_main_currency(1204.5), "$1,204.50");
        assert_eq!(format_main_currency(0.0), "$0.00");
        assert_eq!(format_main_currency(-3.0), "-$3.00");
    }
}
