//! # Shared Wallet Types
//!
//! Types and helpers shared by the asset core library and the wallet web front end.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::asset`]**: Assets, asset metadata and asset amounts
//!   - **[`dto::network`]**: Networks and their block explorers
//! - **[`utils`]**: Pure formatting helpers
//!   - **[`utils::truncate_address`]**: Shorten contract addresses and hashes for display
//!   - **[`utils::token_explorer_url`]**: Build a block-explorer token page URL
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Enums serialize to lowercase strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::network::Network;
//! use shared::utils::{token_explorer_url, truncate_address};
//!
//! let network = Network::ethereum();
//! let contract = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
//!
//! assert_eq!(truncate_address(contract), "0x6B17...1d0F");
//! let url = network
//!     .block_explorer_url()
//!     .map(|base| token_explorer_url(base, contract));
//! assert_eq!(
//!     url.as_deref(),
//!     Some("https://etherscan.io/token/0x6B175474E89094C44Da98b954EedeAC495271d0F")
//! );
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
