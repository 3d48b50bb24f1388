//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the asset registry and the wallet UI.
//!
//! ## Module Organization
//!
//! - [`asset`] - Assets, their metadata, and asset amounts held by an account
//! - [`network`] - Networks and block explorer resolution
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//!
//! ## Example JSON
//!
//! ```text
//! GET /api/assets
//!
//! [
//!   {
//!     "asset": {
//!       "symbol": "DAI",
//!       "name": "Dai Stablecoin",
//!       "decimals": 18,
//!       "contract_address": "0x6B175474E89094C44Da98b954EedeAC495271d0F",
//!       "chain_id": 1,
//!       "metadata": {
//!         "verified": false,
//!         "discovery_tx_hash": "0x5f1e..."
//!       }
//!     },
//!     "decimal_amount": 120.5,
//!     "main_currency_amount": 120.47
//!   }
//! ]
//! ```

pub mod asset;
pub mod network;

pub use asset::*;
pub use network::*;
