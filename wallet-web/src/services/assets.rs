//! Asset amounts for the active account.
//!
//! Fetched from the backend as JSON. When the backend is unreachable the
//! page falls back to [`demo_asset_amounts`] so the list still renders.

use gloo_net::http::Request;
use shared::dto::asset::{Asset, AssetAmount, AssetMetadata, TokenListCitation};

use crate::utils::constants::API_BASE;

/// `GET {API_BASE}/api/assets?chainId={chain_id}`
pub async fn fetch_asset_amounts(chain_id: u64) -> Result<Vec<AssetAmount>, String> {
    let url = format!("{}/api/assets?chainId={}", API_BASE, chain_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Asset request failed ({})", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {:?}", e))?;

    parse_asset_amounts(&body)
}

pub fn parse_asset_amounts(body: &str) -> Result<Vec<AssetAmount>, String> {
    serde_json::from_str(body).map_err(|e| format!("Invalid asset payload: {}", e))
}

/// A small mainnet account: a base asset, a listed token, and two unverified tokens.
pub fn demo_asset_amounts() -> Vec<AssetAmount> {
    let usdc = Asset::token("USDC", "USD Coin", 6, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 1)
        .with_metadata(AssetMetadata {
            token_lists: vec![TokenListCitation {
                name: "Uniswap Labs Default".to_string(),
                url: Some("https://tokens.uniswap.org".to_string()),
            }],
            ..Default::default()
        });

    let airdrop = Asset::token("PEPE2", "Pepe Two", 18, "0x9f8F72aA9304c8B593d555F12eF6589cC3A579A2", 1)
        .with_metadata(AssetMetadata {
            discovery_tx_hash: Some(
                "0x5f1e3c0a9b7d2e4f6a8c0b1d3e5f7a9c1b3d5e7f9a1c3e5b7d9f1a3c5e7b9d1f".to_string(),
            ),
            ..Default::default()
        });

    let flagged = Asset::token("DAI", "Dai Stablecoin", 18, "0x6B175474E89094C44Da98b954EedeAC495271d0F", 1)
        .with_metadata(AssetMetadata {
            verified: Some(false),
            ..Default::default()
        });

    vec![
        AssetAmount::new(Asset::base("ETH", "Ether", 18, 1), 1.2841).with_main_currency_amount(3204.55),
        AssetAmount::new(usdc, 250.0).with_main_currency_amount(250.0),
        AssetAmount::new(airdrop, 1_000_000.0),
        AssetAmount::new(flagged, 0.5).with_main_currency_amount(0.5),
    ]
}
