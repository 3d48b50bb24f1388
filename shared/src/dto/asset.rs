use serde::{Deserialize, Serialize};

/// A token list that cites an asset.
///
/// Assets cited by at least one list are trusted unless the user says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenListCitation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Mutable metadata attached to an asset by the asset registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetMetadata {
    /// Explicit trust flag set by the user. `None` means the user never decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Hash of the transaction through which the asset was first detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_lists: Vec<TokenListCitation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl AssetMetadata {
    /// Merge a patch over this metadata.
    ///
    /// Fields set in the patch win; everything else is carried over unchanged.
    ///
    /// ```rust
    /// use shared::dto::asset::{AssetMetadata, AssetMetadataPatch};
    ///
    /// let metadata = AssetMetadata {
    ///     discovery_tx_hash: Some("0xabc".to_string()),
    ///     ..Default::default()
    /// };
    /// let merged = metadata.merged(&AssetMetadataPatch::verified(true));
    ///
    /// assert_eq!(merged.verified, Some(true));
    /// assert_eq!(merged.discovery_tx_hash.as_deref(), Some("0xabc"));
    /// ```
    pub fn merged(&self, patch: &AssetMetadataPatch) -> AssetMetadata {
        AssetMetadata {
            verified: patch.verified.or(self.verified),
            discovery_tx_hash: patch
                .discovery_tx_hash
                .clone()
                .or_else(|| self.discovery_tx_hash.clone()),
            token_lists: self.token_lists.clone(),
            logo_url: patch.logo_url.clone().or_else(|| self.logo_url.clone()),
        }
    }
}

/// Partial metadata update. Only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetMetadataPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl AssetMetadataPatch {
    pub fn verified(verified: bool) -> Self {
        Self {
            verified: Some(verified),
            ..Default::default()
        }
    }
}

/// A fungible asset tracked by the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    /// Token contract (or mint) address. Absent for a network's base asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    /// Chain the asset lives on.
    pub chain_id: u64,
    #[serde(default)]
    pub metadata: AssetMetadata,
}

impl Asset {
    /// Create a smart-contract asset with empty metadata.
    pub fn token(
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
        contract_address: impl Into<String>,
        chain_id: u64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            contract_address: Some(contract_address.into()),
            chain_id,
            metadata: AssetMetadata::default(),
        }
    }

    /// Create a network base asset (no contract address).
    pub fn base(symbol: impl Into<String>, name: impl Into<String>, decimals: u8, chain_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            contract_address: None,
            chain_id,
            metadata: AssetMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: AssetMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_network_base_asset(&self) -> bool {
        self.contract_address.is_none()
    }

    /// Contract address, or an empty string for base assets.
    pub fn contract_address_or_empty(&self) -> &str {
        self.contract_address.as_deref().unwrap_or("")
    }

    pub fn key(&self) -> AssetKey {
        AssetKey::of(self)
    }
}

/// Identity of an asset inside the registry.
///
/// Hex (EVM) contract addresses compare case-insensitively; base58 addresses
/// are case-sensitive and kept as-is. Base assets are keyed by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetKey {
    pub chain_id: u64,
    pub id: String,
}

impl AssetKey {
    pub fn of(asset: &Asset) -> Self {
        let id = match &asset.contract_address {
            Some(address) if address.starts_with("0x") => address.to_lowercase(),
            Some(address) => address.clone(),
            None => asset.symbol.clone(),
        };

        Self {
            chain_id: asset.chain_id,
            id,
        }
    }
}

/// An asset together with the quantity held by the current account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetAmount {
    pub asset: Asset,
    pub decimal_amount: f64,
    /// Value in the user's main currency (USD), when a price is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_currency_amount: Option<f64>,
}

impl AssetAmount {
    pub fn new(asset: Asset, decimal_amount: f64) -> Self {
        Self {
            asset,
            decimal_amount,
            main_currency_amount: None,
        }
    }

    pub fn with_main_currency_amount(mut self, amount: f64) -> Self {
        self.main_currency_amount = Some(amount);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    #[test]
    fn test_merged_keeps_prior_fields() {
        let metadata = AssetMetadata {
            verified: Some(false),
            discovery_tx_hash: Some("0xfeed".to_string()),
            token_lists: vec![TokenListCitation {
                name: "Uniswap Labs Default".to_string(),
                url: None,
            }],
            logo_url: Some("https://example.com/dai.png".to_string()),
        };

        let merged = metadata.merged(&AssetMetadataPatch::verified(true));

        assert_eq!(merged.verified, Some(true));
        assert_eq!(merged.discovery_tx_hash, metadata.discovery_tx_hash);
        assert_eq!(merged.token_lists, metadata.token_lists);
        assert_eq!(merged.logo_url, metadata.logo_url);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let metadata = AssetMetadata {
            verified: Some(true),
            ..Default::default()
        };
        assert_eq!(metadata.merged(&AssetMetadataPatch::default()), metadata);
    }

    #[test]
    fn test_asset_key_ignores_hex_case() {
        let upper = Asset::token("DAI", "Dai Stablecoin", 18, DAI, 1);
        let lower = Asset::token("DAI", "Dai Stablecoin", 18, DAI.to_lowercase(), 1);
        assert_eq!(upper.key(), lower.key());
    }

    #[test]
    fn test_asset_key_keeps_base58_case() {
        let mint = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
        let asset = Asset::token("USDC", "USD Coin", 6, mint, 101);
        assert_eq!(asset.key().id, mint);
    }

    #[test]
    fn test_base_asset_keyed_by_symbol() {
        let eth = Asset::base("ETH", "Ether", 18, 1);
        assert!(eth.is_network_base_asset());
        assert_eq!(eth.contract_address_or_empty(), "");
        assert_eq!(eth.key(), AssetKey { chain_id: 1, id: "ETH".to_string() });
    }

    #[test]
    fn test_metadata_json_omits_unset_fields() {
        let json = serde_json::to_string(&AssetMetadata::default()).unwrap();
        assert_eq!(json, "{}");

        let asset: Asset = serde_json::from_str(
            r#"{"symbol":"DAI","name":"Dai","decimals":18,"contract_address":"0x6b17","chain_id":1}"#,
        )
        .unwrap();
        assert_eq!(asset.metadata, AssetMetadata::default());
    }
}
