//! # Asset Trust
//!
//! An explicit user decision (`metadata.verified`) always wins. Without one,
//! base assets are trusted and contract assets are trusted only when at least
//! one token list cites them.

use shared::dto::asset::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustStatus {
    Verified,
    Unverified,
}

impl TrustStatus {
    pub fn of(asset: &Asset) -> Self {
        if is_unverified_by_user(asset) {
            TrustStatus::Unverified
        } else {
            TrustStatus::Verified
        }
    }

    pub fn is_unverified(&self) -> bool {
        matches!(self, TrustStatus::Unverified)
    }
}

/// Whether the asset should be shown as unverified.
pub fn is_unverified_by_user(asset: &Asset) -> bool {
    match asset.metadata.verified {
        Some(verified) => !verified,
        None => is_untrusted(asset),
    }
}

/// Whether no source vouches for the asset.
pub fn is_untrusted(asset: &Asset) -> bool {
    !asset.is_network_base_asset() && asset.metadata.token_lists.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::asset::{AssetMetadata, TokenListCitation};

    fn token(verified: Option<bool>, listed: bool) -> Asset {
        let token_lists = if listed {
            vec![TokenListCitation {
                name: "Uniswap Labs Default".to_string(),
                url: None,
            }]
        } else {
            Vec::new()
        };

        Asset::token("DAI", "Dai Stablecoin", 18, "0x6b17", 1).with_metadata(AssetMetadata {
            verified,
            token_lists,
            ..Default::default()
        })
    }

    #[test]
    fn test_explicit_flag_wins() {
        assert!(is_unverified_by_user(&token(Some(false), true)));
        assert!(!is_unverified_by_user(&token(Some(true), false)));
    }

    #[test]
    fn test_listed_token_is_trusted() {
        assert!(!is_unverified_by_user(&token(None, true)));
        assert!(is_unverified_by_user(&token(None, false)));
    }

    #[test]
    fn test_base_asset_is_trusted() {
        let eth = Asset::base("ETH", "Ether", 18, 1);
        assert!(!is_untrusted(&eth));
        assert_eq!(TrustStatus::of(&eth), TrustStatus::Verified);
    }

    #[test]
    fn test_status_of() {
        assert!(TrustStatus::of(&token(None, false)).is_unverified());
        assert!(!TrustStatus::of(&token(Some(true), false)).is_unverified());
    }
}
