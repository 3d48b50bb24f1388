use serde::{Deserialize, Serialize};

/// Chain family, which decides address format and explorer path layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFamily {
    Evm,
    Solana,
}

/// A network the wallet can be connected to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
    pub name: String,
    pub family: NetworkFamily,
    pub base_asset_symbol: String,
    /// Explorer base URL without a trailing slash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer_url: Option<String>,
}

// (chain id, name, family, base asset, explorer)
const KNOWN_NETWORKS: &[(u64, &str, NetworkFamily, &str, &str)] = &[
    (1, "Ethereum", NetworkFamily::Evm, "ETH", "https://etherscan.io"),
    (137, "Polygon", NetworkFamily::Evm, "MATIC", "https://polygonscan.com"),
    (10, "Optimism", NetworkFamily::Evm, "ETH", "https://optimistic.etherscan.io"),
    (42161, "Arbitrum", NetworkFamily::Evm, "ETH", "https://arbiscan.io"),
    (43114, "Avalanche", NetworkFamily::Evm, "AVAX", "https://snowtrace.io"),
    (56, "BNB Chain", NetworkFamily::Evm, "BNB", "https://bscscan.com"),
    (30, "Rootstock", NetworkFamily::Evm, "RBTC", "https://explorer.rsk.co"),
    (101, "Solana", NetworkFamily::Solana, "SOL", "https://solscan.io"),
];

impl Network {
    /// All networks with a known block explorer.
    pub fn known() -> Vec<Network> {
        KNOWN_NETWORKS
            .iter()
            .map(|&(chain_id, name, family, base, explorer)| Network {
                chain_id,
                name: name.to_string(),
                family,
                base_asset_symbol: base.to_string(),
                block_explorer_url: Some(explorer.to_string()),
            })
            .collect()
    }

    pub fn by_chain_id(chain_id: u64) -> Option<Network> {
        Self::known().into_iter().find(|n| n.chain_id == chain_id)
    }

    pub fn ethereum() -> Network {
        Network {
            chain_id: 1,
            name: "Ethereum".to_string(),
            family: NetworkFamily::Evm,
            base_asset_symbol: "ETH".to_string(),
            block_explorer_url: Some("https://etherscan.io".to_string()),
        }
    }

    /// A user-added network. It has no block explorer until one is configured.
    pub fn custom(
        chain_id: u64,
        name: impl Into<String>,
        family: NetworkFamily,
        base_asset_symbol: impl Into<String>,
    ) -> Network {
        Network {
            chain_id,
            name: name.into(),
            family,
            base_asset_symbol: base_asset_symbol.into(),
            block_explorer_url: None,
        }
    }

    /// Resolve the block explorer base URL, if any.
    ///
    /// Blank values count as unresolvable.
    pub fn block_explorer_url(&self) -> Option<&str> {
        self.block_explorer_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }
}
