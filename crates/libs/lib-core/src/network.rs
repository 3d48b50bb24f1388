//! # Network Context
//!
//! Supplies the currently active network. The panel resolves the block
//! explorer from it; an unresolvable explorer disables the address link.

use parking_lot::RwLock;
use shared::dto::network::Network;

/// Selector for the active network.
pub trait NetworkContext: Send + Sync {
    fn current_network(&self) -> Network;
}

/// Network context holding a single selectable network.
#[derive(Debug)]
pub struct StaticNetworkContext {
    network: RwLock<Network>,
}

impl StaticNetworkContext {
    pub fn new(network: Network) -> Self {
        Self {
            network: RwLock::new(network),
        }
    }

    /// Switch the active network.
    pub fn select(&self, network: Network) {
        tracing::debug!(chain_id = network.chain_id, name = %network.name, "Network selected");
        *self.network.write() = network;
    }

    /// Whether `chain_id` is still the selected network. Results fetched for
    /// a network the user has since switched away from are stale.
    pub fn is_active(&self, chain_id: u64) -> bool {
        self.network.read().chain_id == chain_id
    }
}

impl Default for StaticNetworkContext {
    fn default() -> Self {
        Self::new(Network::ethereum())
    }
}

impl NetworkContext for StaticNetworkContext {
    fn current_network(&self) -> Network {
        self.network.read().clone()
    }
}
