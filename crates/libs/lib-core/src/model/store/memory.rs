//! # In-Memory Asset Store
//!
//! Registry backed by a `Vec<AssetAmount>` behind a `parking_lot::RwLock`.
//! Used by the browser front end and by tests.
//!
//! ## Example
//!
//! ```rust
//! use lib_core::model::store::{AssetStore, InMemoryAssetStore};
//! use shared::dto::asset::{Asset, AssetAmount, AssetMetadataPatch};
//!
//! # async fn example() -> lib_core::Result<()> {
//! let dai = Asset::token("DAI", "Dai Stablecoin", 18, "0x6b17", 1);
//! let store = InMemoryAssetStore::new(vec![AssetAmount::new(dai.clone(), 12.0)]);
//!
//! let metadata = dai.metadata.merged(&AssetMetadataPatch::verified(true));
//! let updated = store.update_asset_metadata(&dai, metadata).await?;
//! assert_eq!(updated.metadata.verified, Some(true));
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::dto::asset::{Asset, AssetAmount, AssetKey, AssetMetadata};

use super::AssetStore;
use crate::error::{AppError, Result};

/// In-memory asset registry.
#[derive(Debug, Default)]
pub struct InMemoryAssetStore {
    amounts: RwLock<Vec<AssetAmount>>,
    locked: AtomicBool,
}

impl InMemoryAssetStore {
    pub fn new(amounts: Vec<AssetAmount>) -> Self {
        Self {
            amounts: RwLock::new(amounts),
            locked: AtomicBool::new(false),
        }
    }

    /// Replace the whole account snapshot (e.g. after a refresh from the backend).
    pub fn replace_all(&self, amounts: Vec<AssetAmount>) {
        tracing::debug!(count = amounts.len(), "Asset store snapshot replaced");
        *self.amounts.write() = amounts;
    }

    /// Lock or unlock the registry. A locked registry rejects metadata updates,
    /// the way a locked wallet refuses writes.
    pub fn set_locked(&self, locked: bool) {
        self.locked.store(locked, Ordering::SeqCst);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn asset_amounts(&self) -> Result<Vec<AssetAmount>> {
        Ok(self.amounts.read().clone())
    }

    async fn find(&self, key: &AssetKey) -> Result<Option<Asset>> {
        Ok(self
            .amounts
            .read()
            .iter()
            .find(|amount| &amount.asset.key() == key)
            .map(|amount| amount.asset.clone()))
    }

    async fn update_asset_metadata(&self, asset: &Asset, metadata: AssetMetadata) -> Result<Asset> {
        if self.is_locked() {
            tracing::warn!(symbol = %asset.symbol, "Metadata update refused: registry locked");
            return Err(AppError::UpdateRejected("asset registry is locked".to_string()));
        }

        let key = asset.key();
        let mut amounts = self.amounts.write();

        let entry = amounts
            .iter_mut()
            .find(|amount| amount.asset.key() == key)
            .ok_or_else(|| {
                AppError::NotFound(format!("asset {} on chain {}", asset.symbol, asset.chain_id))
            })?;

        entry.asset.metadata = metadata;

        tracing::info!(
            symbol = %entry.asset.symbol,
            chain_id = entry.asset.chain_id,
            verified = ?entry.asset.metadata.verified,
            "Asset metadata updated"
        );

        Ok(entry.asset.clone())
    }
}
