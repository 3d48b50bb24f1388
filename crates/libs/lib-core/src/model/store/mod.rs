//! # Asset Store
//!
//! The asset registry that owns assets, their metadata, and the amounts held
//! by the current account. Views read from it and request metadata merges;
//! they never mutate assets directly.

// region: --- Modules
pub mod memory;
// endregion: --- Modules

// region: --- Re-exports
pub use memory::InMemoryAssetStore;
// endregion: --- Re-exports

use async_trait::async_trait;
use shared::dto::asset::{Asset, AssetAmount, AssetKey, AssetMetadata};

use crate::error::Result;

/// Asset registry operations.
///
/// Implementations serialize their own updates. A failed persistence step
/// must surface as [`AppError::UpdateRejected`](crate::error::AppError::UpdateRejected).
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Current asset amounts for the active account, in display order.
    async fn asset_amounts(&self) -> Result<Vec<AssetAmount>>;

    /// Look up an asset by identity.
    async fn find(&self, key: &AssetKey) -> Result<Option<Asset>>;

    /// Replace the metadata of `asset` and return the updated asset.
    ///
    /// Callers merge the new fields into the existing metadata before calling.
    async fn update_asset_metadata(&self, asset: &Asset, metadata: AssetMetadata) -> Result<Asset>;
}
