//! # Core Library
//!
//! Asset verification core: configuration, errors, feature flags, the asset
//! store, notifications and the view-models behind the wallet asset list.

pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod network;
pub mod notify;
pub mod verification;

// Re-export commonly used types
pub use config::{Config, UpdateFailurePolicy, core_config, init_config};
pub use error::{AppError, Result};
pub use features::{FeatureFlag, FeatureFlagService, FeatureFlags};
pub use model::store::{AssetStore, InMemoryAssetStore};
pub use network::{NetworkContext, StaticNetworkContext};
pub use notify::{Snackbar, SnackbarLevel, SnackbarMessage, SnackbarQueue};
pub use verification::{AssetListState, AssetListView, AssetVerificationPanel, VerificationController};
