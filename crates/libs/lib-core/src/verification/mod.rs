//! # Asset Verification
//!
//! View-models and the action controller behind the wallet asset list and the
//! asset warning slide-up.
//!
//! ## Flow
//!
//! ```text
//! AssetListState::Idle ──warn(asset)──▶ Warned(asset) ──close()──▶ Idle
//!                                           │
//!                                           ▼
//!                         AssetVerificationPanel::build(asset, network, flags)
//!                                           │
//!                         VerificationController::dispatch(panel, action, close)
//! ```
//!
//! ## Modules
//!
//! - [`trust`] - Whether the user (or the token lists) vouch for an asset
//! - [`banner`] - Two-axis banner copy lookup
//! - [`panel`] - Panel view-model: address controls and the action set
//! - [`controller`] - Executes panel actions against the store and snackbar
//! - [`list`] - Asset rows and the single warned-asset cell
//! - [`text`] - User-facing copy

use std::fmt;

use crate::features::{FeatureFlag, FeatureFlagService};

pub mod banner;
pub mod controller;
pub mod list;
pub mod panel;
pub mod text;
pub mod trust;

pub use banner::Banner;
pub use controller::{ActionOutcome, VerificationController, VerifyOutcome};
pub use list::{AssetListState, AssetListView, AssetRow};
pub use panel::{ActionButton, ActionSet, AddressControl, AssetVerificationPanel, ButtonKind, InertReason, PanelAction};
pub use trust::TrustStatus;

/// Actions the panel shows but deliberately does not implement yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingFeature {
    /// "Don't show": removing the asset from the wallet.
    RemoveAsset,
    /// Opening the activity entry of the discovery transaction.
    OpenDiscoveryTransaction,
}

impl fmt::Display for PendingFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingFeature::RemoveAsset => f.write_str("removing an asset"),
            PendingFeature::OpenDiscoveryTransaction => f.write_str("opening the discovery transaction"),
        }
    }
}

/// Which of the two mutually exclusive panel variants to render.
///
/// Selected once per panel build from the unverified-asset flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    UnverifiedSupport,
    Legacy,
}

impl PanelVariant {
    pub fn select(flags: &dyn FeatureFlagService) -> Self {
        if flags.is_enabled(FeatureFlag::SupportUnverifiedAsset) {
            PanelVariant::UnverifiedSupport
        } else {
            PanelVariant::Legacy
        }
    }
}
