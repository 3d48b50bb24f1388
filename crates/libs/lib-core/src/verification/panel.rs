//! # Asset Verification Panel
//!
//! View-model for the slide-up shown when a warned asset is set. Everything
//! the component renders is computed here once per build, so the component
//! holds no branching of its own.
//!
//! ## Example
//!
//! ```rust
//! use lib_core::features::{FeatureFlag, FeatureFlags};
//! use lib_core::verification::{AssetVerificationPanel, PanelAction};
//! use shared::dto::asset::{Asset, AssetMetadata};
//! use shared::dto::network::Network;
//!
//! let asset = Asset::token("DAI", "Dai Stablecoin", 18, "0x6B175474E89094C44Da98b954EedeAC495271d0F", 1)
//!     .with_metadata(AssetMetadata { verified: Some(false), ..Default::default() });
//! let flags = FeatureFlags::new().with(FeatureFlag::SupportUnverifiedAsset, true);
//!
//! let panel = AssetVerificationPanel::build(&asset, &Network::ethereum(), &flags);
//!
//! assert_eq!(panel.contract.display(), "0x6B17...1d0F");
//! assert!(panel.actions.offers(PanelAction::AddToAssetList));
//! ```

use shared::dto::asset::Asset;
use shared::dto::network::Network;
use shared::utils::{token_explorer_url, truncate_address};

use super::banner::Banner;
use super::text;
use super::trust::TrustStatus;
use super::{PanelVariant, PendingFeature};
use crate::error::{AppError, Result};
use crate::features::FeatureFlagService;

/// Why an address control does nothing when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InertReason {
    /// The active network has no resolvable block explorer.
    NoBlockExplorer,
    /// Base assets have no contract to show.
    NoContractAddress,
    /// The destination exists conceptually but is not implemented.
    Pending(PendingFeature),
}

/// A truncated address (or hash) button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressControl {
    /// Opens `href` in a new browsing context; rendered with a new-tab icon.
    Link {
        display: String,
        title: String,
        href: String,
    },
    /// Rendered but does nothing.
    Inert {
        display: String,
        title: String,
        reason: InertReason,
    },
}

impl AddressControl {
    /// Contract address control, linked when the network resolves an explorer.
    pub fn contract(asset: &Asset, network: &Network) -> Self {
        let address = asset.contract_address_or_empty();
        let display = truncate_address(address);
        let title = address.to_string();

        if address.is_empty() {
            return AddressControl::Inert {
                display,
                title,
                reason: InertReason::NoContractAddress,
            };
        }

        match network.block_explorer_url() {
            Some(explorer) => AddressControl::Link {
                display,
                title,
                href: token_explorer_url(explorer, address),
            },
            None => AddressControl::Inert {
                display,
                title,
                reason: InertReason::NoBlockExplorer,
            },
        }
    }

    /// Discovery transaction row. Always inert until activity lookup exists.
    pub fn discovery_transaction(tx_hash: &str) -> Self {
        AddressControl::Inert {
            display: truncate_address(tx_hash),
            title: tx_hash.to_string(),
            reason: InertReason::Pending(PendingFeature::OpenDiscoveryTransaction),
        }
    }

    pub fn display(&self) -> &str {
        match self {
            AddressControl::Link { display, .. } | AddressControl::Inert { display, .. } => display,
        }
    }

    /// Full, untruncated value (tooltip).
    pub fn title(&self) -> &str {
        match self {
            AddressControl::Link { title, .. } | AddressControl::Inert { title, .. } => title,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            AddressControl::Link { href, .. } => Some(href),
            AddressControl::Inert { .. } => None,
        }
    }

    /// Whether the control should carry the HTML `disabled` attribute.
    ///
    /// Pending controls stay enabled (their click is a no-op).
    pub fn is_disabled(&self) -> bool {
        matches!(
            self,
            AddressControl::Inert {
                reason: InertReason::NoBlockExplorer | InertReason::NoContractAddress,
                ..
            }
        )
    }

    /// Whether clicks are ignored (`no_click` styling).
    pub fn is_inert(&self) -> bool {
        matches!(self, AddressControl::Inert { .. })
    }

    pub fn shows_new_tab_icon(&self) -> bool {
        matches!(self, AddressControl::Link { .. })
    }

    /// Navigation target of this control.
    ///
    /// # Errors
    ///
    /// - [`AppError::NetworkUnavailable`] when no explorer is resolvable
    /// - [`AppError::NotFound`] when there is no contract address
    /// - [`AppError::Unsupported`] for pending destinations
    pub fn open(&self) -> Result<&str> {
        match self {
            AddressControl::Link { href, .. } => Ok(href),
            AddressControl::Inert {
                reason: InertReason::NoBlockExplorer,
                ..
            } => Err(AppError::NetworkUnavailable(
                "no block explorer for the active network".to_string(),
            )),
            AddressControl::Inert {
                reason: InertReason::NoContractAddress,
                ..
            } => Err(AppError::NotFound("contract address".to_string())),
            AddressControl::Inert {
                reason: InertReason::Pending(feature),
                ..
            } => Err(AppError::Unsupported(*feature)),
        }
    }
}

/// Every interaction the panel can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Close button or overlay dismissal.
    Close,
    DontShowAgain,
    AddToAssetList,
    OpenContract,
    OpenDiscoveryTransaction,
}

impl PanelAction {
    /// Actions that suspend on the asset store. At most one may be in flight
    /// per panel; the rest complete immediately and are never blocked by it.
    pub fn is_serialized(self) -> bool {
        matches!(self, Self::AddToAssetList)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
}

/// A footer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub action: PanelAction,
    pub label: &'static str,
    pub kind: ButtonKind,
    /// Set when the button is a deliberate placeholder.
    pub pending: Option<PendingFeature>,
}

/// Footer actions. One variant per panel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSet {
    /// "Don't show" (pending) plus "Add to asset list" when the asset is unverified.
    UnverifiedSupport { add_to_asset_list: bool },
    /// A single "Close".
    Legacy,
}

impl ActionSet {
    pub fn for_variant(variant: PanelVariant, trust: TrustStatus) -> Self {
        match variant {
            PanelVariant::UnverifiedSupport => ActionSet::UnverifiedSupport {
                add_to_asset_list: trust.is_unverified(),
            },
            PanelVariant::Legacy => ActionSet::Legacy,
        }
    }

    /// Buttons in render order.
    pub fn buttons(&self) -> Vec<ActionButton> {
        match self {
            ActionSet::UnverifiedSupport { add_to_asset_list } => {
                let mut buttons = vec![ActionButton {
                    action: PanelAction::DontShowAgain,
                    label: text::DONT_SHOW,
                    kind: ButtonKind::Secondary,
                    pending: Some(PendingFeature::RemoveAsset),
                }];
                if *add_to_asset_list {
                    buttons.push(ActionButton {
                        action: PanelAction::AddToAssetList,
                        label: text::ADD_TO_ASSET_LIST,
                        kind: ButtonKind::Primary,
                        pending: None,
                    });
                }
                buttons
            }
            ActionSet::Legacy => vec![ActionButton {
                action: PanelAction::Close,
                label: text::CLOSE,
                kind: ButtonKind::Secondary,
                pending: None,
            }],
        }
    }

    /// Whether `action` is reachable from the footer.
    pub fn offers(&self, action: PanelAction) -> bool {
        self.buttons().iter().any(|button| button.action == action)
    }
}

/// Everything the slide-up renders for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetVerificationPanel {
    pub asset: Asset,
    pub header: &'static str,
    pub variant: PanelVariant,
    pub trust: TrustStatus,
    pub banner: Banner,
    pub symbol: String,
    pub contract: AddressControl,
    pub discovery_tx: Option<AddressControl>,
    pub actions: ActionSet,
}

impl AssetVerificationPanel {
    pub fn build(asset: &Asset, network: &Network, flags: &dyn FeatureFlagService) -> Self {
        let variant = PanelVariant::select(flags);
        let trust = TrustStatus::of(asset);

        Self {
            asset: asset.clone(),
            header: text::HEADER,
            variant,
            trust,
            banner: Banner::lookup(trust, variant),
            symbol: asset.symbol.clone(),
            contract: AddressControl::contract(asset, network),
            discovery_tx: asset
                .metadata
                .discovery_tx_hash
                .as_deref()
                .filter(|hash| !hash.is_empty())
                .map(AddressControl::discovery_transaction),
            actions: ActionSet::for_variant(variant, trust),
        }
    }

    pub fn is_unverified(&self) -> bool {
        self.trust.is_unverified()
    }

    pub fn buttons(&self) -> Vec<ActionButton> {
        self.actions.buttons()
    }
}
