//! # Verification Controller
//!
//! Executes panel actions. The only suspension point is the awaited metadata
//! update behind "Add to asset list"; every other action completes immediately.
//!
//! ## Add to asset list
//!
//! ```text
//! merge {verified: true} ──▶ store.update_asset_metadata ──▶ snackbar ──▶ close
//! ```
//!
//! A rejected update follows [`UpdateFailurePolicy`].

use std::sync::Arc;

use shared::dto::asset::{Asset, AssetMetadataPatch};

use super::panel::{AssetVerificationPanel, PanelAction};
use super::{text, PendingFeature};
use crate::config::UpdateFailurePolicy;
use crate::error::{AppError, Result};
use crate::model::store::AssetStore;
use crate::notify::{Snackbar, SnackbarMessage};

/// Result of "Add to asset list" once the panel has closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The store accepted the update.
    Persisted(Asset),
    /// The store rejected the update but the optimistic policy closed the panel anyway.
    Rejected { asset: Asset, reason: String },
}

/// What the UI must do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The close callback ran.
    Closed,
    Verified(VerifyOutcome),
    /// Open `url` in a new browsing context.
    OpenExternal { url: String },
    /// Placeholder action: nothing happened, deliberately.
    Unsupported(PendingFeature),
    /// The action is not offered in this panel state: nothing happened.
    Unavailable,
}

/// Runs panel actions against the asset store and the snackbar.
pub struct VerificationController {
    store: Arc<dyn AssetStore>,
    snackbar: Arc<dyn Snackbar>,
    policy: UpdateFailurePolicy,
}

impl VerificationController {
    pub fn new(store: Arc<dyn AssetStore>, snackbar: Arc<dyn Snackbar>, policy: UpdateFailurePolicy) -> Self {
        Self {
            store,
            snackbar,
            policy,
        }
    }

    pub fn policy(&self) -> UpdateFailurePolicy {
        self.policy
    }

    /// Mark `asset` verified, confirm, and close.
    ///
    /// # Errors
    ///
    /// Only under [`UpdateFailurePolicy::Strict`]: the store's error is returned
    /// and `close` is not called.
    pub async fn add_to_asset_list<F: FnOnce()>(&self, asset: &Asset, close: F) -> Result<VerifyOutcome> {
        let metadata = asset.metadata.merged(&AssetMetadataPatch::verified(true));

        tracing::info!(symbol = %asset.symbol, chain_id = asset.chain_id, "Adding asset to asset list");

        match self.store.update_asset_metadata(asset, metadata).await {
            Ok(updated) => {
                self.snackbar.show(SnackbarMessage::success(text::SNACKBAR_ADDED));
                close();
                Ok(VerifyOutcome::Persisted(updated))
            }
            Err(err) => match self.policy {
                UpdateFailurePolicy::Optimistic => {
                    tracing::warn!(
                        symbol = %asset.symbol,
                        error = %err,
                        "Asset update rejected, closing optimistically"
                    );
                    self.snackbar.show(SnackbarMessage::success(text::SNACKBAR_ADDED));
                    close();
                    Ok(VerifyOutcome::Rejected {
                        asset: asset.clone(),
                        reason: err.to_string(),
                    })
                }
                UpdateFailurePolicy::Strict => {
                    tracing::error!(symbol = %asset.symbol, error = %err, "Asset update rejected");
                    self.snackbar.show(SnackbarMessage::error(text::SNACKBAR_UPDATE_FAILED));
                    Err(err)
                }
            },
        }
    }

    /// Handle one panel interaction.
    ///
    /// Placeholders and controls that are not offered resolve to
    /// [`ActionOutcome::Unsupported`] / [`ActionOutcome::Unavailable`] without
    /// side effects. `close` runs at most once.
    pub async fn dispatch<F: FnOnce()>(
        &self,
        panel: &AssetVerificationPanel,
        action: PanelAction,
        close: F,
    ) -> Result<ActionOutcome> {
        tracing::debug!(symbol = %panel.symbol, ?action, "Panel action");

        match action {
            PanelAction::Close => {
                close();
                Ok(ActionOutcome::Closed)
            }
            PanelAction::AddToAssetList => {
                if !panel.actions.offers(action) {
                    return Ok(ActionOutcome::Unavailable);
                }
                let outcome = self.add_to_asset_list(&panel.asset, close).await?;
                Ok(ActionOutcome::Verified(outcome))
            }
            PanelAction::DontShowAgain => {
                let pending = panel
                    .buttons()
                    .into_iter()
                    .find(|button| button.action == action)
                    .and_then(|button| button.pending);
                Ok(pending.map_or(ActionOutcome::Unavailable, ActionOutcome::Unsupported))
            }
            PanelAction::OpenContract => Self::open_control(panel.contract.open()),
            PanelAction::OpenDiscoveryTransaction => match &panel.discovery_tx {
                Some(control) => Self::open_control(control.open()),
                None => Ok(ActionOutcome::Unavailable),
            },
        }
    }

    fn open_control(target: Result<&str>) -> Result<ActionOutcome> {
        match target {
            Ok(url) => Ok(ActionOutcome::OpenExternal { url: url.to_string() }),
            Err(AppError::Unsupported(feature)) => Ok(ActionOutcome::Unsupported(feature)),
            Err(AppError::NetworkUnavailable(reason) | AppError::NotFound(reason)) => {
                tracing::debug!(%reason, "Address control inert");
                Ok(ActionOutcome::Unavailable)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{FeatureFlag, FeatureFlags};
    use crate::verification::list::AssetListState;
    use crate::notify::SnackbarLevel;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::dto::asset::{AssetAmount, AssetKey, AssetMetadata};
    use shared::dto::network::{Network, NetworkFamily};

    const TX: &str = "0x5f1e3c0a9b7d2e4f6a8c0b1d3e5f7a9c1b3d5e7f9a1c3e5b7d9f1a3c5e7b9d1f";

    /// Records every collaborator call in order.
    type Journal = Arc<Mutex<Vec<String>>>;

    struct MockStore {
        journal: Journal,
        updates: Mutex<Vec<AssetMetadata>>,
        reject: bool,
    }

    #[async_trait]
    impl AssetStore for MockStore {
        async fn asset_amounts(&self) -> Result<Vec<AssetAmount>> {
            Ok(Vec::new())
        }

        async fn find(&self, _key: &AssetKey) -> Result<Option<Asset>> {
            Ok(None)
        }

        async fn update_asset_metadata(&self, asset: &Asset, metadata: AssetMetadata) -> Result<Asset> {
            self.journal.lock().push("update".to_string());
            self.updates.lock().push(metadata.clone());
            if self.reject {
                return Err(AppError::UpdateRejected("background unavailable".to_string()));
            }
            Ok(asset.clone().with_metadata(metadata))
        }
    }

    struct MockSnackbar {
        journal: Journal,
        shown: Mutex<Vec<SnackbarMessage>>,
    }

    impl Snackbar for MockSnackbar {
        fn show(&self, message: SnackbarMessage) {
            self.journal.lock().push("snackbar".to_string());
            self.shown.lock().push(message);
        }
    }

    struct Harness {
        journal: Journal,
        store: Arc<MockStore>,
        snackbar: Arc<MockSnackbar>,
        controller: VerificationController,
    }

    fn harness(reject: bool, policy: UpdateFailurePolicy) -> Harness {
        let journal: Journal = Arc::new(Mutex::new(Vec::new()));
        let store = Arc::new(MockStore {
            journal: journal.clone(),
            updates: Mutex::new(Vec::new()),
            reject,
        });
        let snackbar = Arc::new(MockSnackbar {
            journal: journal.clone(),
            shown: Mutex::new(Vec::new()),
        });
        let controller = VerificationController::new(store.clone(), snackbar.clone(), policy);

        Harness {
            journal,
            store,
            snackbar,
            controller,
        }
    }

    fn unverified_dai() -> Asset {
        Asset::token("DAI", "Dai Stablecoin", 18, "0x6B175474E89094C44Da98b954EedeAC495271d0F", 1)
            .with_metadata(AssetMetadata {
                verified: Some(false),
                discovery_tx_hash: Some(TX.to_string()),
                logo_url: Some("https://example.com/dai.png".to_string()),
                ..Default::default()
            })
    }

    fn panel(asset: &Asset, flag: bool, network: &Network) -> AssetVerificationPanel {
        let flags = FeatureFlags::new().with(FeatureFlag::SupportUnverifiedAsset, flag);
        AssetVerificationPanel::build(asset, network, &flags)
    }

    #[tokio::test]
    async fn test_add_to_asset_list_sequence() {
        let h = harness(false, UpdateFailurePolicy::Optimistic);
        let asset = unverified_dai();
        let panel = panel(&asset, true, &Network::ethereum());

        let journal = h.journal.clone();
        let outcome = h
            .controller
            .dispatch(&panel, PanelAction::AddToAssetList, move || {
                journal.lock().push("close".to_string())
            })
            .await
            .unwrap();

        assert_eq!(*h.journal.lock(), vec!["update", "snackbar", "close"]);

        let updates = h.store.updates.lock();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].verified, Some(true));
        assert_eq!(updates[0].discovery_tx_hash.as_deref(), Some(TX));
        assert_eq!(updates[0].logo_url, asset.metadata.logo_url);

        let shown = h.snackbar.shown.lock();
        assert_eq!(*shown, vec![SnackbarMessage::success(text::SNACKBAR_ADDED)]);

        match outcome {
            ActionOutcome::Verified(VerifyOutcome::Persisted(updated)) => {
                assert_eq!(updated.metadata.verified, Some(true))
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    /// Holds every update until the test releases it.
    struct GatedStore {
        gate: tokio::sync::Notify,
    }

    #[async_trait]
    impl AssetStore for GatedStore {
        async fn asset_amounts(&self) -> Result<Vec<AssetAmount>> {
            Ok(Vec::new())
        }

        async fn find(&self, _key: &AssetKey) -> Result<Option<Asset>> {
            Ok(None)
        }

        async fn update_asset_metadata(&self, asset: &Asset, metadata: AssetMetadata) -> Result<Asset> {
            self.gate.notified().await;
            Ok(asset.clone().with_metadata(metadata))
        }
    }

    #[tokio::test]
    async fn test_late_close_keeps_newer_panel_open() {
        let store = Arc::new(GatedStore {
            gate: tokio::sync::Notify::new(),
        });
        let snackbar = Arc::new(MockSnackbar {
            journal: Arc::new(Mutex::new(Vec::new())),
            shown: Mutex::new(Vec::new()),
        });
        let controller = VerificationController::new(store.clone(), snackbar, UpdateFailurePolicy::Optimistic);

        let dai = unverified_dai();
        let pepe = Asset::token("PEPE2", "Pepe 2.0", 18, "0xfb66321d7c674995dfcc2cb67a30bc978dc862ad", 1);
        let state = Mutex::new(AssetListState::default());
        let closes = std::cell::Cell::new(0);
        let close = |key: &AssetKey| {
            state.lock().close_then(key, || closes.set(closes.get() + 1));
        };

        state.lock().warn(dai.clone());

        let (result, ()) = tokio::join!(
            controller.add_to_asset_list(&dai, || close(&dai.key())),
            async {
                // Dismiss the DAI panel and open another one while the update is in flight.
                close(&dai.key());
                state.lock().warn(pepe.clone());
                store.gate.notify_one();
            }
        );

        assert!(matches!(result, Ok(VerifyOutcome::Persisted(_))));
        assert_eq!(state.lock().warned().map(|asset| asset.symbol.as_str()), Some("PEPE2"));
        assert_eq!(closes.get(), 1);
    }

    #[tokio::test]
    async fn test_optimistic_rejection_still_closes() {
        let h = harness(true, UpdateFailurePolicy::Optimistic);
        let asset = unverified_dai();

        let journal = h.journal.clone();
        let outcome = h
            .controller
            .add_to_asset_list(&asset, move || journal.lock().push("close".to_string()))
            .await
            .unwrap();

        assert_eq!(*h.journal.lock(), vec!["update", "snackbar", "close"]);
        assert_eq!(h.snackbar.shown.lock()[0].level, SnackbarLevel::Success);
        assert!(matches!(outcome, VerifyOutcome::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_strict_rejection_keeps_panel_open() {
        let h = harness(true, UpdateFailurePolicy::Strict);
        let asset = unverified_dai();

        let mut closed = false;
        let result = h.controller.add_to_asset_list(&asset, || closed = true).await;

        assert!(!closed);
        assert!(matches!(result, Err(AppError::UpdateRejected(_))));
        assert_eq!(*h.journal.lock(), vec!["update", "snackbar"]);
        assert_eq!(
            h.snackbar.shown.lock()[0],
            SnackbarMessage::error(text::SNACKBAR_UPDATE_FAILED)
        );
    }

    #[tokio::test]
    async fn test_close_runs_callback_in_every_variant() {
        for flag in [true, false] {
            let h = harness(false, UpdateFailurePolicy::Optimistic);
            let panel = panel(&unverified_dai(), flag, &Network::ethereum());

            let mut closes = 0;
            let outcome = h
                .controller
                .dispatch(&panel, PanelAction::Close, || closes += 1)
                .await
                .unwrap();

            assert_eq!(outcome, ActionOutcome::Closed);
            assert_eq!(closes, 1);
            assert!(h.journal.lock().is_empty());
        }
    }

    #[tokio::test]
    async fn test_add_unavailable_when_not_offered() {
        let h = harness(false, UpdateFailurePolicy::Optimistic);

        let legacy = panel(&unverified_dai(), false, &Network::ethereum());
        let verified = panel(
            &unverified_dai().with_metadata(AssetMetadata {
                verified: Some(true),
                ..Default::default()
            }),
            true,
            &Network::ethereum(),
        );

        for panel in [legacy, verified] {
            let mut closed = false;
            let outcome = h
                .controller
                .dispatch(&panel, PanelAction::AddToAssetList, || closed = true)
                .await
                .unwrap();
            assert_eq!(outcome, ActionOutcome::Unavailable);
            assert!(!closed);
        }
        assert!(h.store.updates.lock().is_empty());
    }

    #[tokio::test]
    async fn test_placeholders_do_nothing() {
        let h = harness(false, UpdateFailurePolicy::Optimistic);
        let panel = panel(&unverified_dai(), true, &Network::ethereum());

        let mut closed = false;
        let dont_show = h
            .controller
            .dispatch(&panel, PanelAction::DontShowAgain, || closed = true)
            .await
            .unwrap();
        let discovery = h
            .controller
            .dispatch(&panel, PanelAction::OpenDiscoveryTransaction, || closed = true)
            .await
            .unwrap();

        assert_eq!(dont_show, ActionOutcome::Unsupported(PendingFeature::RemoveAsset));
        assert_eq!(
            discovery,
            ActionOutcome::Unsupported(PendingFeature::OpenDiscoveryTransaction)
        );
        assert!(!closed);
        assert!(h.journal.lock().is_empty());
    }

    #[tokio::test]
    async fn test_open_contract() {
        let h = harness(false, UpdateFailurePolicy::Optimistic);

        let linked = panel(&unverified_dai(), true, &Network::ethereum());
        let outcome = h
            .controller
            .dispatch(&linked, PanelAction::OpenContract, || {})
            .await
            .unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::OpenExternal {
                url: "https://etherscan.io/token/0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string()
            }
        );

        let devnet = Network::custom(1337, "Local Devnet", NetworkFamily::Evm, "ETH");
        let inert = panel(&unverified_dai(), true, &devnet);
        let outcome = h
            .controller
            .dispatch(&inert, PanelAction::OpenContract, || {})
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_discovery_unavailable_without_hash() {
        let h = harness(false, UpdateFailurePolicy::Optimistic);
        let asset = unverified_dai().with_metadata(AssetMetadata::default());
        let panel = panel(&asset, true, &Network::ethereum());

        let outcome = h
            .controller
            .dispatch(&panel, PanelAction::OpenDiscoveryTransaction, || {})
            .await
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Unavailable);
    }
}
