//! Asset state management
//!
//! Signals the views read, plus the `lib-core` services behind them. The
//! services live in a `StoredValue` so the context itself stays `Copy`.

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::{
    Config, FeatureFlags, InMemoryAssetStore, NetworkContext, SnackbarMessage, SnackbarQueue,
    StaticNetworkContext, VerificationController,
};
use lib_core::model::store::AssetStore;
use shared::dto::asset::AssetAmount;
use shared::dto::network::Network;

use crate::utils::constants::{
    DEFAULT_CHAIN_ID, SNACKBAR_CAPACITY, SNACKBAR_DURATION_MS, SUPPORT_UNVERIFIED_ASSET,
    UPDATE_FAILURE_POLICY,
};

/// `lib-core` services shared by every component.
#[derive(Clone)]
pub struct AssetServices {
    pub store: Arc<InMemoryAssetStore>,
    pub snackbar: Arc<SnackbarQueue>,
    pub flags: Arc<FeatureFlags>,
    pub network: Arc<StaticNetworkContext>,
    pub controller: Arc<VerificationController>,
}

impl AssetServices {
    fn new(config: &Config) -> Self {
        let store = Arc::new(InMemoryAssetStore::default());
        let snackbar = Arc::new(SnackbarQueue::new(config.snackbar_capacity));
        let network = Network::by_chain_id(DEFAULT_CHAIN_ID).unwrap_or_else(Network::ethereum);
        let controller = Arc::new(VerificationController::new(
            store.clone(),
            snackbar.clone(),
            config.update_failure_policy,
        ));

        Self {
            store,
            snackbar,
            flags: Arc::new(FeatureFlags::from_config(config)),
            network: Arc::new(StaticNetworkContext::new(network)),
            controller,
        }
    }
}

/// Global asset context
#[derive(Clone, Copy)]
pub struct AssetsContext {
    pub amounts: RwSignal<Vec<AssetAmount>>,
    pub network: RwSignal<Network>,
    pub loading_expired: RwSignal<bool>,
    pub snackbar: RwSignal<Option<SnackbarMessage>>,
    services: StoredValue<AssetServices>,
}

impl AssetsContext {
    pub fn new(config: &Config) -> Self {
        let services = AssetServices::new(config);
        let network = services.network.current_network();

        Self {
            amounts: RwSignal::new(Vec::new()),
            network: RwSignal::new(network),
            loading_expired: RwSignal::new(false),
            snackbar: RwSignal::new(None),
            services: StoredValue::new(services),
        }
    }

    pub fn services(&self) -> AssetServices {
        self.services.get_value()
    }

    /// Replace the account snapshot in the store and the view.
    pub fn load_amounts(&self, amounts: Vec<AssetAmount>) {
        self.services().store.replace_all(amounts.clone());
        self.amounts.set(amounts);
    }

    /// Re-read amounts from the store after a metadata update.
    pub async fn refresh_amounts(&self) {
        let store = self.services().store;
        match store.asset_amounts().await {
            Ok(amounts) => {
                self.amounts.try_set(amounts);
            }
            Err(e) => log::error!("Failed to refresh assets: {}", e),
        }
    }

    pub fn select_network(&self, chain_id: u64) {
        let Some(network) = Network::by_chain_id(chain_id) else {
            log::warn!("Unknown chain id {}", chain_id);
            return;
        };

        self.services().network.select(network.clone());
        self.network.set(network);
    }

    /// Move queued snackbar messages to the view. The newest one wins and
    /// auto-dismisses after `SNACKBAR_DURATION_MS`.
    pub fn flush_snackbar(&self) {
        let Some(message) = self.services().snackbar.drain().pop() else {
            return;
        };

        self.snackbar.set(Some(message.clone()));

        let snackbar = self.snackbar;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SNACKBAR_DURATION_MS).await;
            snackbar.try_update(|current| {
                if current.as_ref() == Some(&message) {
                    *current = None;
                }
            });
        });
    }
}

fn web_config() -> Config {
    let config = Config {
        support_unverified_asset: SUPPORT_UNVERIFIED_ASSET,
        update_failure_policy: UPDATE_FAILURE_POLICY,
        snackbar_capacity: SNACKBAR_CAPACITY,
    };

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("{}; using defaults", e);
            Config::default()
        }
    }
}

pub fn provide_assets_context() -> AssetsContext {
    let config = web_config();
    log::info!(
        "Asset config: support_unverified_asset={}, update_failure_policy={}",
        config.support_unverified_asset,
        config.update_failure_policy
    );

    let context = AssetsContext::new(&config);
    provide_context(context);
    context
}

pub fn use_assets_context() -> AssetsContext {
    expect_context::<AssetsContext>()
}
