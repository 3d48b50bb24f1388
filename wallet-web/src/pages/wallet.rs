//! Wallet page - asset list for the active network

use leptos::prelude::*;
use leptos::logging::log;

use crate::components::WalletAssetList;
use crate::services::assets::{demo_asset_amounts, fetch_asset_amounts};
use crate::state::assets::use_assets_context;
use crate::utils::constants::INITIALIZATION_TIMEOUT_MS;

#[component]
pub fn WalletPage() -> impl IntoView {
    let ctx = use_assets_context();

    // Reload whenever the network changes.
    Effect::new(move |_| {
        let chain_id = ctx.network.with(|network| network.chain_id);
        leptos::task::spawn_local(async move {
            let fetched = fetch_asset_amounts(chain_id).await;
            if !ctx.services().network.is_active(chain_id) {
                log!("Dropping assets for chain {}: network changed", chain_id);
                return;
            }
            match fetched {
                Ok(amounts) => {
                    log!("Loaded {} assets for chain {}", amounts.len(), chain_id);
                    ctx.load_amounts(amounts);
                }
                Err(e) => {
                    log::warn!("{}; showing demo assets", e);
                    ctx.load_amounts(demo_asset_amounts());
                }
            }
        });
    });

    // Stop "Digging deeper..." once activity discovery has had its chance.
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(INITIALIZATION_TIMEOUT_MS).await;
        ctx.loading_expired.try_set(true);
    });

    let on_close = Callback::new(|_: ()| log!("Asset verification panel closed"));

    view! {
        <div class="app-container" style="display: flex; justify-content: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl);">
                <h1 class="card-title" style="margin-bottom: var(--spacing-md);">
                    {move || ctx.network.with(|network| network.name.clone())}
                </h1>
                <WalletAssetList
                    amounts=ctx.amounts
                    loading_expired=ctx.loading_expired
                    on_close=on_close
                />
            </div>
        </div>
    }
}
