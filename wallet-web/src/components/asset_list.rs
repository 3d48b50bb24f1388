//! Wallet asset list
//!
//! Owns the warned-asset cell. Setting it mounts the verification slide-up;
//! closing the slide-up clears it and notifies `on_close`. Rows are keyed on
//! their rendered state so a verified asset drops its warning trigger.

use leptos::prelude::*;
use lib_core::verification::{AssetListState, AssetListView};
use shared::dto::asset::{Asset, AssetAmount, AssetKey};

use crate::components::{AssetWarningSlideUp, WalletAssetListItem};

#[component]
pub fn WalletAssetList(
    #[prop(into)] amounts: Signal<Vec<AssetAmount>>,
    #[prop(into)] loading_expired: Signal<bool>,
    /// Runs every time the verification panel closes.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let list_state = RwSignal::new(AssetListState::default());
    let view_model = Memo::new(move |_| AssetListView::render(&amounts.get(), loading_expired.get()));

    let on_warn = Callback::new(move |asset: Asset| {
        list_state.update(|state| {
            state.warn(asset);
        });
    });

    // Keyed, so a late close from a finished action cannot dismiss a panel
    // opened for another asset in the meantime.
    let close = Callback::new(move |key: AssetKey| {
        let mut closed = false;
        list_state.try_update(|state| {
            state.close_then(&key, || closed = true);
        });
        if closed {
            if let Some(on_close) = on_close {
                on_close.run(());
            }
        }
    });

    view! {
        <ul class="wallet-asset-list">
            <For
                each=move || view_model.get().rows
                key=|row| row.render_key()
                children=move |row| view! { <WalletAssetListItem row=row on_warn=on_warn/> }
            />
            {move || {
                view_model.get().loading_indicator.map(|label| {
                    view! {
                        <li class="asset-list-item loading">
                            <span class="spinner"></span>
                            <span>{label}</span>
                        </li>
                    }
                })
            }}
        </ul>
        {move || {
            list_state
                .with(|state| state.warned().cloned())
                .map(|asset| view! { <AssetWarningSlideUp asset=asset close=close/> })
        }}
    }
}
