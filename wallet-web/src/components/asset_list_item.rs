//! One row of the wallet asset list

use leptos::prelude::*;
use lib_core::verification::AssetRow;
use shared::dto::asset::Asset;

#[component]
pub fn WalletAssetListItem(
    row: AssetRow,
    /// Opens the verification panel for this row's asset.
    on_warn: Callback<Asset>,
) -> impl IntoView {
    let AssetRow {
        symbol,
        name,
        amount,
        main_currency,
        shows_unverified_warning,
        asset,
        ..
    } = row;

    let warning = shows_unverified_warning.then(|| {
        view! {
            <button
                class="asset-warning-trigger"
                title="Asset has not been verified yet!"
                on:click=move |_| on_warn.run(asset.clone())
            >
                "!"
            </button>
        }
    });

    view! {
        <li class="asset-list-item">
            <div class="asset-left">
                <span class="asset-symbol">{symbol}</span>
                <span class="asset-name">{name}</span>
            </div>
            <div class="asset-right">
                <span class="asset-amount">{amount}</span>
                {main_currency.map(|value| view! { <span class="asset-main-currency">{value}</span> })}
                {warning}
            </div>
        </li>
    }
}
