//! Navigation Bar Component with the network selector

use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::network::Network;

use crate::state::assets::use_assets_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_assets_context();

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<u64>() {
            Ok(chain_id) => ctx.select_network(chain_id),
            Err(e) => log::warn!("Invalid chain id in network selector: {}", e),
        }
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Wallet"</span>
                </A>
                <select
                    class="network-select"
                    on:change=on_change
                    prop:value=move || ctx.network.with(|network| network.chain_id.to_string())
                >
                    {Network::known()
                        .into_iter()
                        .map(|network| {
                            view! { <option value=network.chain_id.to_string()>{network.name}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        </nav>
    }
}
