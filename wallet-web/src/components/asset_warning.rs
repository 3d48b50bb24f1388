//! Asset verification slide-up
//!
//! Renders an [`AssetVerificationPanel`] and routes its buttons through the
//! [`VerificationController`](lib_core::VerificationController). Clicking the
//! overlay closes the panel in every variant.

use leptos::prelude::*;
use lib_core::verification::{
    text, ActionOutcome, AddressControl, AssetVerificationPanel, ButtonKind, PanelAction, VerifyOutcome,
};
use lib_core::NetworkContext;
use shared::dto::asset::{Asset, AssetKey};

use crate::components::SharedSlideUpMenu;
use crate::state::assets::{use_assets_context, AssetsContext};
use crate::utils::browser::open_in_new_tab;

#[component]
pub fn AssetWarningSlideUp(asset: Asset, close: Callback<AssetKey>) -> impl IntoView {
    let ctx = use_assets_context();
    let services = ctx.services();
    let key = StoredValue::new(asset.key());
    let close_this = Callback::new(move |_: ()| close.run(key.get_value()));

    // Re-read only when the active network changes.
    let panel = Memo::new(move |_| {
        ctx.network.track();
        AssetVerificationPanel::build(&asset, &services.network.current_network(), services.flags.as_ref())
    });
    let (pending, set_pending) = signal(false);

    // Links and dismissal stay live while the store write is in flight.
    let run = move |action: PanelAction| {
        let guarded = action.is_serialized();
        if guarded {
            if pending.get_untracked() {
                return;
            }
            set_pending.set(true);
        }

        let panel = panel.get_untracked();
        let controller = ctx.services().controller;
        leptos::task::spawn_local(async move {
            let result = controller.dispatch(&panel, action, move || close_this.run(())).await;
            handle_outcome(ctx, result).await;
            ctx.flush_snackbar();
            if guarded {
                set_pending.try_set(false);
            }
        });
    };

    view! {
        <SharedSlideUpMenu close=close_this>
            {move || {
                let panel = panel.get();
                let banner_class = if panel.is_unverified() {
                    "warning-banner warning"
                } else {
                    "warning-banner verified"
                };

                view! {
                    <div class="asset-warning">
                        <h2 class="slide-up-header">{panel.header}</h2>
                        <div class=banner_class>
                            <span class="banner-title">{panel.banner.title}</span>
                            <p class="banner-description">{panel.banner.description}</p>
                        </div>
                        <ul class="asset-details">
                            <li>
                                <span class="label">{text::SYMBOL}</span>
                                <span class="value">{panel.symbol.clone()}</span>
                            </li>
                            <li>
                                <span class="label">{text::CONTRACT}</span>
                                <AddressButton
                                    control=panel.contract.clone()
                                    on_open=Callback::new(move |_: ()| run(PanelAction::OpenContract))
                                />
                            </li>
                            {panel.discovery_tx.clone().map(|control| {
                                view! {
                                    <li>
                                        <span class="label">{text::DISCOVERY_TX_HASH}</span>
                                        <AddressButton
                                            control=control
                                            on_open=Callback::new(move |_: ()| run(PanelAction::OpenDiscoveryTransaction))
                                        />
                                    </li>
                                }
                            })}
                        </ul>
                        <div class="slide-up-actions">
                            {panel
                                .buttons()
                                .into_iter()
                                .map(|button| {
                                    let class = match button.kind {
                                        ButtonKind::Primary => "btn btn-primary",
                                        ButtonKind::Secondary => "btn btn-secondary",
                                    };
                                    let action = button.action;
                                    view! {
                                        <button
                                            class=class
                                            disabled=move || action.is_serialized() && pending.get()
                                            on:click=move |_| run(action)
                                        >
                                            {button.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            }}
        </SharedSlideUpMenu>
    }
}

#[component]
fn AddressButton(control: AddressControl, on_open: Callback<()>) -> impl IntoView {
    let new_tab_icon = control.shows_new_tab_icon().then(|| view! { <span class="icon-new-tab"></span> });

    view! {
        <button
            class="address-button"
            title=control.title().to_string()
            disabled=control.is_disabled()
            on:click=move |_| on_open.run(())
        >
            {control.display().to_string()}
            {new_tab_icon}
        </button>
    }
}

async fn handle_outcome(ctx: AssetsContext, result: lib_core::Result<ActionOutcome>) {
    match result {
        Ok(ActionOutcome::OpenExternal { url }) => open_in_new_tab(&url),
        Ok(ActionOutcome::Verified(outcome)) => {
            if let VerifyOutcome::Rejected { asset, reason } = &outcome {
                log::warn!("{} was not persisted: {}", asset.symbol, reason);
            }
            ctx.refresh_amounts().await;
        }
        Ok(ActionOutcome::Unsupported(feature)) => log::debug!("Not implemented yet: {}", feature),
        Ok(outcome) => log::debug!("Panel action finished: {:?}", outcome),
        Err(e) => log::error!("Panel action failed: {}", e),
    }
}
