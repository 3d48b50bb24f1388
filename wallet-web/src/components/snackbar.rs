//! Transient confirmation message

use leptos::prelude::*;
use lib_core::SnackbarLevel;

use crate::state::assets::use_assets_context;

#[component]
pub fn Snackbar() -> impl IntoView {
    let ctx = use_assets_context();

    move || {
        ctx.snackbar.get().map(|message| {
            let class = match message.level {
                SnackbarLevel::Success => "snackbar snackbar-success",
                SnackbarLevel::Error => "snackbar snackbar-error",
            };
            view! { <div class=class role="status">{message.text}</div> }
        })
    }
}
