//! Bottom slide-up menu with a dismissing overlay

use leptos::prelude::*;

#[component]
pub fn SharedSlideUpMenu(
    /// Runs when the overlay is clicked.
    close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="slide-up-overlay" on:click=move |_| close.run(())>
            <div
                class="slide-up-menu"
                role="dialog"
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
