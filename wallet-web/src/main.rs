//! Wallet asset list with the asset verification slide-up.
//!
//! Leptos CSR front end over `lib-core`: the asset list, the warning panel,
//! and the snackbar that confirms an asset was added to the list.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger (also receives `tracing` events from lib-core)
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet asset list starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
