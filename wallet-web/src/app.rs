//! Wallet Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Navbar, Snackbar};
use crate::pages::WalletPage;
use crate::state::assets::provide_assets_context;

#[component]
pub fn App() -> impl IntoView {
    provide_assets_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=WalletPage/>
                </Routes>
                <Snackbar/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to wallet"
                    </span>
                </A>
            </div>
        </div>
    }
}
