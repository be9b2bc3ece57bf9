//! ==============================================================================
//! lib.rs - Shinigami Script Wizard front end
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm site shell. mounts the responsive header and the
//!     routed page area below it.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - header model (menu state, links, assets) lives in the shared crate
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod components;

use components::Header;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting {}", shared::SITE_TITLE);
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=shared::SITE_TITLE />
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=Home />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <section class="w-full max-w-4xl mx-auto py-10">
            <h1 class="uppercase text-white">{shared::SITE_TITLE}</h1>
        </section>
    }
}
