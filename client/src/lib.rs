//! # client
//!
//! Leptos + WASM frontend for Scout, the AI research assistant. One page:
//! a prompt bar, a loading state, and the rendered research categories with
//! cited sources.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point — hydrates the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
