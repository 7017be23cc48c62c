//! # catalog-client
//!
//! Leptos + WASM console for the product catalog service.
//!
//! This crate holds the session model, the route guard, the in-memory API key
//! store, the REST and completion clients, and the login/admin/user pages.
//! The `catalog-console` host renders it on the server (`ssr`) and the
//! browser hydrates it (`hydrate`).

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
