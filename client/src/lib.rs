//! # storefront-admin-ui
//!
//! Leptos + WASM frontend for the storefront administration console.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers used by the comment moderation console and the product editor.
//! The `server` host renders it with the `ssr` feature; the browser bundle is
//! built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
