//! # storefront-client
//!
//! Leptos + WASM front-end for the storefront: login, product dashboard and
//! admin pages with role-based display, form validation and session
//! handling against a remote API.
//!
//! This crate contains pages, components, application state, network types
//! and API helpers. The `server` crate renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating storefront");
    leptos::mount::hydrate_body(app::App);
}
