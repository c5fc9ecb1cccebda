//! # client
//!
//! Leptos + WASM storefront: menu browsing, session cart and a two-step
//! checkout that hands the finished order to the merchant's messenger inbox.
//!
//! The crate is compiled twice. With `ssr` the server renders [`app::App`]
//! through `leptos_axum`; with `hydrate` the same tree is hydrated in the
//! browser and the browser-only glue (fetches, storage, observers, timers)
//! comes alive.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod order;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
