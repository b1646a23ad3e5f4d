//! # taskdeck
//!
//! Leptos + WASM browser client for a cookie-authenticated to-do service.
//!
//! This crate contains the session store and route guard, the typed REST
//! client over a swappable HTTP transport, and the pages and components of
//! the task manager. Everything except the browser transport and the mount
//! entry point builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
