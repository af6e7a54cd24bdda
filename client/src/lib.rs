//! # client
//!
//! Leptos + WASM front end for the console: an authentication-gated
//! dashboard shell. The shell composes a collapsible navigation rail, a
//! top bar, the routed content region, and a diagnostic overlay, all
//! behind a session-aware route guard.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that resolve the session against the API server. The app is
//! client-rendered: the `csr` feature carries the browser-only
//! dependencies, and the default (native) build exists for unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
