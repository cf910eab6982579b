//! # client
//!
//! Leptos + WASM frontend for the Resume Desk recruiting console.
//!
//! This crate contains pages, components, application state, the typed REST
//! client, and the browser helpers (session storage, file download) the pages
//! rely on. The host binary renders [`app::shell`] on the server and the
//! [`hydrate`] entry point takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
