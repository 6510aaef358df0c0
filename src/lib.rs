//! # admin-console
//!
//! Leptos + WASM admin console for a remote catalog backend: categories and
//! their listings, blog cards, and registered users.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to the backend directly through [`net::api::ApiClient`].
//! Authentication lives in one injectable [`state::session::SessionStore`];
//! route guards in [`util::auth`] read its state and redirect accordingly.
//! The `server/` crate only renders the SSR shell and serves the WASM bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless; keep the existing logger.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
