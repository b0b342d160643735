//! # moondig-client
//!
//! Leptos + WASM front end for the Moon Dig web application.
//!
//! The crate's core is the authentication state-synchronization engine in
//! [`auth`]: it reconciles a URL-carried one-time wallet token, a persisted
//! access token, and the external session provider into one observable auth
//! state for the component tree. `net` holds the collaborator boundaries,
//! `state` the shared state models, and `pages` the route screens.

pub mod app;
pub mod auth;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
