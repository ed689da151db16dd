//! # ragbook-ui
//!
//! Leptos + WASM front-end for the Open Ragbook knowledge-base management
//! system. The crate's core is the client-side control layer: an HTTP client
//! with auth/error interception (`net`), a route table with a navigation
//! guard (`routes`, `guard`), and session-scoped state — token, cached user
//! info, and the background-polling registry (`session`).
//!
//! Browser-only code is gated behind the `hydrate` feature; the control
//! layer itself runs (and is tested) natively.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod session;
pub mod util;

/// Browser entry point: set up logging and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
