//! # fintrack-client
//!
//! Leptos + WASM frontend for the Finance Tracker REST backend.
//!
//! Every page is a thin consumer of the API gateway in [`net::api`]: fetch
//! on mount, hold the response as page-local display state, surface
//! normalized error messages through a dismissible alert. Business logic
//! (balance computation, distribution, trend aggregation) lives entirely
//! on the server; this crate only deserializes and renders it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
