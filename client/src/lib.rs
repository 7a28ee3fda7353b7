//! # attendance-client
//!
//! Leptos + WASM frontend for the Smart Attendance system.
//!
//! This crate contains pages, components, view-state machines, the server-state
//! query cache and the REST accessors used to talk to the attendance backend.
//! Pure decision logic lives in `state` and `query::cache` so it can be tested
//! natively; browser-only effects are gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod query;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
