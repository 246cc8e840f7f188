//! # client
//!
//! Leptos frontend for NeoCura, the workout tracker. Rendered on the server
//! (`ssr`) and hydrated in the browser (`hydrate`).
//!
//! This crate contains pages, components, plain-data application state and
//! the REST helpers that talk to the server's `/api` routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
