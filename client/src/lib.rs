//! # medicare-client
//!
//! Leptos + WASM frontend for the Medicare appointment-booking system.
//!
//! Pages and components render against a remote clinic REST API; this crate
//! holds no data of its own beyond the bearer token and the current page of
//! each listing. The same crate is compiled for SSR (linked into
//! `medicare-server`) and for hydration in the browser.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
