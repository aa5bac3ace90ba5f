//! # classgrade-client
//!
//! Leptos + WASM frontend for the ClassGrade teaching-assistant application.
//! Covers routing, the authentication state container, the Supabase GoTrue
//! client it proxies, and REST helpers for the grading backend.
//!
//! Views are thin; the interesting parts are the route table with its
//! navigation guard (`routes`) and the auth store (`state::auth`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
