//! # client
//!
//! Leptos + WASM front-end shell for the institute's management modules.
//!
//! Each module route is wrapped in a `SessionLayout` that bootstraps the
//! module's session from the login handoff cookie or `localStorage`, gates
//! role-aware rendering until that has happened, and runs the inactivity
//! watchdog that signs the user out. Session rules live in the `session`
//! crate; this crate supplies the browser adapters and the UI.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
