//! # studio-client
//!
//! Leptos + WASM frontend for the Studio assistant workbench: a chat page
//! driven by a single resolved primary action, and a material editor with a
//! name-derived identifier and a debounced content preview.
//!
//! Decision logic lives in plain structs and functions under `state` so it
//! is unit-testable without a browser; components and pages only wire
//! signals, timers, and network calls around it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
