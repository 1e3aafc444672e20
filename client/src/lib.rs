//! # archaive-client
//!
//! Leptos + WASM frontend for the ArchAIve design-document hub.
//!
//! This crate contains pages, components, view state, the typed REST client
//! for the document/solution backend, and the message protocol spoken with
//! the embedded diagram editor. Every piece of domain logic (storage,
//! compliance scoring, chat answers) lives behind the backend API; this
//! crate only orchestrates requests and renders their results.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("archaive client hydrating (api base {})", config::api_base());
    leptos::mount::hydrate_body(app::App);
}
