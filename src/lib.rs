//! Leadnurture - waitlist landing page
//!
//! A scroll-animated marketing page for AI-powered real estate lead
//! nurturing, with a waitlist form that stores leads in a hosted table.
//! Built with Leptos and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
