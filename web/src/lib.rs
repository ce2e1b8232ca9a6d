//! # taskrs-web
//!
//! Leptos + WASM front-end shell for the taskrs task manager.
//!
//! This crate contains the page scaffold, the theme preference service and
//! the `localStorage` wrapper it persists through. With the `hydrate` feature
//! it builds the browser bundle; with `ssr` it is linked into the host for
//! server rendering.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
