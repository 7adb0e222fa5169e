//! # client
//!
//! Leptos + WASM frontend that exposes the `authgate` session to UI trees.
//!
//! This crate contains the browser `AuthGateway`, the context-provided
//! session hook, the route guard effect and the pages it gates. Browser-only
//! behavior sits behind the `hydrate` feature; `ssr` renders the shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
