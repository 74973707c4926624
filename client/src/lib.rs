//! # forum-client
//!
//! Leptos + WASM frontend for the forum. Pages, components, and client state
//! live here; every HTTP call goes through the shared `forum-api` pipeline
//! held in [`net::api`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, extension noise filter, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::errors::install_noise_filter();
    leptos::mount::mount_to_body(app::App);
}
