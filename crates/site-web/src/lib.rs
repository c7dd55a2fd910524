//! studio-site Web Frontend
//!
//! Leptos-based WASM frontend rendering the pricing menu and one page per
//! pricing category.
//!
//! ## Base path
//!
//! The browser has no process environment, so `SITE_BASE_PATH` is read by
//! `option_env!` when this crate is compiled:
//!
//! ```text
//! SITE_BASE_PATH=/app  cargo build -p site-web --target wasm32-unknown-unknown
//!        │
//!        ▼
//! BasePath::resolve ──► PricingCatalog (built once, LazyLock)
//!                         ├─ <Router base="/app">
//!                         └─ <PricingMenu/> links  /app/pricing/<slug>
//! ```
//!
//! Build it with the same value the server runs with, or links and server
//! routes will disagree. An unset or malformed value means the site root.

mod app;
mod catalog;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
