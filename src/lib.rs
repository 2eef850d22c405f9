//! # upright-site
//!
//! Leptos frontend for the Upright Investor Services brochure site: a
//! single-page layout with light/dark theming and a high-zoom layout
//! adaptation.
//!
//! The crate's logic lives in two small stores — the theme store
//! (`util::theme_store` over `state::theme`) and the zoom detector
//! (`util::high_zoom` over `util::zoom_math`) — with pages and
//! components as thin consumers.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
