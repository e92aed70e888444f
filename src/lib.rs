//! # portfolio-behavior
//!
//! Rust + WASM behavior layer for a static portfolio site. The HTML and CSS
//! are authored by hand; this crate attaches the interactive pieces once the
//! document is ready: theme persistence, the collapsible mobile navigation,
//! scroll-linked style variables, one-shot reveal animations, and the
//! one-time welcome dialog.
//!
//! The transition logic for every feature lives in `state` and builds
//! natively, so it is tested without a browser. The DOM wiring in `features`
//! and `app` only exists under the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod features;
pub mod state;
pub mod util;

/// Browser entry point.
///
/// Installs the panic hook and console logger, then runs the page controller
/// as soon as the document has finished parsing.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger already installed: {err}");
    }

    app::run_when_ready();
}
