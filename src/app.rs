//! Page behavior controller.
//!
//! ARCHITECTURE
//! ============
//! `PageContext` replaces the script-global state of a typical page script:
//! it is built once after the document is ready and handed to every feature
//! initializer. Initializers run in `FeatureId::enabled` order; each one's
//! failure is logged and never stops the rest.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AudioContext, Document, Element, Storage, Window};

use crate::config::{CONFIG_ELEMENT_ID, READY_CLASS, SiteConfig};
use crate::error::BehaviorError;
use crate::features::{FeatureId, Wiring};
use crate::util::{dom, storage};

/// Lazily created audio context shared by click handlers.
pub type AudioSlot = Rc<RefCell<Option<AudioContext>>>;

/// Everything a feature initializer may touch.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    /// The `<html>` element.
    pub root: Element,
    /// `localStorage`, or `None` when the browser refuses access.
    pub storage: Option<Storage>,
    pub config: SiteConfig,
    pub audio: AudioSlot,
}

impl PageContext {
    /// Build the context from the global window.
    pub fn from_window() -> Result<Self, BehaviorError> {
        let window = web_sys::window().ok_or(BehaviorError::NoWindow)?;
        let document = window.document().ok_or(BehaviorError::NoDocument)?;
        let root = document
            .document_element()
            .ok_or_else(|| BehaviorError::MissingElement("html".to_owned()))?;
        let storage = storage::local_storage(&window);
        let config = load_config(&document);

        Ok(Self { window, document, root, storage, config, audio: Rc::new(RefCell::new(None)) })
    }

    /// `pathname` of the current location, empty when unreadable.
    pub fn pathname(&self) -> String {
        match self.window.location().pathname() {
            Ok(path) => path,
            Err(err) => {
                log::debug!("location.pathname unavailable: {err:?}");
                String::new()
            }
        }
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let (config, err) = SiteConfig::resolve(raw.as_deref());
    if let Some(err) = err {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }
    config
}

/// Run the controller now if the document has been parsed, otherwise on
/// `DOMContentLoaded`.
pub fn run_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("page behavior disabled: {}", BehaviorError::NoDocument);
        return;
    };
    if document.ready_state() != "loading" {
        run();
        return;
    }

    let on_ready = Closure::once_into_js(run);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("could not wait for DOMContentLoaded: {}", BehaviorError::from(err));
    }
}

fn run() {
    match PageContext::from_window() {
        Ok(ctx) => run_features(&ctx),
        Err(err) => log::error!("page behavior disabled: {err}"),
    }
}

/// Mark the body ready and wire every enabled feature.
pub fn run_features(ctx: &PageContext) {
    if let Some(body) = ctx.document.body() {
        dom::add_class(&body, READY_CLASS);
    }

    for feature in FeatureId::enabled(&ctx.config) {
        match feature.init(ctx) {
            Ok(Wiring::Active) => log::debug!("{}: wired", feature.name()),
            Ok(Wiring::Skipped(reason)) => log::debug!("{}: skipped ({reason})", feature.name()),
            Err(err) => log::warn!("{}: unavailable: {err}", feature.name()),
        }
    }
}
