//! One-time welcome dialog.
//!
//! Shown on the first visit only. Dismissed by clicking any element that
//! carries the close marker (close button, backdrop) or by pressing Escape
//! anywhere in the document.

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::app::PageContext;
use crate::config::WelcomeConfig;
use crate::error::BehaviorError;
use crate::features::Wiring;
use crate::state::welcome::{ModalEvent, WelcomeState, open_on_load};
use crate::util::dom::{self, ListenOptions};

pub fn init(ctx: &PageContext) -> Result<Wiring, BehaviorError> {
    let cfg = &ctx.config.welcome;
    let Some(modal) = dom::query(&ctx.root, &cfg.modal_selector) else {
        return Ok(Wiring::Skipped("no welcome modal"));
    };

    let initial = open_on_load(ctx.storage.as_ref(), &ctx.config.storage.welcome_seen);
    if initial.visible {
        render(&modal, cfg, initial);
        if let Some(close) = dom::query(&modal, &cfg.close_selector) {
            dom::focus(&close);
        }
    }

    {
        let target = modal.clone();
        let modal = modal.clone();
        let cfg = cfg.clone();
        dom::listen(&target, "click", ListenOptions::default(), move |event| {
            let has_close_marker = dom::target_element(&event).is_some_and(|t| t.has_attribute(&cfg.close_marker));
            dispatch(&modal, &cfg, &ModalEvent::Click { has_close_marker });
        })?;
    }

    let cfg = cfg.clone();
    dom::listen(&ctx.document, "keydown", ListenOptions::default(), move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        dispatch(&modal, &cfg, &ModalEvent::KeyDown { key });
    })?;

    Ok(Wiring::Active)
}

fn dispatch(modal: &Element, cfg: &WelcomeConfig, event: &ModalEvent) {
    if !event.dismisses() {
        return;
    }
    let current = WelcomeState { visible: modal.class_list().contains(&cfg.visible_class) };
    render(modal, cfg, current.apply(event));
}

fn render(modal: &Element, cfg: &WelcomeConfig, state: WelcomeState) {
    dom::set_class(modal, &cfg.visible_class, state.visible);
    dom::set_attr(modal, "aria-hidden", state.aria_hidden());
}
