//! Theme initialization and the header toggle button.
//!
//! The root attribute is applied even when the page has no toggle, so the
//! stored preference still takes effect.

use web_sys::Element;

use crate::app::PageContext;
use crate::error::BehaviorError;
use crate::features::Wiring;
use crate::state::theme::{Theme, load_theme, store_theme};
use crate::util::dom::{self, ListenOptions};

pub fn init(ctx: &PageContext) -> Result<Wiring, BehaviorError> {
    let cfg = &ctx.config;
    let theme = load_theme(ctx.storage.as_ref(), &cfg.storage.theme);
    dom::set_attr(&ctx.root, &cfg.theme.attribute, theme.as_str());

    let Some(toggle) = dom::query(&ctx.root, &cfg.theme.toggle_selector) else {
        return Ok(Wiring::Skipped("no theme toggle"));
    };
    render_toggle(&toggle, theme);

    let root = ctx.root.clone();
    let button = toggle.clone();
    let storage = ctx.storage.clone();
    let attribute = cfg.theme.attribute.clone();
    let key = cfg.storage.theme.clone();
    dom::listen(&toggle, "click", ListenOptions::default(), move |_| {
        // Read back from the DOM so external attribute changes are respected.
        let current = Theme::from_stored(root.get_attribute(&attribute).as_deref());
        let next = current.toggled();
        dom::set_attr(&root, &attribute, next.as_str());
        render_toggle(&button, next);
        store_theme(storage.as_ref(), &key, next);
        log::debug!("theme: {} -> {}", current.as_str(), next.as_str());
    })?;

    Ok(Wiring::Active)
}

fn render_toggle(toggle: &Element, theme: Theme) {
    dom::set_attr(toggle, "aria-pressed", theme.aria_pressed());
    dom::set_attr(toggle, "aria-label", theme.toggle_label());
    toggle.set_text_content(Some(theme.toggle_icon()));
}
