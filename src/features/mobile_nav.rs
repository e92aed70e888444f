//! Collapsible mobile navigation for every `.site-nav` on the page.
//!
//! Containers are wired independently; each one keeps its own `NavState`
//! and nothing is shared between them.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::app::PageContext;
use crate::components::mobile_nav::MobileNav;
use crate::config::NavConfig;
use crate::error::BehaviorError;
use crate::features::Wiring;
use crate::state::nav::{NavEvent, NavState, link_prefix};
use crate::util::dom::{self, ListenOptions};

pub fn init(ctx: &PageContext) -> Result<Wiring, BehaviorError> {
    let cfg = &ctx.config.nav;
    let containers = dom::query_all(&ctx.root, &cfg.container_selector);
    if containers.is_empty() {
        return Ok(Wiring::Skipped("no navigation containers"));
    }

    let prefix = link_prefix(&ctx.pathname(), &cfg.nested_segment);
    let mut wired = 0usize;
    for container in containers {
        match wire_container(&container, cfg, prefix) {
            Ok(true) => wired += 1,
            Ok(false) => {}
            Err(err) => log::warn!("mobile-nav: container skipped: {err}"),
        }
    }

    if wired == 0 {
        return Ok(Wiring::Skipped("no navigation toggles"));
    }
    log::debug!("mobile-nav: {wired} container(s)");
    Ok(Wiring::Active)
}

/// Wire one container. Returns `false` when it has no toggle control.
fn wire_container(container: &Element, cfg: &NavConfig, prefix: &'static str) -> Result<bool, BehaviorError> {
    let Some(toggle) = dom::query(container, &cfg.toggle_selector) else {
        return Ok(false);
    };

    let panel_selector = cfg.panel_selector();
    if dom::query(container, &panel_selector).is_none() {
        mount_panel(container, cfg, prefix)?;
    }
    let panel = dom::query(container, &panel_selector);

    render(container, &toggle, panel.as_ref(), cfg, NavState::default());

    {
        let container = container.clone();
        let button = toggle.clone();
        let panel = panel.clone();
        let cfg = cfg.clone();
        dom::listen(&toggle, "click", ListenOptions::default(), move |_| {
            let next = current_state(&container, &cfg).apply(NavEvent::ToggleClicked);
            render(&container, &button, panel.as_ref(), &cfg, next);
        })?;
    }

    if let Some(panel) = panel {
        let container = container.clone();
        let button = toggle.clone();
        let cfg = cfg.clone();
        let target = panel.clone();
        dom::listen(&target, "click", ListenOptions::default(), move |event| {
            let on_link = dom::target_element(&event).is_some_and(|t| matches!(t.matches("a"), Ok(true)));
            if !on_link {
                return;
            }
            let next = current_state(&container, &cfg).apply(NavEvent::PanelClicked { on_link });
            render(&container, &button, Some(&panel), &cfg, next);
        })?;
    }

    Ok(true)
}

fn mount_panel(container: &Element, cfg: &NavConfig, prefix: &'static str) -> Result<(), BehaviorError> {
    let parent = container
        .dyn_ref::<HtmlElement>()
        .cloned()
        .ok_or_else(|| BehaviorError::Dom(format!("{} is not an HTML element", cfg.container_selector)))?;
    let panel_class = cfg.panel_class.clone();
    // The panel lives as long as the page; keep it mounted.
    leptos::mount::mount_to(parent, move || view_panel(prefix, panel_class)).forget();
    Ok(())
}

fn view_panel(prefix: &'static str, panel_class: String) -> impl leptos::IntoView {
    use leptos::prelude::*;
    view! { <MobileNav prefix=prefix panel_class=panel_class/> }
}

/// The open class on the container is the source of truth.
fn current_state(container: &Element, cfg: &NavConfig) -> NavState {
    NavState { open: container.class_list().contains(&cfg.open_class) }
}

fn render(container: &Element, toggle: &Element, panel: Option<&Element>, cfg: &NavConfig, state: NavState) {
    dom::set_class(container, &cfg.open_class, state.open);
    dom::set_attr(toggle, "aria-expanded", state.aria_expanded());
    if let Some(panel) = panel {
        dom::set_attr(panel, "aria-hidden", state.panel_aria_hidden());
    }
}
