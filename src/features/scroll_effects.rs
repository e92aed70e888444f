//! Scroll-linked custom properties on the root element.

use std::rc::Rc;

use web_sys::{Element, Window};

use crate::app::PageContext;
use crate::config::ScrollConfig;
use crate::error::BehaviorError;
use crate::features::Wiring;
use crate::state::scroll::ScrollMetrics;
use crate::util::dom::{self, ListenOptions};

pub fn init(ctx: &PageContext) -> Result<Wiring, BehaviorError> {
    let window = ctx.window.clone();
    let root = ctx.root.clone();
    let cfg = ctx.config.scroll.clone();
    let update = Rc::new(move || write_metrics(&root, &cfg, measure(&window, &root, cfg.parallax_factor)));

    update();

    let on_scroll = Rc::clone(&update);
    dom::listen(&ctx.window, "scroll", ListenOptions { passive: true, capture: false }, move |_| on_scroll())?;
    dom::listen(&ctx.window, "resize", ListenOptions::default(), move |_| update())?;

    Ok(Wiring::Active)
}

fn measure(window: &Window, root: &Element, factor: f64) -> ScrollMetrics {
    let scroll_y = window.scroll_y().unwrap_or_default();
    let viewport_height = match window.inner_height() {
        Ok(height) => height.as_f64().unwrap_or_default(),
        Err(_) => f64::from(root.client_height()),
    };
    ScrollMetrics::compute_with_factor(scroll_y, f64::from(root.scroll_height()), viewport_height, factor)
}

fn write_metrics(root: &Element, cfg: &ScrollConfig, metrics: ScrollMetrics) {
    dom::set_style_var(root, &cfg.progress_var, &metrics.progress_css());
    dom::set_style_var(root, &cfg.parallax_var, &metrics.parallax_css());
}
