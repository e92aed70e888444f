//! Entrance animations for page sections, revealed once on first sight.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::PageContext;
use crate::error::BehaviorError;
use crate::features::Wiring;
use crate::state::reveal::{RevealAction, RevealOptions, RevealTracker};
use crate::util::dom;

pub fn init(ctx: &PageContext) -> Result<Wiring, BehaviorError> {
    let cfg = &ctx.config.reveal;
    let elements = dom::query_all(&ctx.root, &cfg.target_selector());
    if elements.is_empty() {
        return Ok(Wiring::Skipped("no reveal targets"));
    }
    for el in &elements {
        dom::set_attr(el, &cfg.marker_attribute, "true");
    }

    let mut tracker = RevealTracker::new(elements.len());
    if !dom::has_global(&ctx.window, "IntersectionObserver") {
        tracker.reveal_all();
        for el in &elements {
            dom::add_class(el, &cfg.visible_class);
        }
        log::debug!("reveal: IntersectionObserver unsupported, {} shown immediately", tracker.revealed_count());
        return Ok(Wiring::Active);
    }

    let options = RevealOptions { threshold: cfg.threshold, bottom_margin_percent: cfg.bottom_margin_percent };
    let elements = Rc::new(elements);
    let tracker = Rc::new(RefCell::new(tracker));
    let visible_class = cfg.visible_class.clone();

    let callback = {
        let elements = Rc::clone(&elements);
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = elements.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.borrow_mut().observe(index, entry.is_intersecting()) == RevealAction::Reveal {
                    dom::add_class(&target, &visible_class);
                    observer.unobserve(&target);
                }
            }
            if tracker.borrow().is_complete() {
                observer.disconnect();
            }
        })
    };

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &observer_init(&options))?;
    // Owned by the observer from here on.
    callback.forget();
    for el in elements.iter() {
        observer.observe(el);
    }

    Ok(Wiring::Active)
}

fn observer_init(options: &RevealOptions) -> IntersectionObserverInit {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    init
}
