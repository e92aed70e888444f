//! Thin `web-sys` wrappers used by the feature initializers.
//!
//! Queries treat an invalid selector like a missing element. Attribute,
//! class, and style writes log failures instead of returning them.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget};

use crate::error::BehaviorError;

/// First descendant of `scope` matching `selector`.
pub fn query(scope: &Element, selector: &str) -> Option<Element> {
    match scope.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

/// All descendants of `scope` matching `selector`, in document order.
pub fn query_all(scope: &Element, selector: &str) -> Vec<Element> {
    let list = match scope.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::debug!("setAttribute({name}) failed: {err:?}");
    }
}

pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::debug!("classList.add({class}) failed: {err:?}");
    }
}

pub fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::debug!("classList.remove({class}) failed: {err:?}");
    }
}

/// Add or remove `class` so its presence matches `on`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if on { add_class(el, class) } else { remove_class(el, class) }
}

/// Write a custom property on an element's inline style.
pub fn set_style_var(el: &Element, name: &str, value: &str) {
    let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(name, value) {
        log::debug!("style.setProperty({name}) failed: {err:?}");
    }
}

/// Move focus to `el` when it is focusable.
pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>()
        && let Err(err) = html.focus()
    {
        log::debug!("focus() failed: {err:?}");
    }
}

/// Event target as an `Element`, when it is one.
pub fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_ref::<Element>().cloned())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenOptions {
    pub passive: bool,
    pub capture: bool,
}

/// Attach `handler` for the lifetime of the page.
///
/// Listeners are never removed; the closure is leaked and released on unload.
pub fn listen(
    target: &EventTarget,
    event: &str,
    options: ListenOptions,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), BehaviorError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    )?;
    closure.forget();
    Ok(())
}

/// Whether `window[name]` exists (feature detection for constructors).
pub fn has_global(window: &web_sys::Window, name: &str) -> bool {
    matches!(js_sys::Reflect::has(window, &wasm_bindgen::JsValue::from_str(name)), Ok(true))
}
