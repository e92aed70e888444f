//! Error type shared by the page controller and feature initializers.
//!
//! DESIGN
//! ======
//! Nearly every failure here means "this optional feature is unavailable".
//! Initializers return `BehaviorError` so the controller can log the cause
//! and keep wiring the remaining features.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no global window object")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("required element not found: {0}")]
    MissingElement(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BehaviorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Self::Dom(message);
        }
        match js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message")) {
            Ok(message) if message.is_string() => Self::Dom(message.as_string().unwrap_or_default()),
            _ => Self::Dom(format!("{value:?}")),
        }
    }
}
