//! Key/value persistence behind a small trait.
//!
//! The browser build stores preferences in `localStorage`. Every access is
//! best-effort: a store that throws (disabled, quota, privacy mode) reads as
//! empty and drops writes, so no feature ever fails on persistence.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string store used for theme and welcome-modal flags.
pub trait KeyValueStore {
    /// Read `key`, or `None` when absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are swallowed.
    fn set_item(&self, key: &str, value: &str);
}

/// Read through an optional store; an unavailable store reads as empty.
pub fn read<S: KeyValueStore + ?Sized>(store: Option<&S>, key: &str) -> Option<String> {
    store.and_then(|s| s.get_item(key))
}

/// Write through an optional store; an unavailable store skips the write.
pub fn write<S: KeyValueStore + ?Sized>(store: Option<&S>, key: &str, value: &str) {
    if let Some(store) = store {
        store.set_item(key, value);
    }
}

/// In-memory store with the same semantics as `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries.
    #[must_use]
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in items {
            store.set_item(key, value);
        }
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for web_sys::Storage {
    fn get_item(&self, key: &str) -> Option<String> {
        match web_sys::Storage::get_item(self, key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(err) = web_sys::Storage::set_item(self, key, value) {
            log::debug!("localStorage write of {key} failed: {err:?}");
        }
    }
}

/// Resolve `window.localStorage`, treating a throwing getter as unavailable.
#[cfg(feature = "hydrate")]
pub fn local_storage(window: &web_sys::Window) -> Option<web_sys::Storage> {
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::debug!("localStorage unavailable: {err:?}");
            None
        }
    }
}
