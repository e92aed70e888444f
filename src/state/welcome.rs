//! One-time welcome dialog.
//!
//! The dialog auto-opens only while the `hasSeenWelcomeModal` flag is not
//! exactly `"true"`, and the flag is set the moment it opens. Dismissal
//! never re-opens it.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use crate::util::storage::{self, KeyValueStore};

pub const SEEN_VALUE: &str = "true";

pub const ESCAPE_KEY: &str = "Escape";

/// Whether a stored flag value still warrants showing the dialog.
#[must_use]
pub fn should_auto_show(flag: Option<&str>) -> bool {
    flag != Some(SEEN_VALUE)
}

/// Events the dialog reacts to once wired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    /// Click inside the dialog; `has_close_marker` when the target carries
    /// the close marker attribute (close button, backdrop).
    Click { has_close_marker: bool },
    /// Keydown anywhere in the document.
    KeyDown { key: String },
}

impl ModalEvent {
    #[must_use]
    pub fn dismisses(&self) -> bool {
        match self {
            Self::Click { has_close_marker } => *has_close_marker,
            Self::KeyDown { key } => key == ESCAPE_KEY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WelcomeState {
    pub visible: bool,
}

impl WelcomeState {
    #[must_use]
    pub fn apply(self, event: &ModalEvent) -> Self {
        if event.dismisses() { Self { visible: false } } else { self }
    }

    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        if self.visible { "false" } else { "true" }
    }
}

/// Startup decision: read the flag, and if the dialog should show, mark it
/// seen immediately. Returns the initial state.
///
/// Without a store the flag can neither be read nor written, so the dialog
/// shows on every load.
pub fn open_on_load<S: KeyValueStore + ?Sized>(store: Option<&S>, key: &str) -> WelcomeState {
    let flag = storage::read(store, key);
    if !should_auto_show(flag.as_deref()) {
        return WelcomeState::default();
    }
    storage::write(store, key, SEEN_VALUE);
    WelcomeState { visible: true }
}
