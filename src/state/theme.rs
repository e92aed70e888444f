//! Light/dark theme preference.
//!
//! The active theme is mirrored on the root element's `data-theme`
//! attribute and persisted under the `theme` storage key. Anything other
//! than an exact `"light"` or `"dark"` reads as light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::{self, KeyValueStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored or attribute value. Only exact matches are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Parse with the light fallback applied.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// `aria-pressed` value for the toggle button; pressed means dark.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }

    /// Glyph shown on the toggle: the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark() { "\u{2600}\u{fe0f}" } else { "\u{1f31c}" }
    }

    /// Accessible label for the toggle.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        if self.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
    }
}

/// Load the persisted theme, defaulting to light.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: Option<&S>, key: &str) -> Theme {
    Theme::from_stored(storage::read(store, key).as_deref())
}

/// Persist `theme` under `key`.
pub fn store_theme<S: KeyValueStore + ?Sized>(store: Option<&S>, key: &str, theme: Theme) {
    storage::write(store, key, theme.as_str());
}
