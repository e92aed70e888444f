//! Site configuration: selectors, class names, storage keys, and tuning.
//!
//! Defaults match the markup the site ships with. A page may override any
//! subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-behavior-config">
//!   { "reveal": { "targets": [".hero", ".section"] }, "click_audio": true }
//! </script>
//! ```
//!
//! Unknown fields are ignored and missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use serde::Deserialize;

use crate::error::BehaviorError;

/// Id of the inline `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-behavior-config";

/// Class added to `<body>` once the controller has run.
pub const READY_CLASS: &str = "is-ready";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub storage: StorageKeys,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub welcome: WelcomeConfig,
    /// Short beep on every click. Off unless a page opts in.
    pub click_audio: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub welcome_seen: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { theme: "theme".to_owned(), welcome_seen: "hasSeenWelcomeModal".to_owned() }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_selector: String,
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { toggle_selector: ".theme-toggle".to_owned(), attribute: "data-theme".to_owned() }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavConfig {
    pub container_selector: String,
    pub toggle_selector: String,
    pub panel_class: String,
    pub open_class: String,
    /// Path fragment marking pages one directory below the site root.
    pub nested_segment: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            container_selector: ".site-nav".to_owned(),
            toggle_selector: ".nav-toggle".to_owned(),
            panel_class: "mobile-nav".to_owned(),
            open_class: "is-open".to_owned(),
            nested_segment: "/projects/".to_owned(),
        }
    }
}

impl NavConfig {
    #[must_use]
    pub fn panel_selector(&self) -> String {
        format!(".{}", self.panel_class)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub progress_var: String,
    pub parallax_var: String,
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            progress_var: "--scroll-progress".to_owned(),
            parallax_var: "--parallax-offset".to_owned(),
            parallax_factor: -0.03,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub targets: Vec<String>,
    pub marker_attribute: String,
    pub visible_class: String,
    pub threshold: f64,
    pub bottom_margin_percent: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            targets: [".hero", ".section", ".project-card", ".timeline-item", ".contact-card"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            marker_attribute: "data-animate".to_owned(),
            visible_class: "is-visible".to_owned(),
            threshold: 0.2,
            bottom_margin_percent: 8.0,
        }
    }
}

impl RevealConfig {
    /// Comma-joined selector list for a single `querySelectorAll` call.
    #[must_use]
    pub fn target_selector(&self) -> String {
        self.targets.join(", ")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WelcomeConfig {
    pub modal_selector: String,
    pub close_selector: String,
    pub close_marker: String,
    pub visible_class: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            modal_selector: ".welcome-modal".to_owned(),
            close_selector: ".welcome-modal__close".to_owned(),
            close_marker: "data-modal-close".to_owned(),
            visible_class: "is-visible".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides from the inline JSON block.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    /// Resolve the effective config from the optional inline block.
    ///
    /// Blank or missing input yields defaults. A parse failure also yields
    /// defaults, returned alongside the error so the caller can log it.
    pub fn resolve(raw: Option<&str>) -> (Self, Option<BehaviorError>) {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }

    /// Clamp tuning values into ranges the browser APIs accept.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let reveal_defaults = RevealConfig::default();
        self.reveal.threshold = finite_or(self.reveal.threshold, reveal_defaults.threshold).clamp(0.0, 1.0);
        self.reveal.bottom_margin_percent =
            finite_or(self.reveal.bottom_margin_percent, reveal_defaults.bottom_margin_percent).clamp(0.0, 100.0);
        self.scroll.parallax_factor = finite_or(self.scroll.parallax_factor, ScrollConfig::default().parallax_factor);
        self
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
