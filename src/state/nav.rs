//! Mobile navigation panel state and generated links.
//!
//! Each `.site-nav` container owns an independent `NavState`. The open flag
//! is carried on the container as a class; the toggle's `aria-expanded` and
//! the panel's `aria-hidden` are derived from it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One entry in the injected mobile panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub icon: &'static str,
    pub label: &'static str,
    /// Target relative to the site root.
    pub path: &'static str,
}

impl NavLink {
    /// Text content of the rendered anchor.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }

    /// `href` with the page-relative prefix applied.
    #[must_use]
    pub fn href(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.path)
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { icon: "\u{1f3e0}", label: "Home", path: "index.html#home" },
    NavLink { icon: "\u{1f4bc}", label: "Work", path: "index.html#projects" },
    NavLink { icon: "\u{1f4de}", label: "Contact", path: "index.html#contact" },
    NavLink { icon: "\u{1f4c4}", label: "Resume", path: "index.html#resume" },
];

/// Relative prefix for generated links: pages under the nested segment sit
/// one directory below the root.
#[must_use]
pub fn link_prefix(pathname: &str, nested_segment: &str) -> &'static str {
    if !nested_segment.is_empty() && pathname.contains(nested_segment) { "../" } else { "" }
}

/// Events that change a container's open state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The container's toggle control was clicked.
    ToggleClicked,
    /// A click landed inside the panel; `on_link` when its target is an anchor.
    PanelClicked { on_link: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// Apply `event`, returning the next state.
    #[must_use]
    pub fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::ToggleClicked => Self { open: !self.open },
            NavEvent::PanelClicked { on_link: true } => Self { open: false },
            NavEvent::PanelClicked { on_link: false } => self,
        }
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// The panel is hidden from assistive tech whenever it is closed.
    #[must_use]
    pub fn panel_aria_hidden(self) -> &'static str {
        if self.open { "false" } else { "true" }
    }
}
