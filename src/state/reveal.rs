//! One-shot reveal animation tracking.
//!
//! Sections are marked for animation up front and revealed the first time
//! they intersect the (bottom-inset) viewport. A revealed element is never
//! hidden again and is dropped from observation.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction required before an element counts as intersecting.
    pub threshold: f64,
    /// How far the viewport's bottom edge is pulled in, in percent.
    pub bottom_margin_percent: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.2, bottom_margin_percent: 8.0 }
    }
}

impl RevealOptions {
    /// `rootMargin` string for `IntersectionObserverInit`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_percent <= 0.0 {
            return "0px 0px 0px 0px".to_owned();
        }
        format!("0px 0px -{}% 0px", self.bottom_margin_percent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the visible class and stop observing.
    Reveal,
    /// Nothing to do for this entry.
    Ignore,
}

/// Per-element reveal flags, indexed in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Every element has been revealed; the observer can be disconnected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// Feed one intersection observation.
    ///
    /// Only the first intersecting observation of an element reveals it.
    /// Leaving the viewport afterwards never reverts the flag.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> RevealAction {
        let Some(slot) = self.revealed.get_mut(index) else {
            return RevealAction::Ignore;
        };
        if *slot || !is_intersecting {
            return RevealAction::Ignore;
        }
        *slot = true;
        RevealAction::Reveal
    }

    /// Fallback when intersection observation is unsupported.
    pub fn reveal_all(&mut self) {
        self.revealed.fill(true);
    }
}
