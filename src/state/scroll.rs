//! Scroll progress and parallax offset.
//!
//! Recomputed on every scroll/resize and written to the root element as
//! custom properties (`--scroll-progress`, `--parallax-offset`).

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const DEFAULT_PARALLAX_FACTOR: f64 = -0.03;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Fraction of the scrollable distance covered, in `[0, 1]`.
    pub progress: f64,
    /// Background offset in px; never positive.
    pub parallax: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn compute(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self::compute_with_factor(scroll_y, scroll_height, viewport_height, DEFAULT_PARALLAX_FACTOR)
    }

    #[must_use]
    pub fn compute_with_factor(scroll_y: f64, scroll_height: f64, viewport_height: f64, factor: f64) -> Self {
        let scroll_y = finite(scroll_y);
        let max_scroll = finite(scroll_height) - finite(viewport_height);
        let progress = if max_scroll > 0.0 { (scroll_y / max_scroll).clamp(0.0, 1.0) } else { 0.0 };
        let parallax = (scroll_y * finite(factor)).min(0.0);
        Self { progress, parallax }
    }

    /// `--scroll-progress` value, 4 decimals.
    #[must_use]
    pub fn progress_css(&self) -> String {
        format!("{:.4}", self.progress)
    }

    /// `--parallax-offset` value, 2 decimals in px.
    #[must_use]
    pub fn parallax_css(&self) -> String {
        // Avoid printing "-0.00px" at the top of the page.
        let parallax = if self.parallax > -0.005 { 0.0 } else { self.parallax };
        format!("{parallax:.2}px")
    }
}

fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
