//! Feature initializers wired by the page controller.
//!
//! ARCHITECTURE
//! ============
//! Every feature is an independent unit with an `init(&PageContext)` entry
//! point. Initializers share nothing but the root element and the store, so
//! they can run in any order; a missing element or API only disables the
//! feature that needed it.


#[cfg(feature = "hydrate")]
pub mod click_audio;
#[cfg(feature = "hydrate")]
pub mod mobile_nav;
#[cfg(feature = "hydrate")]
pub mod reveal;
#[cfg(feature = "hydrate")]
pub mod scroll_effects;
#[cfg(feature = "hydrate")]
pub mod theme_toggle;
#[cfg(feature = "hydrate")]
pub mod welcome_modal;

use crate::config::SiteConfig;

/// Outcome of a successful `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wiring {
    /// Listeners attached.
    Active,
    /// Nothing to wire on this page.
    Skipped(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureId {
    Theme,
    ClickAudio,
    MobileNav,
    ScrollEffects,
    Reveal,
    WelcomeModal,
}

impl FeatureId {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::ClickAudio => "click-audio",
            Self::MobileNav => "mobile-nav",
            Self::ScrollEffects => "scroll-effects",
            Self::Reveal => "reveal",
            Self::WelcomeModal => "welcome-modal",
        }
    }

    /// Features to wire for `config`, in initialization order.
    #[must_use]
    pub fn enabled(config: &SiteConfig) -> Vec<Self> {
        let mut features = vec![Self::Theme];
        if config.click_audio {
            features.push(Self::ClickAudio);
        }
        features.extend([Self::MobileNav, Self::ScrollEffects, Self::Reveal, Self::WelcomeModal]);
        features
    }

    #[cfg(feature = "hydrate")]
    pub fn init(self, ctx: &crate::app::PageContext) -> Result<Wiring, crate::error::BehaviorError> {
        match self {
            Self::Theme => theme_toggle::init(ctx),
            Self::ClickAudio => click_audio::init(ctx),
            Self::MobileNav => mobile_nav::init(ctx),
            Self::ScrollEffects => scroll_effects::init(ctx),
            Self::Reveal => reveal::init(ctx),
            Self::WelcomeModal => welcome_modal::init(ctx),
        }
    }
}
