//! Mobile navigation panel injected into each `.site-nav` container.

#[cfg(all(test, feature = "ssr"))]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

use leptos::prelude::*;

use crate::state::nav::NAV_LINKS;

/// Collapsed link list shown below the nav toggle on small screens.
///
/// Renders hidden (`aria-hidden="true"`); the nav controller flips the
/// attribute when the container opens.
#[component]
pub fn MobileNav(
    /// Relative prefix for every link (`"../"` on nested pages).
    prefix: &'static str,
    /// Block class of the panel; items use `{panel_class}__item`.
    #[prop(into)]
    panel_class: String,
) -> impl IntoView {
    let item_class = format!("{panel_class}__item");

    view! {
        <div class=panel_class aria-label="Mobile" aria-hidden="true">
            {NAV_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a class=item_class.clone() href=link.href(prefix)>
                            {link.text()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
