use super::*;

// =============================================================
// Links
// =============================================================

#[test]
fn nested_project_pages_use_parent_prefix() {
    assert_eq!(link_prefix("/projects/raytracer.html", "/projects/"), "../");
    assert_eq!(link_prefix("/site/projects/a.html", "/projects/"), "../");
}

#[test]
fn root_pages_use_no_prefix() {
    assert_eq!(link_prefix("/", "/projects/"), "");
    assert_eq!(link_prefix("/index.html", "/projects/"), "");
    assert_eq!(link_prefix("/projects.html", "/projects/"), "");
}

#[test]
fn empty_segment_never_matches() {
    assert_eq!(link_prefix("/projects/a.html", ""), "");
}

#[test]
fn four_links_in_fixed_order() {
    let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
    assert_eq!(labels, ["Home", "Work", "Contact", "Resume"]);
}

#[test]
fn hrefs_carry_prefix() {
    let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href("../")).collect();
    assert_eq!(
        hrefs,
        ["../index.html#home", "../index.html#projects", "../index.html#contact", "../index.html#resume"]
    );
    assert_eq!(NAV_LINKS[0].href(""), "index.html#home");
}

#[test]
fn link_text_includes_icon() {
    assert_eq!(NAV_LINKS[1].text(), "\u{1f4bc} Work");
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn starts_closed_with_hidden_panel() {
    let state = NavState::default();
    assert!(!state.open);
    assert_eq!(state.aria_expanded(), "false");
    assert_eq!(state.panel_aria_hidden(), "true");
}

#[test]
fn toggle_opens_then_closes() {
    let closed = NavState::default();
    let open = closed.apply(NavEvent::ToggleClicked);
    assert!(open.open);
    assert_eq!(open.aria_expanded(), "true");
    assert_eq!(open.panel_aria_hidden(), "false");

    let again = open.apply(NavEvent::ToggleClicked);
    assert_eq!(again, closed);
    assert_eq!(again.aria_expanded(), "false");
    assert_eq!(again.panel_aria_hidden(), "true");
}

#[test]
fn link_click_closes_like_toggle() {
    let open = NavState { open: true };
    assert_eq!(open.apply(NavEvent::PanelClicked { on_link: true }), open.apply(NavEvent::ToggleClicked));
}

#[test]
fn non_link_panel_click_keeps_state() {
    let open = NavState { open: true };
    assert_eq!(open.apply(NavEvent::PanelClicked { on_link: false }), open);
}

#[test]
fn link_click_on_closed_panel_stays_closed() {
    let closed = NavState::default();
    assert_eq!(closed.apply(NavEvent::PanelClicked { on_link: true }), closed);
}

#[test]
fn containers_are_independent() {
    let a = NavState::default().apply(NavEvent::ToggleClicked);
    let b = NavState::default();
    assert!(a.open);
    assert!(!b.open);
}
