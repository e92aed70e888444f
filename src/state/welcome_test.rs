use super::*;
use crate::util::storage::MemoryStore;

const KEY: &str = "hasSeenWelcomeModal";

#[test]
fn shows_only_when_flag_is_not_exactly_true() {
    assert!(should_auto_show(None));
    assert!(should_auto_show(Some("false")));
    assert!(should_auto_show(Some("TRUE")));
    assert!(should_auto_show(Some("")));
    assert!(!should_auto_show(Some("true")));
}

#[test]
fn first_load_shows_and_sets_flag() {
    let store = MemoryStore::new();
    let state = open_on_load(Some(&store), KEY);
    assert!(state.visible);
    assert_eq!(state.aria_hidden(), "false");
    assert_eq!(store.get_item(KEY).as_deref(), Some("true"));
}

#[test]
fn subsequent_load_does_not_show() {
    let store = MemoryStore::new();
    assert!(open_on_load(Some(&store), KEY).visible);
    let second = open_on_load(Some(&store), KEY);
    assert!(!second.visible);
    assert_eq!(second.aria_hidden(), "true");
}

#[test]
fn stale_flag_value_is_overwritten() {
    let store = MemoryStore::with_items([(KEY, "yes")]);
    assert!(open_on_load(Some(&store), KEY).visible);
    assert_eq!(store.get_item(KEY).as_deref(), Some("true"));
}

#[test]
fn missing_store_always_shows() {
    assert!(open_on_load::<MemoryStore>(None, KEY).visible);
    assert!(open_on_load::<MemoryStore>(None, KEY).visible);
}

#[test]
fn escape_hides_visible_dialog() {
    let open = WelcomeState { visible: true };
    let next = open.apply(&ModalEvent::KeyDown { key: "Escape".to_owned() });
    assert!(!next.visible);
}

#[test]
fn other_keys_do_nothing() {
    let open = WelcomeState { visible: true };
    assert_eq!(open.apply(&ModalEvent::KeyDown { key: "Enter".to_owned() }), open);
    assert_eq!(open.apply(&ModalEvent::KeyDown { key: "Esc".to_owned() }), open);
}

#[test]
fn close_marker_click_hides() {
    let open = WelcomeState { visible: true };
    assert!(!open.apply(&ModalEvent::Click { has_close_marker: true }).visible);
}

#[test]
fn click_inside_content_keeps_dialog_open() {
    let open = WelcomeState { visible: true };
    assert_eq!(open.apply(&ModalEvent::Click { has_close_marker: false }), open);
}

#[test]
fn dismissing_hidden_dialog_is_a_no_op() {
    let hidden = WelcomeState::default();
    assert_eq!(hidden.apply(&ModalEvent::KeyDown { key: "Escape".to_owned() }), hidden);
}
