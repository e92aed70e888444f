use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn parse_accepts_exact_values_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(" dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn toggle_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn dark_theme_reports_pressed_toggle() {
    assert_eq!(Theme::Dark.aria_pressed(), "true");
    assert_eq!(Theme::Light.aria_pressed(), "false");
}

#[test]
fn toggle_icon_shows_the_other_theme() {
    assert_eq!(Theme::Dark.toggle_icon(), "\u{2600}\u{fe0f}");
    assert_eq!(Theme::Light.toggle_icon(), "\u{1f31c}");
}

#[test]
fn load_without_stored_value_is_light() {
    let store = MemoryStore::new();
    assert_eq!(load_theme(Some(&store), "theme"), Theme::Light);
}

#[test]
fn load_stored_dark() {
    let store = MemoryStore::with_items([("theme", "dark")]);
    let theme = load_theme(Some(&store), "theme");
    assert_eq!(theme, Theme::Dark);
    assert_eq!(theme.aria_pressed(), "true");
}

#[test]
fn load_invalid_value_is_light() {
    let store = MemoryStore::with_items([("theme", "blue")]);
    assert_eq!(load_theme(Some(&store), "theme"), Theme::Light);
}

#[test]
fn load_without_store_is_light() {
    assert_eq!(load_theme::<MemoryStore>(None, "theme"), Theme::Light);
}

#[test]
fn store_theme_persists_string_value() {
    let store = MemoryStore::new();
    store_theme(Some(&store), "theme", Theme::Dark);
    assert_eq!(store.get_item("theme").as_deref(), Some("dark"));
    store_theme(Some(&store), "theme", Theme::Dark.toggled());
    assert_eq!(store.get_item("theme").as_deref(), Some("light"));
}
