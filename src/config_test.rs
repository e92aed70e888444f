use super::*;

#[test]
fn defaults_match_shipped_markup() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.storage.theme, "theme");
    assert_eq!(cfg.storage.welcome_seen, "hasSeenWelcomeModal");
    assert_eq!(cfg.theme.toggle_selector, ".theme-toggle");
    assert_eq!(cfg.theme.attribute, "data-theme");
    assert_eq!(cfg.nav.container_selector, ".site-nav");
    assert_eq!(cfg.nav.panel_selector(), ".mobile-nav");
    assert_eq!(cfg.nav.nested_segment, "/projects/");
    assert_eq!(cfg.welcome.close_marker, "data-modal-close");
    assert!(!cfg.click_audio);
}

#[test]
fn reveal_defaults() {
    let reveal = RevealConfig::default();
    assert!((reveal.threshold - 0.2).abs() < f64::EPSILON);
    assert!((reveal.bottom_margin_percent - 8.0).abs() < f64::EPSILON);
    assert_eq!(reveal.target_selector(), ".hero, .section, .project-card, .timeline-item, .contact-card");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{ "click_audio": true, "nav": { "open_class": "open" } }"#).unwrap();
    assert!(cfg.click_audio);
    assert_eq!(cfg.nav.open_class, "open");
    assert_eq!(cfg.nav.toggle_selector, ".nav-toggle");
    assert_eq!(cfg.theme, ThemeConfig::default());
}

#[test]
fn unknown_fields_are_ignored() {
    let cfg = SiteConfig::from_json(r#"{ "sparkles": 3 }"#).unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn out_of_range_tuning_is_clamped() {
    let cfg =
        SiteConfig::from_json(r#"{ "reveal": { "threshold": 4.0, "bottom_margin_percent": -10 } }"#).unwrap();
    assert!((cfg.reveal.threshold - 1.0).abs() < f64::EPSILON);
    assert!(cfg.reveal.bottom_margin_percent.abs() < f64::EPSILON);
}

#[test]
fn resolve_missing_or_blank_is_default() {
    let (cfg, err) = SiteConfig::resolve(None);
    assert_eq!(cfg, SiteConfig::default());
    assert!(err.is_none());

    let (cfg, err) = SiteConfig::resolve(Some("   \n"));
    assert_eq!(cfg, SiteConfig::default());
    assert!(err.is_none());
}

#[test]
fn resolve_malformed_falls_back_with_error() {
    let (cfg, err) = SiteConfig::resolve(Some("{ not json"));
    assert_eq!(cfg, SiteConfig::default());
    assert!(matches!(err, Some(BehaviorError::Config(_))));
}
