use super::*;

#[test]
fn default_options() {
    let opts = RevealOptions::default();
    assert!((opts.threshold - 0.2).abs() < f64::EPSILON);
    assert_eq!(opts.root_margin(), "0px 0px -8% 0px");
}

#[test]
fn fractional_margin_is_preserved() {
    let opts = RevealOptions { threshold: 0.5, bottom_margin_percent: 12.5 };
    assert_eq!(opts.root_margin(), "0px 0px -12.5% 0px");
}

#[test]
fn zero_margin_is_plain() {
    let opts = RevealOptions { threshold: 0.0, bottom_margin_percent: 0.0 };
    assert_eq!(opts.root_margin(), "0px 0px 0px 0px");
}

#[test]
fn new_tracker_has_nothing_revealed() {
    let tracker = RevealTracker::new(3);
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.revealed_count(), 0);
    assert!(!tracker.is_complete());
}

#[test]
fn intersecting_element_reveals_once() {
    let mut tracker = RevealTracker::new(2);
    assert_eq!(tracker.observe(0, true), RevealAction::Reveal);
    assert!(tracker.is_revealed(0));
    assert_eq!(tracker.observe(0, true), RevealAction::Ignore);
    assert_eq!(tracker.revealed_count(), 1);
}

#[test]
fn non_intersecting_entry_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert_eq!(tracker.observe(0, false), RevealAction::Ignore);
    assert!(!tracker.is_revealed(0));
}

#[test]
fn leaving_viewport_never_hides() {
    let mut tracker = RevealTracker::new(1);
    tracker.observe(0, true);
    assert_eq!(tracker.observe(0, false), RevealAction::Ignore);
    assert!(tracker.is_revealed(0));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert_eq!(tracker.observe(5, true), RevealAction::Ignore);
    assert!(!tracker.is_revealed(5));
}

#[test]
fn completes_after_every_element_reveals() {
    let mut tracker = RevealTracker::new(2);
    tracker.observe(1, true);
    assert!(!tracker.is_complete());
    tracker.observe(0, true);
    assert!(tracker.is_complete());
}

#[test]
fn fallback_reveals_everything() {
    let mut tracker = RevealTracker::new(4);
    tracker.reveal_all();
    assert_eq!(tracker.revealed_count(), 4);
    assert!(tracker.is_complete());
}

#[test]
fn empty_tracker_is_trivially_complete() {
    let tracker = RevealTracker::new(0);
    assert!(tracker.is_empty());
    assert!(tracker.is_complete());
}
