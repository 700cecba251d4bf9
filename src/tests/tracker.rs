use super::SectionTracker;
use crate::support::{abc_probe, ids, MockProbe};

#[test]
fn test_empty_section_list_is_rejected() {
    assert!(SectionTracker::new(Vec::new()).is_none());
}

#[test]
fn test_first_section_active_before_measuring() {
    let tracker = SectionTracker::new(ids(&["about", "skills"])).unwrap();
    assert_eq!(tracker.active(), "about");
}

#[test]
fn test_active_is_always_registered() {
    let mut tracker = SectionTracker::new(ids(&["a", "b", "c"])).unwrap();
    let mut probe = abc_probe();

    for _ in 0..40 {
        tracker.recompute(&probe);
        assert!(tracker.ids().iter().any(|id| id == tracker.active()));
        probe.scroll(75.0);
    }
}

#[test]
fn test_scroll_scenario_moves_from_a_to_b() {
    let mut tracker = SectionTracker::new(ids(&["a", "b", "c"])).unwrap();
    let mut probe = abc_probe();

    assert!(!tracker.recompute(&probe));
    assert_eq!(tracker.active(), "a");

    probe.scroll(400.0);
    assert!(tracker.recompute(&probe));
    assert_eq!(tracker.active(), "b");
}

#[test]
fn test_recompute_is_idempotent() {
    let mut tracker = SectionTracker::new(ids(&["a", "b", "c"])).unwrap();
    let mut probe = abc_probe();
    probe.scroll(1000.0);

    assert!(tracker.recompute(&probe), "first pass moves to c");
    assert_eq!(tracker.active(), "c");
    assert!(!tracker.recompute(&probe), "second pass changes nothing");
    assert_eq!(tracker.active(), "c");
}

#[test]
fn test_unmeasured_sections_are_skipped() {
    let mut tracker = SectionTracker::new(ids(&["a", "b", "c"])).unwrap();
    // "b" would contain the center, but it is not laid out
    let probe = MockProbe::new(800.0)
        .section("a", -400.0, 100.0)
        .section("c", 800.0, 1600.0);

    tracker.recompute(&probe);
    assert_eq!(tracker.active(), "a");
}

#[test]
fn test_nothing_measured_keeps_active() {
    let mut tracker = SectionTracker::new(ids(&["a", "b", "c"])).unwrap();
    let mut probe = abc_probe();
    probe.scroll(1000.0);
    tracker.recompute(&probe);
    assert_eq!(tracker.active(), "c");

    assert!(!tracker.recompute(&MockProbe::new(800.0)));
    assert_eq!(tracker.active(), "c");
}

#[test]
fn test_unregistered_sections_are_ignored() {
    let mut tracker = SectionTracker::new(ids(&["a", "b"])).unwrap();
    let probe = MockProbe::new(800.0)
        .section("a", 0.0, 100.0)
        .section("b", 900.0, 1000.0)
        .section("stray", 0.0, 800.0);

    tracker.recompute(&probe);
    assert_eq!(tracker.active(), "a");
}
