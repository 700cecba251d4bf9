#![allow(clippy::float_cmp)]

use super::{FrameReport, PageController, Phase};
use crate::geometry::IndicatorGeometry;
use crate::scheduler::FrameScheduler;
use crate::support::{abc_probe, ids, MockProbe};

fn mounted() -> (PageController, MockProbe) {
    let mut controller = PageController::new(ids(&["a", "b", "c"])).unwrap();
    let probe = abc_probe();
    controller.mount(&probe);
    (controller, probe)
}

#[test]
fn test_scheduler_keeps_one_slot() {
    let mut frame = FrameScheduler::new();
    assert!(frame.request());
    assert!(!frame.request());
    assert!(frame.is_pending());
    assert!(frame.take());
    assert!(!frame.take());
    assert!(frame.request());
    frame.cancel();
    assert!(!frame.take());
}

#[test]
fn test_mount_computes_active_and_defers_indicator() {
    let mut controller = PageController::new(ids(&["a", "b", "c"])).unwrap();
    let mut probe = abc_probe();
    probe.scroll(400.0);

    controller.mount(&probe);
    assert_eq!(controller.phase(), Phase::Mounted);
    assert_eq!(controller.active(), "b");
    assert!(controller.indicator().is_none());

    assert!(controller.settle(&probe));
    assert_eq!(controller.phase(), Phase::Settled);
    assert_eq!(
        controller.indicator(),
        Some(IndicatorGeometry {
            width: 90.0,
            offset_x: 80.0,
        })
    );
}

#[test]
fn test_settle_runs_once() {
    let (mut controller, probe) = mounted();
    assert!(controller.settle(&probe));
    assert!(!controller.settle(&probe));
}

#[test]
fn test_events_before_mount_are_ignored() {
    let mut controller = PageController::new(ids(&["a", "b"])).unwrap();
    assert!(!controller.on_scroll());
    assert!(!controller.on_resize());
    assert_eq!(controller.on_frame(&abc_probe()), FrameReport::default());
}

#[test]
fn test_scroll_burst_coalesces_into_one_pass() {
    let (mut controller, probe) = mounted();
    controller.settle(&probe);
    probe.passes.set(0);

    assert!(controller.on_scroll());
    for _ in 0..24 {
        assert!(!controller.on_scroll());
    }
    let report = controller.on_frame(&probe);

    assert!(report.recomputed);
    assert_eq!(probe.passes.get(), 1);

    // Nothing pending for the following frame
    assert_eq!(controller.on_frame(&probe), FrameReport::default());
    assert_eq!(probe.passes.get(), 1);
}

#[test]
fn test_section_change_moves_indicator_in_same_frame() {
    let (mut controller, mut probe) = mounted();
    controller.settle(&probe);
    assert_eq!(controller.indicator().unwrap().offset_x, 10.0);

    probe.scroll(400.0);
    controller.on_scroll();
    let report = controller.on_frame(&probe);

    assert!(report.changed);
    assert!(report.repositioned);
    assert_eq!(controller.active(), "b");
    let geometry = controller.indicator().unwrap();
    assert_eq!(geometry.width, 90.0);
    assert_eq!(geometry.offset_x, 80.0);
}

#[test]
fn test_unchanged_section_leaves_indicator_alone() {
    let (mut controller, mut probe) = mounted();
    controller.settle(&probe);

    probe.scroll(50.0);
    controller.on_scroll();
    let report = controller.on_frame(&probe);

    assert!(report.recomputed);
    assert!(!report.changed);
    assert!(!report.repositioned);
}

#[test]
fn test_resize_repositions_without_section_change() {
    let (mut controller, mut probe) = mounted();
    controller.settle(&probe);

    // Container recentred on a wider terminal; buttons moved with it
    probe = probe
        .container(300.0, 400.0)
        .button("a", 310.0, 60.0)
        .button("b", 380.0, 90.0)
        .button("c", 480.0, 70.0);
    assert!(controller.on_resize());
    let report = controller.on_frame(&probe);

    assert!(!report.changed);
    assert!(report.repositioned);
    assert_eq!(
        controller.indicator(),
        Some(IndicatorGeometry {
            width: 60.0,
            offset_x: 10.0,
        })
    );
}

#[test]
fn test_missing_button_skips_then_recovers() {
    let (mut controller, probe) = mounted();
    controller.settle(&probe);
    let before = controller.indicator();

    // Scroll into "b" while its button is gone
    let mut without_b = MockProbe::new(800.0)
        .section("a", 0.0, 500.0)
        .section("b", 500.0, 1200.0)
        .section("c", 1200.0, 2000.0)
        .button("a", 110.0, 60.0)
        .button("c", 280.0, 70.0)
        .container(100.0, 400.0);
    without_b.scroll(400.0);
    controller.on_scroll();
    let report = controller.on_frame(&without_b);

    assert!(report.changed);
    assert!(!report.repositioned);
    assert_eq!(controller.active(), "b");
    assert_eq!(controller.indicator(), before);

    // The button is back; the next resize picks it up
    let mut restored = abc_probe();
    restored.scroll(400.0);
    controller.on_resize();
    let report = controller.on_frame(&restored);

    assert!(report.repositioned);
    assert_eq!(controller.indicator().unwrap().offset_x, 80.0);
}

#[test]
fn test_missing_container_is_not_an_error() {
    let mut controller = PageController::new(ids(&["a"])).unwrap();
    let probe = MockProbe::new(20.0)
        .section("a", 0.0, 30.0)
        .button("a", 1.0, 5.0);
    controller.mount(&probe);
    assert!(!controller.settle(&probe));
    assert!(controller.indicator().is_none());
}

#[test]
fn test_unmount_cancels_pending_work() {
    let (mut controller, mut probe) = mounted();
    controller.on_scroll();
    controller.unmount();
    assert_eq!(controller.phase(), Phase::TornDown);

    // The settle never fired and no longer will
    assert!(!controller.settle(&probe));
    assert!(controller.indicator().is_none());

    probe.scroll(400.0);
    assert!(!controller.on_scroll());
    assert_eq!(controller.on_frame(&probe), FrameReport::default());
    assert_eq!(controller.active(), "a");
}
