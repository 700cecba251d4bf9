//! Page controller tying the section tracker, the nav indicator and the frame scheduler together.
//!
//! The controller owns the active section id for the lifetime of a mounted page. Input handlers
//! only report that something scrolled or resized; the actual measuring happens once per frame
//! in [`PageController::on_frame`], against whatever layout that frame produced.

use crate::geometry::IndicatorGeometry;
use crate::indicator::IndicatorPositioner;
use crate::probe::LayoutProbe;
use crate::scheduler::FrameScheduler;
use crate::tracker::SectionTracker;
use tracing::{debug, info};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Where the controller is in its lifecycle.
///
/// ```text
/// Created -> Mounted -> Settled -> TornDown
///               |                     ^
///               |_____________________|
///                (unmount before settle)
/// ```
pub enum Phase {
    /// Constructed but not yet attached to a layout; events are ignored.
    Created,
    /// Listening for events, with the post-mount settle still to run.
    Mounted,
    /// Listening for events after the first layout has settled.
    Settled,
    /// Detached; events are ignored and nothing is pending.
    TornDown,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
/// What a single frame ended up doing.
pub struct FrameReport {
    /// A pending recomputation of the active section ran.
    pub recomputed: bool,
    /// The active section changed during this frame.
    pub changed: bool,
    /// The indicator geometry was updated from fresh measurements.
    pub repositioned: bool,
}

/// State owned by a mounted page: active section, indicator placement and pending frame work.
pub struct PageController {
    tracker: SectionTracker,
    indicator: IndicatorPositioner,
    frame: FrameScheduler,
    resize_pending: bool,
    phase: Phase,
}

impl PageController {
    #[must_use]
    /// Creates a controller for the sections `ids`, in page order.
    ///
    /// Returns `None` when `ids` is empty.
    pub fn new(ids: Vec<String>) -> Option<Self> {
        Some(Self {
            tracker: SectionTracker::new(ids)?,
            indicator: IndicatorPositioner::new(),
            frame: FrameScheduler::new(),
            resize_pending: false,
            phase: Phase::Created,
        })
    }

    #[must_use]
    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    /// Id of the active section.
    pub fn active(&self) -> &str {
        self.tracker.active()
    }

    #[must_use]
    /// Registered section ids in page order.
    pub fn section_ids(&self) -> &[String] {
        self.tracker.ids()
    }

    #[must_use]
    /// Last applied indicator geometry.
    pub fn indicator(&self) -> Option<IndicatorGeometry> {
        self.indicator.geometry()
    }

    fn is_listening(&self) -> bool {
        matches!(self.phase, Phase::Mounted | Phase::Settled)
    }

    /// Attaches the controller to its first layout.
    ///
    /// Computes the active section straight away and leaves the indicator for [`Self::settle`],
    /// which runs once the first frame has been drawn. Mounting twice is a no-op.
    pub fn mount(&mut self, probe: &impl LayoutProbe) {
        if self.phase != Phase::Created {
            return;
        }
        self.tracker.recompute(probe);
        self.phase = Phase::Mounted;
        info!(
            sections = self.tracker.ids().len(),
            active = %self.tracker.active(),
            "Page mounted"
        );
    }

    /// Post-mount layout settle: places the indicator against the first drawn layout.
    ///
    /// Runs at most once, and never after an unmount. Returns whether the indicator was placed.
    pub fn settle(&mut self, probe: &impl LayoutProbe) -> bool {
        if self.phase != Phase::Mounted {
            return false;
        }
        self.phase = Phase::Settled;
        let placed = self.indicator.reposition(self.tracker.active(), probe);
        debug!(placed, "Initial layout settled");
        placed
    }

    /// Notes a scroll. Returns `true` if this scheduled a new frame of work.
    pub fn on_scroll(&mut self) -> bool {
        self.is_listening() && self.frame.request()
    }

    /// Notes a resize: recompute the active section and re-place the indicator next frame.
    ///
    /// Returns `true` if this scheduled a new frame of work.
    pub fn on_resize(&mut self) -> bool {
        if !self.is_listening() {
            return false;
        }
        self.resize_pending = true;
        self.frame.request()
    }

    /// Runs the work pending for this frame against the layout it produced.
    ///
    /// A section change re-places the indicator in the same call, before anything is drawn.
    pub fn on_frame(&mut self, probe: &impl LayoutProbe) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.is_listening() || !self.frame.take() {
            return report;
        }

        report.recomputed = true;
        report.changed = self.tracker.recompute(probe);
        let resized = std::mem::take(&mut self.resize_pending);
        if report.changed || resized {
            report.repositioned = self.indicator.reposition(self.tracker.active(), probe);
        }
        report
    }

    /// Detaches the controller: stops listening and drops pending work, including an unrun
    /// settle.
    pub fn unmount(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.frame.cancel();
        self.resize_pending = false;
        self.phase = Phase::TornDown;
        info!("Page unmounted");
    }
}

#[cfg(test)]
#[path = "tests/controller.rs"]
mod tests;
