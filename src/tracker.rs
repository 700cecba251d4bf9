//! Keeps track of which page section is "in view".
//!
//! The registered ids are fixed when the page is loaded, and the active id is always one of
//! them. A recomputation measures every section it can find and moves the active id to the
//! one nearest the viewport centre.

use crate::geometry;
use crate::probe::LayoutProbe;
use tracing::{debug, trace};

/// Owner of the active section id for a fixed, ordered set of sections.
pub struct SectionTracker {
    ids: Vec<String>,
    active: usize,
}

impl SectionTracker {
    #[must_use]
    /// Registers `ids` in page order, starting with the first one active.
    ///
    /// Returns `None` for an empty list since there would be nothing to make active.
    pub fn new(ids: Vec<String>) -> Option<Self> {
        if ids.is_empty() {
            None
        } else {
            Some(Self { ids, active: 0 })
        }
    }

    #[must_use]
    /// Id of the section currently considered active.
    pub fn active(&self) -> &str {
        &self.ids[self.active]
    }

    #[must_use]
    /// All registered ids in registration order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Re-measures every registered section and updates the active id.
    ///
    /// Sections the probe cannot measure are left out of this pass. If none can be measured
    /// the active id stays put. Returns `true` only when the active id actually changed.
    pub fn recompute(&mut self, probe: &impl LayoutProbe) -> bool {
        let viewport_height = probe.viewport_height();
        let candidates = self.ids.iter().filter_map(|id| {
            let bounds = probe.section_bounds(id);
            if bounds.is_none() {
                trace!(%id, "Section not laid out; skipping");
            }
            bounds.map(|b| (id.as_str(), b))
        });

        let Some(winner) = geometry::measure(candidates, viewport_height) else {
            return false;
        };
        let Some(index) = self.ids.iter().position(|id| id == winner) else {
            return false;
        };

        if index == self.active {
            return false;
        }

        debug!(from = %self.ids[self.active], to = %winner, "Active section changed");
        self.active = index;
        true
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
