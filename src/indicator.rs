//! Sliding highlight under the active nav button.

use crate::geometry::{self, IndicatorGeometry};
use crate::probe::LayoutProbe;
use tracing::trace;

#[derive(Default)]
/// Holds the last geometry applied to the indicator.
pub struct IndicatorPositioner {
    geometry: Option<IndicatorGeometry>,
}

impl IndicatorPositioner {
    #[must_use]
    /// Creates a positioner that has not placed the indicator yet.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Geometry from the last successful reposition, if any.
    pub fn geometry(&self) -> Option<IndicatorGeometry> {
        self.geometry
    }

    /// Aligns the indicator with the button for `active`.
    ///
    /// When the button or the container is not laid out the previous geometry is kept and
    /// `false` is returned; the next scroll, resize or section change tries again.
    pub fn reposition(&mut self, active: &str, probe: &impl LayoutProbe) -> bool {
        let (Some(button), Some(container)) =
            (probe.button_bounds(active), probe.container_bounds())
        else {
            trace!(%active, "Nav button not measurable; indicator left as is");
            return false;
        };

        self.geometry = Some(geometry::align_to(button, container));
        true
    }
}
