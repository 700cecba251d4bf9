//! The measurement seam between the page mechanisms and whatever draws the page.
//!
//! The tracker and the indicator never look at terminal state directly. They ask a probe for
//! boxes, and a probe answers `None` for anything that is not laid out at the moment.

use crate::geometry::{HorizontalBounds, VerticalBounds};

/// Live layout measurements for one frame.
pub trait LayoutProbe {
    /// Height of the scrolling viewport in rows.
    fn viewport_height(&self) -> f64;

    /// Vertical extent of the section `id` relative to the top of the viewport.
    fn section_bounds(&self, id: &str) -> Option<VerticalBounds>;

    /// Horizontal extent of the nav button for section `id`.
    fn button_bounds(&self, id: &str) -> Option<HorizontalBounds>;

    /// Horizontal extent of the container all nav buttons share.
    fn container_bounds(&self) -> Option<HorizontalBounds>;
}
