//! Pure layout math behind the section tracker and the nav indicator.
//!
//! Nothing here touches the terminal. Callers hand in boxes they have already measured, which
//! keeps both rules testable with plain numbers.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Vertical extent of a page section in viewport coordinates.
///
/// Rows above the viewport are negative, so `top` may be below zero once the page has scrolled.
pub struct VerticalBounds {
    /// First row covered by the section.
    pub top: f64,
    /// Row where the section stops (the next section's top).
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Horizontal extent of a nav button or of the container holding the buttons.
pub struct HorizontalBounds {
    /// Leftmost column, in screen coordinates.
    pub left: f64,
    /// Width in columns.
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// Placement of the sliding highlight under the active nav button.
pub struct IndicatorGeometry {
    /// Width of the highlight, equal to the active button's width.
    pub width: f64,
    /// Horizontal translation from the container's left edge.
    pub offset_x: f64,
}

impl VerticalBounds {
    #[must_use]
    /// Distance from this section to a horizontal reference line.
    ///
    /// Zero when the line falls inside the section, otherwise the gap to the nearer edge.
    pub fn distance_to(&self, line: f64) -> f64 {
        if self.top <= line && line <= self.bottom {
            0.0
        } else {
            (self.top - line).abs().min((self.bottom - line).abs())
        }
    }
}

#[must_use]
/// Picks the section nearest the vertical centre of a viewport `viewport_height` rows tall.
///
/// Sections containing the centre win with distance zero. Ties keep the earliest candidate, so
/// the iteration order of `sections` decides between equidistant sections. Returns `None` only
/// when `sections` yields nothing with a finite distance.
pub fn measure<'a, I>(sections: I, viewport_height: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, VerticalBounds)>,
{
    let center = viewport_height / 2.0;
    let mut best = None;
    let mut min_distance = f64::INFINITY;

    for (id, bounds) in sections {
        let distance = bounds.distance_to(center);
        if distance < min_distance {
            min_distance = distance;
            best = Some(id);
        }
    }

    best
}

#[must_use]
/// Geometry that lines the indicator up with `button` inside `container`.
pub fn align_to(button: HorizontalBounds, container: HorizontalBounds) -> IndicatorGeometry {
    IndicatorGeometry {
        width: button.width,
        offset_x: button.left - container.left,
    }
}

#[cfg(test)]
#[path = "tests/geometry.rs"]
mod tests;
