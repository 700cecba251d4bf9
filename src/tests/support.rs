//! Hand-built layouts for exercising the tracker and indicator without a terminal.

use crate::geometry::{HorizontalBounds, VerticalBounds};
use crate::probe::LayoutProbe;
use std::cell::Cell;
use std::collections::HashMap;

/// Layout with boxes set directly by the test.
pub struct MockProbe {
    pub viewport_height: f64,
    pub sections: HashMap<String, VerticalBounds>,
    pub buttons: HashMap<String, HorizontalBounds>,
    pub container: Option<HorizontalBounds>,
    /// Number of measurement passes, counted by viewport height reads.
    pub passes: Cell<usize>,
}

impl MockProbe {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            sections: HashMap::new(),
            buttons: HashMap::new(),
            container: None,
            passes: Cell::new(0),
        }
    }

    pub fn section(mut self, id: &str, top: f64, bottom: f64) -> Self {
        self.sections
            .insert(id.to_string(), VerticalBounds { top, bottom });
        self
    }

    pub fn button(mut self, id: &str, left: f64, width: f64) -> Self {
        self.buttons
            .insert(id.to_string(), HorizontalBounds { left, width });
        self
    }

    pub fn container(mut self, left: f64, width: f64) -> Self {
        self.container = Some(HorizontalBounds { left, width });
        self
    }

    /// Moves every section up by `rows`, as scrolling the page down would.
    pub fn scroll(&mut self, rows: f64) {
        for bounds in self.sections.values_mut() {
            bounds.top -= rows;
            bounds.bottom -= rows;
        }
    }
}

impl LayoutProbe for MockProbe {
    fn viewport_height(&self) -> f64 {
        self.passes.set(self.passes.get() + 1);
        self.viewport_height
    }

    fn section_bounds(&self, id: &str) -> Option<VerticalBounds> {
        self.sections.get(id).copied()
    }

    fn button_bounds(&self, id: &str) -> Option<HorizontalBounds> {
        self.buttons.get(id).copied()
    }

    fn container_bounds(&self) -> Option<HorizontalBounds> {
        self.container
    }
}

pub fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Sections A/B/C stacked down a 2000-row page, seen through an 800-row viewport.
pub fn abc_probe() -> MockProbe {
    MockProbe::new(800.0)
        .section("a", 0.0, 500.0)
        .section("b", 500.0, 1200.0)
        .section("c", 1200.0, 2000.0)
        .button("a", 110.0, 60.0)
        .button("b", 180.0, 90.0)
        .button("c", 280.0, 70.0)
        .container(100.0, 400.0)
}
