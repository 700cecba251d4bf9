//! The state a running page viewer keeps between frames.
//!
//! The page itself never changes once loaded. What moves is the scroll offset, driven by keys
//! and the mouse wheel, and the controller's view of which section that offset puts in the
//! middle of the screen. Every scroll goes through [`AppState::scroll_to`] so the controller
//! hears about it.

use crate::controller::{FrameReport, PageController};
use crate::page::PageLayout;
use crate::section::Page;

/// Scroll position, section tracking and quit state for one page.
pub struct AppState {
    /// Loaded portfolio page.
    pub page: Page,
    /// Rows the body is scrolled by.
    pub scroll: u16,
    /// Active section tracking and indicator placement.
    pub controller: PageController,
    /// Set when the user asked to leave.
    pub should_quit: bool,
}

impl AppState {
    #[must_use]
    /// Wraps a loaded page. Returns `None` when the page has no sections.
    pub fn new(page: Page) -> Option<Self> {
        let controller = PageController::new(page.section_ids())?;
        Some(Self {
            page,
            scroll: 0,
            controller,
            should_quit: false,
        })
    }

    /// Attaches the controller to the first layout.
    pub fn mount(&mut self, layout: &PageLayout) {
        self.scroll = self.scroll.min(layout.max_scroll());
        self.controller.mount(&layout.probe(self.scroll));
    }

    /// Runs the post-mount settle once the first frame is on screen.
    pub fn settle(&mut self, layout: &PageLayout) {
        self.controller.settle(&layout.probe(self.scroll));
    }

    /// Adapts to a new layout after the terminal changed size.
    pub fn resized(&mut self, layout: &PageLayout) {
        self.scroll = self.scroll.min(layout.max_scroll());
        self.controller.on_resize();
    }

    /// Runs this frame's pending controller work against `layout`.
    pub fn frame(&mut self, layout: &PageLayout) -> FrameReport {
        self.controller.on_frame(&layout.probe(self.scroll))
    }

    /// Scrolls to `offset`, clamped to the layout. Returns `true` if the offset moved.
    pub fn scroll_to(&mut self, offset: u16, layout: &PageLayout) -> bool {
        let offset = offset.min(layout.max_scroll());
        if offset == self.scroll {
            return false;
        }
        self.scroll = offset;
        self.controller.on_scroll();
        true
    }

    /// Scrolls by `delta` rows, negative for up.
    pub fn scroll_by(&mut self, delta: i32, layout: &PageLayout) -> bool {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX), layout)
    }

    /// Scrolls so section `id` sits under the middle of the viewport; see
    /// [`PageLayout::scroll_for`].
    pub fn jump_to_section(&mut self, id: &str, layout: &PageLayout) -> bool {
        match layout.scroll_for(id) {
            Some(offset) => self.scroll_to(offset, layout),
            None => false,
        }
    }

    /// Jumps to the `index`th section in page order.
    pub fn jump_to_index(&mut self, index: usize, layout: &PageLayout) -> bool {
        let Some(id) = self.controller.section_ids().get(index).cloned() else {
            return false;
        };
        self.jump_to_section(&id, layout)
    }

    /// Jumps to the first section after the active one whose jump moves the page down.
    ///
    /// Sections that would not move the page are passed over, so repeated presses always make
    /// progress.
    pub fn jump_next(&mut self, layout: &PageLayout) -> bool {
        let scroll = self.scroll;
        let target = self
            .controller
            .section_ids()
            .iter()
            .skip(self.active_index() + 1)
            .find(|id| layout.scroll_for(id).is_some_and(|offset| offset > scroll))
            .cloned();
        match target {
            Some(id) => self.jump_to_section(&id, layout),
            None => false,
        }
    }

    /// Jumps to the nearest section before the active one whose jump moves the page up; with
    /// none left, back to the top.
    pub fn jump_prev(&mut self, layout: &PageLayout) -> bool {
        let scroll = self.scroll;
        let target = self
            .controller
            .section_ids()
            .iter()
            .take(self.active_index())
            .rev()
            .find(|id| layout.scroll_for(id).is_some_and(|offset| offset < scroll))
            .cloned();
        match target {
            Some(id) => self.jump_to_section(&id, layout),
            None => self.scroll_to(0, layout),
        }
    }

    #[must_use]
    /// Position of the active section in page order.
    pub fn active_index(&self) -> usize {
        let active = self.controller.active();
        self.controller
            .section_ids()
            .iter()
            .position(|id| id == active)
            .unwrap_or(0)
    }

    #[must_use]
    /// Title of the active section.
    pub fn active_title(&self) -> &str {
        self.page
            .section(self.controller.active())
            .map_or("", |s| s.title.as_str())
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
