//! Terminal layout of the portfolio page.
//!
//! Every frame the page is laid out for the current terminal size: the nav bar on top with one
//! button per section, the scrolling body wrapped to the body width, and a help bar at the
//! bottom. The result doubles as the measurement source for the section tracker and the nav
//! indicator through [`PageProbe`].
//!
//! Nav buttons sit on a strip as wide as all of them together. When the strip is wider than the
//! nav bar it scrolls sideways, far enough to keep the active button in view.

use crate::config::Config;
use crate::controller::PageController;
use crate::geometry::{HorizontalBounds, IndicatorGeometry, VerticalBounds};
use crate::probe::LayoutProbe;
use crate::section::Page;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use serde::Serialize;

/// Rows taken by the nav bar: border, labels, indicator, border.
pub const NAV_HEIGHT: u16 = 4;
/// Rows taken by the help bar.
pub const HELP_HEIGHT: u16 = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// How a laid-out body line should be styled.
pub enum LineKind {
    /// Top-level heading in the preamble (the page owner's name).
    Title,
    /// Other preamble text.
    Preamble,
    /// Section heading.
    Heading,
    /// Deeper heading inside a section body.
    Subheading,
    /// Section body text.
    Body,
    /// Spacing.
    Blank,
}

#[derive(Clone, Debug)]
/// One wrapped row of the page body.
pub struct PageLine {
    /// Text of the row, already wrapped to the body width.
    pub text: String,
    /// Styling category of the row.
    pub kind: LineKind,
}

#[derive(Clone, Debug, Serialize)]
/// Row span of a section in page coordinates.
pub struct SectionRows {
    /// Section id.
    pub id: String,
    /// Section title.
    pub title: String,
    /// Row of the section heading.
    pub top: u32,
    /// Row where the next section starts, or the end of the page.
    pub bottom: u32,
}

#[derive(Clone, Debug)]
/// A nav bar button and its place on the nav strip.
pub struct NavButton {
    /// Section the button jumps to.
    pub id: String,
    /// Text shown on the button.
    pub label: String,
    /// Columns from the start of the nav strip.
    pub x: u16,
    /// Width in columns, padding included.
    pub width: u16,
}

/// The page laid out for one terminal size.
pub struct PageLayout {
    /// Nav bar area including its border.
    pub nav_area: Rect,
    /// Inside of the nav bar; the container the buttons share.
    pub nav_inner: Rect,
    /// Body area including its border.
    pub body_area: Rect,
    /// Inside of the body; the scrolling viewport.
    pub body_inner: Rect,
    /// Help bar area.
    pub help_area: Rect,
    /// Wrapped page rows.
    pub lines: Vec<PageLine>,
    /// Row spans of each section, in page order.
    pub sections: Vec<SectionRows>,
    /// Nav buttons, in page order.
    pub buttons: Vec<NavButton>,
    /// Width of the nav strip holding every button.
    pub nav_width: u16,
}

impl PageLayout {
    #[must_use]
    /// Lays out `page` inside `area`.
    pub fn compute(page: &Page, area: Rect, cfg: &Config) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(HELP_HEIGHT),
            ])
            .split(area);

        let nav_area = chunks[0];
        let body_area = chunks[1];
        let help_area = chunks[2];
        let nav_inner = Block::default().borders(Borders::ALL).inner(nav_area);
        let body_inner = Block::default().borders(Borders::ALL).inner(body_area);

        let width = usize::from(body_inner.width).max(1);
        let mut lines = Vec::new();

        for raw in page.preamble.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                push_blank(&mut lines);
            } else if trimmed.starts_with('#') {
                push_wrapped(&mut lines, strip_heading(trimmed), width, LineKind::Title);
            } else {
                push_wrapped(&mut lines, trimmed, width, LineKind::Preamble);
            }
        }
        if !lines.is_empty() {
            push_blank(&mut lines);
        }

        let mut sections = Vec::with_capacity(page.sections.len());
        for section in &page.sections {
            let top = lines.len();
            push_wrapped(&mut lines, &section.title, width, LineKind::Heading);
            push_blank(&mut lines);
            for raw in section.body.lines() {
                let trimmed = raw.trim_end();
                if trimmed.trim().is_empty() {
                    push_blank(&mut lines);
                } else if trimmed.starts_with('#') {
                    push_wrapped(&mut lines, strip_heading(trimmed), width, LineKind::Subheading);
                } else {
                    push_wrapped(&mut lines, trimmed, width, LineKind::Body);
                }
            }
            push_blank(&mut lines);
            sections.push(SectionRows {
                id: section.id.clone(),
                title: section.title.clone(),
                top: row(top),
                bottom: row(lines.len()),
            });
        }

        let (buttons, nav_width) = layout_buttons(page, cfg);

        Self {
            nav_area,
            nav_inner,
            body_area,
            body_inner,
            help_area,
            lines,
            sections,
            buttons,
            nav_width,
        }
    }

    #[must_use]
    /// Rows in the viewport.
    pub fn viewport_height(&self) -> u16 {
        self.body_inner.height
    }

    #[must_use]
    /// Furthest the body may scroll.
    ///
    /// The page may scroll past its end far enough to put the last section's heading at the top
    /// of the viewport, so that every section can reach the middle.
    pub fn max_scroll(&self) -> u16 {
        let total = row(self.lines.len());
        let to_end = total.saturating_sub(u32::from(self.viewport_height()));
        let last_top = self.sections.last().map_or(0, |s| s.top);
        u16::try_from(to_end.max(last_top)).unwrap_or(u16::MAX)
    }

    #[must_use]
    /// Scroll offset that brings section `id` under the middle of the viewport.
    ///
    /// Sections at least half a viewport tall get their heading at the top. Shorter ones are
    /// centred so the middle row lands inside them. Sections too close to the top of the page
    /// to reach the middle stop at offset zero.
    pub fn scroll_for(&self, id: &str) -> Option<u16> {
        let rows = self.sections.iter().find(|s| s.id == id)?;
        let height = rows.bottom.saturating_sub(rows.top);
        let viewport = u32::from(self.viewport_height());
        let lead = if height.saturating_mul(2) < viewport {
            (viewport - height) / 2
        } else {
            0
        };
        let offset = u16::try_from(rows.top.saturating_sub(lead)).unwrap_or(u16::MAX);
        Some(offset.min(self.max_scroll()))
    }

    #[must_use]
    /// Columns the nav strip is scrolled by while `active` is the active section.
    ///
    /// Zero while the active button fits; otherwise just far enough to show its right edge,
    /// and never past its left edge.
    pub fn nav_shift(&self, active: &str) -> u16 {
        let Some(button) = self.buttons.iter().find(|b| b.id == active) else {
            return 0;
        };
        let end = button.x.saturating_add(button.width);
        end.saturating_sub(self.nav_inner.width).min(button.x)
    }

    #[must_use]
    /// Visible screen area of `button` with the nav strip scrolled by `shift`.
    pub fn button_area(&self, button: &NavButton, shift: u16) -> Option<Rect> {
        self.strip_area(button.x, button.width, shift, 0)
    }

    #[must_use]
    /// Visible screen cells of the indicator row with the nav strip scrolled by `shift`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn indicator_area(&self, geometry: IndicatorGeometry, shift: u16) -> Option<Rect> {
        if !geometry.offset_x.is_finite() || !geometry.width.is_finite() {
            return None;
        }
        let max = f64::from(u16::MAX);
        let x = geometry.offset_x.round().clamp(0.0, max) as u16;
        let width = geometry.width.round().clamp(0.0, max) as u16;
        self.strip_area(x, width, shift, 1)
    }

    fn strip_area(&self, x: u16, width: u16, shift: u16, row: u16) -> Option<Rect> {
        let inner = self.nav_inner;
        if row >= inner.height {
            return None;
        }
        let start = x.max(shift);
        let end = x
            .saturating_add(width)
            .min(shift.saturating_add(inner.width));
        (start < end).then(|| Rect::new(inner.x + (start - shift), inner.y + row, end - start, 1))
    }

    #[must_use]
    /// Section whose nav button covers the screen cell at (`column`, `row`), with the nav strip
    /// scrolled by `shift`.
    pub fn button_at(&self, column: u16, row: u16, shift: u16) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| {
                self.button_area(b, shift).is_some_and(|a| {
                    column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
                })
            })
            .map(|b| b.id.as_str())
    }

    #[must_use]
    /// Measurements of this layout with the body scrolled by `scroll` rows.
    pub fn probe(&self, scroll: u16) -> PageProbe<'_> {
        PageProbe {
            layout: self,
            scroll,
        }
    }

    #[must_use]
    /// Serialisable snapshot of this layout and the controller state on top of it.
    pub fn report(&self, controller: &PageController, scroll: u16) -> LayoutReport {
        let probe = self.probe(scroll);
        LayoutReport {
            width: self.nav_area.width,
            height: self.nav_area.height + self.body_area.height + self.help_area.height,
            scroll,
            max_scroll: self.max_scroll(),
            viewport_height: self.viewport_height(),
            active: controller.active().to_string(),
            indicator: controller.indicator(),
            nav_shift: self.nav_shift(controller.active()),
            sections: self.sections.clone(),
            buttons: self
                .buttons
                .iter()
                .map(|b| ButtonReport {
                    id: b.id.clone(),
                    label: b.label.clone(),
                    bounds: probe.button_bounds(&b.id),
                })
                .collect(),
        }
    }
}

/// A [`PageLayout`] seen through a particular scroll offset.
pub struct PageProbe<'a> {
    layout: &'a PageLayout,
    scroll: u16,
}

impl LayoutProbe for PageProbe<'_> {
    fn viewport_height(&self) -> f64 {
        f64::from(self.layout.viewport_height())
    }

    fn section_bounds(&self, id: &str) -> Option<VerticalBounds> {
        // A terminal too short for a body has nothing laid out
        if self.layout.viewport_height() == 0 {
            return None;
        }
        let rows = self.layout.sections.iter().find(|s| s.id == id)?;
        let scroll = f64::from(self.scroll);
        Some(VerticalBounds {
            top: f64::from(rows.top) - scroll,
            bottom: f64::from(rows.bottom) - scroll,
        })
    }

    // Buttons and container are measured on the unscrolled nav strip
    fn button_bounds(&self, id: &str) -> Option<HorizontalBounds> {
        let inner = self.layout.nav_inner;
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let button = self.layout.buttons.iter().find(|b| b.id == id)?;
        Some(HorizontalBounds {
            left: f64::from(inner.x) + f64::from(button.x),
            width: f64::from(button.width),
        })
    }

    fn container_bounds(&self) -> Option<HorizontalBounds> {
        let inner = self.layout.nav_inner;
        (inner.width > 0 && inner.height > 0).then(|| HorizontalBounds {
            left: f64::from(inner.x),
            width: f64::from(inner.width.max(self.layout.nav_width)),
        })
    }
}

#[derive(Serialize)]
/// Layout snapshot printed by `--dump-layout`.
pub struct LayoutReport {
    /// Terminal width the page was laid out for.
    pub width: u16,
    /// Terminal height the page was laid out for.
    pub height: u16,
    /// Body scroll offset.
    pub scroll: u16,
    /// Largest allowed scroll offset.
    pub max_scroll: u16,
    /// Rows in the viewport.
    pub viewport_height: u16,
    /// Active section id.
    pub active: String,
    /// Indicator placement, if it has been placed.
    pub indicator: Option<IndicatorGeometry>,
    /// Columns the nav strip is scrolled by.
    pub nav_shift: u16,
    /// Section row spans in page coordinates.
    pub sections: Vec<SectionRows>,
    /// Nav buttons with their measured bounds.
    pub buttons: Vec<ButtonReport>,
}

#[derive(Serialize)]
/// One nav button in a [`LayoutReport`].
pub struct ButtonReport {
    /// Section id.
    pub id: String,
    /// Button text.
    pub label: String,
    /// Bounds on the unscrolled nav strip, absent when the nav bar has no room at all.
    pub bounds: Option<HorizontalBounds>,
}

fn layout_buttons(page: &Page, cfg: &Config) -> (Vec<NavButton>, u16) {
    let mut cursor: u16 = 0;
    let mut buttons = Vec::with_capacity(page.sections.len());

    for (i, section) in page.sections.iter().enumerate() {
        if i > 0 {
            cursor = cursor.saturating_add(cfg.nav_gap);
        }
        let width =
            text_width(&section.title).saturating_add(cfg.button_padding.saturating_mul(2));
        buttons.push(NavButton {
            id: section.id.clone(),
            label: section.title.clone(),
            x: cursor,
            width,
        });
        cursor = cursor.saturating_add(width);
    }

    (buttons, cursor)
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

fn row(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn strip_heading(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

fn push_blank(lines: &mut Vec<PageLine>) {
    lines.push(PageLine {
        text: String::new(),
        kind: LineKind::Blank,
    });
}

fn push_wrapped(lines: &mut Vec<PageLine>, text: &str, width: usize, kind: LineKind) {
    for text in wrap(text, width) {
        lines.push(PageLine { text, kind });
    }
}

/// Greedy word wrap to `width` columns; words wider than a row are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut indent: String = text.chars().take_while(|c| c.is_whitespace()).collect();
    if Span::raw(indent.as_str()).width() * 2 >= width {
        indent.clear();
    }
    let mut rows = Vec::new();
    let mut current = indent.clone();
    let mut current_width = Span::raw(indent.as_str()).width();
    let base_width = current_width;

    for word in text.split_whitespace() {
        let word_width = Span::raw(word).width();
        let gap = usize::from(current_width > base_width);

        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }

        if current_width > base_width {
            rows.push(std::mem::replace(&mut current, indent.clone()));
            current_width = base_width;
        }

        if base_width + word_width <= width {
            current.push_str(word);
            current_width += word_width;
        } else {
            for c in word.chars() {
                let c_width = Span::raw(c.to_string()).width();
                if current_width + c_width > width && current_width > base_width {
                    rows.push(std::mem::replace(&mut current, indent.clone()));
                    current_width = base_width;
                }
                current.push(c);
                current_width += c_width;
            }
        }
    }

    if current_width > base_width || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
