//! folio: a single-page portfolio viewer for the terminal.
//!
//! The page is a markdown file whose section-level headings become named page sections. A nav
//! bar above the page keeps a sliding indicator under the button of whichever section sits
//! nearest the middle of the viewport as the reader scrolls.

pub mod app_state;
pub mod config;
pub mod controller;
pub mod formats;
pub mod geometry;
pub mod indicator;
pub mod input;
pub mod logging;
pub mod page;
pub mod probe;
pub mod scheduler;
pub mod section;
pub mod tracker;
pub mod ui;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod support;
