//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings from there.
//! This provides the section heading level, scrolling and nav bar spacing, frame pacing and the
//! default log filter.

use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 2)]
    /// Heading level whose headings become page sections.
    pub section_level: usize,
    #[facet(default = 3)]
    /// Rows scrolled per mouse wheel notch.
    pub scroll_step: u16,
    #[facet(default = 1)]
    /// Columns between neighbouring nav buttons.
    pub nav_gap: u16,
    #[facet(default = 1)]
    /// Columns of padding on each side of a nav label.
    pub button_padding: u16,
    #[facet(default = 16)]
    /// Longest wait for input before drawing the next frame, in milliseconds.
    pub frame_ms: u64,
    #[facet(default = "info".to_string())]
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            section_level: 2,
            scroll_step: 3,
            nav_gap: 1,
            button_padding: 1,
            frame_ms: 16,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from folio.toml if present.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> io::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, or the defaults when there is no file.
    ///
    /// The caller decides how to fall back, since a parse error may turn up before logging is
    /// set up.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is not valid configuration.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let Ok(contents) = fs::read_to_string(path) else {
            return Ok(Self::default());
        };
        facet_toml::from_str::<Self>(&contents)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
