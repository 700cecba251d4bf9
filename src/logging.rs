//! Tracing setup.
//!
//! The terminal UI owns stdout, so log records go to a file named on the command line. Without
//! one no subscriber is installed and the `tracing` macros cost next to nothing.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sends tracing output to `path`, filtered by `RUST_LOG` or else `default_level`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is already installed.
pub fn init(path: &Path, default_level: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::builder().parse(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter),
        )
        .try_init()
        .map_err(io::Error::other)?;
    info!(path = %path.display(), "Logging initialized; override level with RUST_LOG");
    Ok(())
}
