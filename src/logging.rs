//! Tracing setup for the binary

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// stderr, so stdout stays free for game output and protocol replies
    Stderr,
    /// Append to a file, without ANSI colours
    File(&'a Path),
    /// Nothing is logged (full-screen terminal UI without a log file)
    Off,
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides `default_level`. Calling this twice is harmless; the
/// second call keeps the first subscriber.
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init(target: LogTarget<'_>, default_level: &str) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}
