//! File logging for the overlay.
//!
//! The terminal belongs to the overlay, so the subscriber writes to a file and
//! panics are routed through `tracing` instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::error;

use crate::{GlanceError, Result};

/// Installs a global fmt subscriber appending to `path`.
///
/// # Errors
///
/// Returns [`GlanceError::Io`] if the log file cannot be opened.
pub fn init(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| GlanceError::Io(format!("failed to open log file {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Replaces the default panic hook, which would print over the alternate
/// screen, with one that logs at `error`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!(panic = %info, "panicked");
    }));
}
