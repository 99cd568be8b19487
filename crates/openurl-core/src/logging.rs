//! Logging init: append to a file in the XDG state dir, or log to stderr.
//!
//! `openurl` as a filter target also matches `openurl_core`, since targets
//! match by prefix.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,openurl=debug";
const STDERR_FILTER: &str = "warn";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Path of the log file: `~/.local/state/openurl/openurl.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("openurl")?;
    Ok(xdg_dirs.get_state_home().join("openurl.log"))
}

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Initialize structured logging to the state-dir log file and return its path.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    // `&File` is a writer, so every event writes through the one shared handle.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(FILE_FILTER))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("openurl logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only (warnings and up unless `RUST_LOG` says otherwise).
/// Use when init_logging() fails so the shell doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
