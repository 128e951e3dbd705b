//! File logging setup.
//!
//! Logs go to a daily-rotated file because stdout belongs to the TUI.
//! The filter comes from `RUST_LOG`; nothing is logged when it is unset
//! beyond the subscriber's default level.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Base name of the rotated log files.
pub const LOG_FILE_NAME: &str = "thalia.log";

/// Install the global subscriber writing to `log_dir`.
///
/// The returned guard flushes buffered lines when dropped and must live
/// until the app exits.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
