//! File logging
//!
//! Logs only ever go to a file: the terminal is owned by the menu while the
//! program runs.

use crate::constants::LOG_FILTER;
use crate::error::{AppError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber writing to `path`
///
/// The returned guard flushes pending records when dropped, so keep it alive
/// until shutdown.
pub fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let file = open_log_file(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| AppError::LoggingError(e.to_string()))?;

    Ok(guard)
}

/// Open/create the log file, truncating if it exists
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| AppError::LoggingError(format!("{}: {}", path.display(), e)))
}
