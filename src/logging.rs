//! Tracing setup.
//!
//! The terminal belongs to the chart while it runs, so log lines go to
//! `seatplan.log` in the data directory instead of stdout.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "seatplan.log";

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "SEATPLAN_LOG";

/// Builds the filter: `$SEATPLAN_LOG` if set and valid, else `debug`/`info`.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs a global subscriber appending to the log file in `data_dir`.
///
/// Returns the log file path.
pub fn init(data_dir: &Path, verbose: bool) -> Result<PathBuf> {
    fs::create_dir_all(data_dir).with_context(|| {
        format!("Failed to create data directory: {}", data_dir.display())
    })?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(log_path)
}
