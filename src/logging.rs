//! Logging configuration using tracing
//!
//! Events go to stderr and to a daily-rolling file under the data directory.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;
use crate::helpers::{get_or_create_data_dir, is_development};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "BLOCK_CATALOG_LOG";

const LOG_FILE_PREFIX: &str = "block-catalog.log";

/// Initialize the logging subsystem
///
/// Log level is controlled by the `BLOCK_CATALOG_LOG` environment variable
/// and defaults to `info` (`debug` in debug builds).
///
/// # Examples
/// ```bash
/// BLOCK_CATALOG_LOG=debug block-catalog
/// BLOCK_CATALOG_LOG=block_catalog=trace,warn block-catalog
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);


    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    tracing::info!(log_dir = %log_dir.display(), "Block catalog starting");

    Ok(log_dir)
}

/// Fallback when the data directory is unavailable: stderr only
pub fn init_stderr_only() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if is_development() { "debug" } else { "info" })
    })
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    Ok(get_or_create_data_dir()?.join("logs"))
}
