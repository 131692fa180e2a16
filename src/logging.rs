//! Logging setup for the datareport binary.
//!
//! Logs go to stderr so report Markdown and chart JSON on stdout stay clean.
//! Optionally, a second layer writes daily-rotated files to the app data directory.
//!
//! ## Usage
//!
//! ```no_run
//! use datareport::{config::LogSettings, logging};
//!
//! logging::init(&LogSettings::default()).expect("Failed to initialize logging");
//! tracing::info!("App started");
//! ```

use crate::config::{APP_DIR, LogSettings};
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/datareport/logs`
/// - macOS: `~/Library/Application Support/datareport/logs`
/// - Linux: `~/.local/share/datareport/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    Ok(base_dir.join(APP_DIR).join("logs"))
}

fn env_filter(default_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Failed to create env filter")
}

/// Initializes the global subscriber.
///
/// # Errors
///
/// Returns error if the filter is invalid, the log directory cannot be
/// created, or a subscriber is already installed.
pub fn init(settings: &LogSettings) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let file_layer = if settings.log_to_file {
        let log_dir = get_log_dir()?;
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .max_log_files(10)
            .filename_prefix(APP_DIR)
            .filename_suffix("log")
            .build(&log_dir)
            .context("Failed to create log file appender")?;

        Some(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_ansi(false)
                .with_writer(appender)
                .with_filter(env_filter(&settings.level)?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter(&settings.level)?))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(level = %settings.level, to_file = settings.log_to_file, "Logging initialized");
    Ok(())
}
