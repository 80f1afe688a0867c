//! Logging setup
//!
//! Console output through `tracing-subscriber`, plus an optional log file in
//! ~/.config/showdist/logs/ written by `tracing-appender`.

use anyhow::anyhow;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::{ConfigFile, LoggingSettings};
use crate::core::errors::{FileContext, ShowDistResult};

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// File name of today's log
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("showdist-{}.log", timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> ShowDistResult<()> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir).with_file_context("create", &logs_dir)?;
    Ok(())
}

/// Filter from `RUST_LOG`, falling back to the configured directive
pub fn build_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set, e.g. by the host.
pub fn init_logging(settings: &LoggingSettings) -> ShowDistResult<()> {
    let file_layer = if settings.log_to_file {
        initialize_logs_directory()?;
        let appender = tracing_appender::rolling::never(logs_dir(), current_log_file_name());
        Some(fmt::layer().with_ansi(false).with_writer(appender))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(build_filter(settings))
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    if settings.log_to_file {
        tracing::info!("Logging to {:?}", current_log_file());
    }
    Ok(())
}
