//! Tracing setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so events only ever go to a log file.
use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "falling-words.log";

/// Install a file subscriber under `log_dir`, filtered by `RUST_LOG`
/// (default `info`).
///
/// Keep the returned guard alive until exit; dropping it flushes and stops
/// the background writer.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(file = %log_dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}
