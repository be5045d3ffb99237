//! Logging infrastructure for contentlift
//!
//! Logs are written to `~/.local/state/contentlift/` following XDG standards,
//! one file per day named `contentlift.YYYY-MM-DD.log`.

use crate::config::{Config, LoggingConfig};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the logging system
///
/// Sets up tracing with:
/// - File output to XDG state directory
/// - Daily log rotation, keeping at most `max_files` files
/// - Configurable log level via config or RUST_LOG env var
pub fn init(config: &LoggingConfig) -> crate::error::Result<LoggingGuard> {
    let dir = log_dir();

    std::fs::create_dir_all(&dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("contentlift")
        .filename_suffix("log")
        .max_log_files(config.max_files.max(1))
        .build(&dir)
        .map_err(|e| crate::error::Error::Config(format!("failed to create log file: {}", e)))?;

    // Non-blocking writer for better performance
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // try_init: a second init in the same process keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    tracing::info!(
        log_dir = %dir.display(),
        level = %config.level,
        "Logging initialized"
    );

    Ok(LoggingGuard { _guard: guard })
}

/// Initialize logging for tests (logs to stdout)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Guard that keeps the logging system alive
///
/// When dropped, flushes any pending log writes.
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Returns the directory holding the daily log files
pub fn log_dir() -> PathBuf {
    Config::state_dir()
}
