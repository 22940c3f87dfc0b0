//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Build the level filter. `RUST_LOG` wins over the configured level.
fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logger with optional file output
///
/// When `log_dir` exists, log lines go both to stdout and to a daily rolling
/// file `cafe-server.YYYY-MM-DD` in that directory. Calling this twice is
/// harmless: the second global subscriber is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&Path>) {
    let filter = build_filter(log_level.unwrap_or("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .filter(|dir| dir.is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, "cafe-server"));

    // try_init: tests may install a subscriber more than once
    let result = match (file_appender, json) {
        (Some(appender), true) => builder
            .json()
            .with_writer(std::io::stdout.and(appender))
            .try_init(),
        (Some(appender), false) => builder
            .with_writer(std::io::stdout.and(appender))
            .try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
