//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger (info level, terminal output)
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set. Installing a
/// second global subscriber is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        match std::fs::create_dir_all(log_path) {
            Ok(()) => Some(tracing_appender::rolling::daily(log_path, "pricing-server")),
            Err(e) => {
                eprintln!("Log directory {} unavailable ({}), logging to stdout", dir, e);
                None
            }
        }
    });

    let result = match (json.unwrap_or(false), file_appender) {
        (true, Some(appender)) => builder.json().with_writer(appender).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(appender)) => builder.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => builder.try_init(),
    };
    if result.is_err() {
        tracing::debug!("Global logger already installed");
    }
}
