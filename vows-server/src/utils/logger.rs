//! Logging Infrastructure
//!
//! `tracing-subscriber` with an env filter, optionally writing to daily
//! rolling files.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Filter used when `RUST_LOG` is unset
///
/// Covers the seating engine in `shared`, which runs inside request handlers.
fn default_directives(level: &str) -> String {
    format!("vows_server={level},shared={level},tower_http={level}")
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. File output is used only
/// when `log_dir` already exists.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "vows-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
