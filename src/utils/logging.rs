//! File logging for lsr.
//!
//! The terminal belongs to the UI, so records go to `<log.dir>/lsr.log` through a
//! non-blocking writer. The filter comes from `LSR_LOG`, else from `[log] level`.

use crate::config::Log;

use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "LSR_LOG";
pub const LOG_FILE: &str = "lsr.log";

/// Installs the global subscriber.
///
/// Returns the writer guard, which must live until the end of `main` so buffered records
/// are flushed. Returns `None` and leaves logging off when the log directory cannot be
/// created or a subscriber is already installed.
pub fn init_logging(log: &Log) -> Option<WorkerGuard> {
    let dir = log.dir()?;
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("[lsr] Warning: logging disabled, {}: {e}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(build_filter(log.level()));

    if tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        file = %dir.join(LOG_FILE).display(),
        "logging started"
    );
    Some(guard)
}

/// `LSR_LOG` wins over the configured level; an invalid directive falls back to `info`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
