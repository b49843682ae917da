//! Shared tracing setup for the Runlet binary.
//!
//! Stdout is reserved for the launcher's status lines and the child's
//! inherited output, so the console layer always writes to stderr. File
//! logs roll daily under the configured log directory.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "runlet=info";

/// Logging configuration for a Runlet binary.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
    /// Directory for rolling file logs. `None` disables the file layer.
    pub log_dir: Option<PathBuf>,
}

/// Keeps the non-blocking file writer flushing. Hold it for the life of
/// the process.
pub struct LogGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize tracing with an optional rolling file writer and stderr output.
pub fn init_logging(config: LogConfig<'_>) -> Result<LogGuard> {
    let LogConfig {
        app_name,
        verbose,
        log_dir,
    } = config;

    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // The console stays quiet unless asked: launcher diagnostics belong in
    // the file log, not interleaved with the child's output.
    let console_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runlet=debug"))
    } else {
        EnvFilter::new("warn")
    };

    let mut file_guard = None;
    let file_layer = log_dir.map(|dir| {
        let appender = tracing_appender::rolling::daily(dir, format!("{}.log", app_name));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        file_guard = Some(guard);
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(file_filter)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(console_filter),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
