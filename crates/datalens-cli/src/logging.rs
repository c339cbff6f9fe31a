//! Logging and tracing setup for the datalens binary
//!
//! Two optional outputs share one filter:
//! - a human-readable console layer on stderr, switched on by `-v`
//! - a JSON file layer rolled daily under the log directory, switched on by
//!   the `file_logs` setting
//!
//! `RUST_LOG` takes precedence over the configured filter.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::{self, Settings};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files are written
    pub log_dir: PathBuf,

    /// Whether to write JSON logs to a daily file
    pub enable_json_logs: bool,

    /// Whether to write human-readable logs to stderr
    pub enable_console_logs: bool,

    /// Whether to include file/line information in console logs
    pub include_location: bool,

    /// Log filter used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: settings::log_dir(),
            enable_json_logs: false,
            enable_console_logs: false,
            include_location: false,
            default_filter: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Build from settings and the number of `-v` flags.
    ///
    /// Any `-v` turns the console on and raises the filter: one for `info`,
    /// two for `debug`, three or more for `trace`.
    pub fn from_settings(settings: &Settings, verbosity: u8) -> Self {
        let default_filter = match verbosity {
            0 => settings.log_filter.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        };

        Self {
            log_dir: settings::log_dir(),
            enable_json_logs: settings.file_logs,
            enable_console_logs: verbosity > 0,
            include_location: verbosity > 2,
            default_filter,
        }
    }
}

/// Initialize the logging system.
///
/// The returned guard flushes the file writer when dropped and must be held
/// for the life of the program.
pub fn init(config: LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let mut layers = Vec::new();
    let mut guard = None;

    if config.enable_console_logs {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_ansi(true)
            .compact()
            .with_filter(env_filter(&config.default_filter))
            .boxed();

        layers.push(console_layer);
    }

    if config.enable_json_logs {
        std::fs::create_dir_all(&config.log_dir)?;

        let file_appender = tracing_appender::rolling::daily(&config.log_dir, "datalens.log");
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        let json_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(non_blocking)
            .with_filter(env_filter(&config.default_filter))
            .boxed();

        layers.push(json_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    tracing::info!(
        log_dir = %config.log_dir.display(),
        json_enabled = config.enable_json_logs,
        console_enabled = config.enable_console_logs,
        "Logging system initialized"
    );

    Ok(guard)
}

/// `RUST_LOG` when set, otherwise `default_filter`
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Guard that logs timing information when dropped
pub struct TimingGuard {
    name: &'static str,
    start: std::time::Instant,
}

impl TimingGuard {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::debug!(
            operation = self.name,
            duration_ms = elapsed.as_millis(),
            "Operation completed"
        );
    }
}
