//! Tracing subscriber setup.
//!
//! Two layers share one registry: a human-readable console layer on stderr and
//! a file layer writing `vehpack.log` through a non-blocking appender. The
//! returned [`LoggingGuard`] flushes the file on drop, so hold it until exit.
//!
//! `RUST_LOG` overrides both layers when set.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LoggingSettings;

/// Log file name inside the logging directory.
pub const LOG_FILE_NAME: &str = "vehpack.log";

/// Logging options for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory for the log file.
    pub directory: PathBuf,
    /// Level used when `RUST_LOG` is unset.
    pub level: String,
    /// Raise the console layer to `debug`.
    pub verbose: bool,
}

impl LoggingConfig {
    /// Options taken from the `[logging]` configuration section.
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            directory: settings.directory.clone(),
            level: settings.level.clone(),
            verbose: false,
        }
    }

    /// Set verbose console output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Full path of the log file.
    pub fn log_file(&self) -> PathBuf {
        self.directory.join(LOG_FILE_NAME)
    }

    /// Directive for the console layer.
    pub fn console_directive(&self) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            self.level.clone()
        }
    }

    /// Directive for the file layer.
    pub fn file_directive(&self) -> String {
        self.level.clone()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_settings(&LoggingSettings::default())
    }
}

/// Keeps the file writer alive.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Install the global subscriber.
///
/// If the log directory cannot be created only the console layer is
/// installed. Calling this twice leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) -> LoggingGuard {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_for(&config.console_directive()));

    let (file_layer, file_guard) = match fs::create_dir_all(&config.directory) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(&config.directory, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter_for(&config.file_directive()));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "Warning: cannot create log directory {}: {}",
                config.directory.display(),
                e
            );
            (None, None)
        }
    };

    let has_file = file_layer.is_some();
    let installed = tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed && has_file {
        tracing::debug!(log_file = %config.log_file().display(), "Logging initialized");
    }

    LoggingGuard { _file: file_guard }
}
