//! Shared command setup: configuration, logging and history.

use tracing::{info, warn};
use vehpack::config::ConfigFile;
use vehpack::history::{history_file_path, History, HistoryEntry};
use vehpack::logging::{init_logging, LoggingConfig, LoggingGuard};
use vehpack::ConversionSummary;

use crate::error::CliError;

/// Everything a conversion command needs before it starts.
pub struct CliRunner {
    config: ConfigFile,
    _logging: LoggingGuard,
}

impl CliRunner {
    /// Load configuration and start logging.
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;
        let logging = init_logging(
            &LoggingConfig::from_settings(&config.logging).with_verbose(verbose),
        );

        Ok(Self {
            config,
            _logging: logging,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log the command name and version.
    pub fn log_startup(&self, command: &str) {
        info!(command, version = vehpack::VERSION, "vehpack starting");
    }

    /// Open the history file with the configured size.
    pub fn history(&self) -> History {
        History::load(&history_file_path(), self.config.history.max_entries)
    }

    /// Remember a finished conversion. Failures are logged, not fatal.
    pub fn record_history(&self, summary: &ConversionSummary) {
        let mut history = self.history();
        history.record(HistoryEntry::from_summary(summary));
        if let Err(e) = history.save() {
            warn!(error = %e, "Could not save conversion history");
        }
    }
}
