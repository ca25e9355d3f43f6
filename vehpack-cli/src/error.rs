//! CLI error type.

use std::fmt;

use vehpack::config::ConfigError;
use vehpack::history::HistoryError;
use vehpack::ConvertError;

/// Errors reported by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Conversion failed.
    Convert(ConvertError),
    /// Configuration could not be loaded or saved.
    ConfigFile(ConfigError),
    /// Invalid configuration input from the user.
    Config(String),
    /// History could not be saved.
    History(HistoryError),
    /// The confirmation prompt failed.
    Prompt(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Convert(e) => write!(f, "{}", e),
            CliError::ConfigFile(e) => write!(f, "Configuration error: {}", e),
            CliError::Config(msg) => write!(f, "{}", msg),
            CliError::History(e) => write!(f, "History error: {}", e),
            CliError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Convert(e) => Some(e),
            CliError::ConfigFile(e) => Some(e),
            CliError::History(e) => Some(e),
            CliError::Config(_) | CliError::Prompt(_) => None,
        }
    }
}

impl From<ConvertError> for CliError {
    fn from(e: ConvertError) -> Self {
        CliError::Convert(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<HistoryError> for CliError {
    fn from(e: HistoryError) -> Self {
        CliError::History(e)
    }
}
