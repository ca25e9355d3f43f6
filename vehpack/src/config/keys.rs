//! Typed access to individual configuration settings by `section.key`.

use std::path::PathBuf;
use std::str::FromStr;

use super::file::{parse_bool, ConfigError, ConfigFile, LOG_LEVELS};

/// A single configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    OutputDirectory,
    OutputConfirm,
    LoggingDirectory,
    LoggingLevel,
    HistoryMaxEntries,
}

impl ConfigKey {
    /// All keys in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::OutputDirectory,
            ConfigKey::OutputConfirm,
            ConfigKey::LoggingDirectory,
            ConfigKey::LoggingLevel,
            ConfigKey::HistoryMaxEntries,
        ]
    }

    /// INI section name.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::OutputDirectory | ConfigKey::OutputConfirm => "output",
            ConfigKey::LoggingDirectory | ConfigKey::LoggingLevel => "logging",
            ConfigKey::HistoryMaxEntries => "history",
        }
    }

    /// Key name within the section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::OutputDirectory | ConfigKey::LoggingDirectory => "directory",
            ConfigKey::OutputConfirm => "confirm",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::HistoryMaxEntries => "max_entries",
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::OutputDirectory => config.output.directory.display().to_string(),
            ConfigKey::OutputConfirm => config.output.confirm.to_string(),
            ConfigKey::LoggingDirectory => config.logging.directory.display().to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::HistoryMaxEntries => config.history.max_entries.to_string(),
        }
    }

    /// Validate and store a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            ConfigKey::OutputDirectory | ConfigKey::LoggingDirectory => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(invalid("path must not be empty"));
                }
                let path = PathBuf::from(trimmed);
                if *self == ConfigKey::OutputDirectory {
                    config.output.directory = path;
                } else {
                    config.logging.directory = path;
                }
            }
            ConfigKey::OutputConfirm => {
                config.output.confirm =
                    parse_bool(value).ok_or_else(|| invalid("expected true or false"))?;
            }
            ConfigKey::LoggingLevel => {
                let level = value.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(invalid("expected one of trace, debug, info, warn, error"));
                }
                config.logging.level = level;
            }
            ConfigKey::HistoryMaxEntries => {
                let entries: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("expected a positive number"))?;
                if entries == 0 {
                    return Err(invalid("expected a positive number"));
                }
                config.history.max_entries = entries;
            }
        }

        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}
