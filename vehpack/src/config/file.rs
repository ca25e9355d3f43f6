//! INI configuration file.
//!
//! ```ini
//! [output]
//! directory = /home/me/vehpack-resources
//! confirm = true
//!
//! [logging]
//! directory = /home/me/.config/vehpack/logs
//! level = info
//!
//! [history]
//! max_entries = 10
//! ```
//!
//! Missing files and missing keys fall back to defaults; unknown keys are
//! ignored.

use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "VEHPACK_CONFIG_DIR";

/// Configuration file name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default number of remembered conversions.
pub const DEFAULT_HISTORY_ENTRIES: usize = 10;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading, saving or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid INI.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The key is not a known `section.key`.
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    /// The value cannot be used for the key.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Directory holding `config.ini`, `history.json` and logs.
///
/// `VEHPACK_CONFIG_DIR` wins; otherwise the platform config directory, then
/// the home directory.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("vehpack"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".vehpack")))
        .unwrap_or_else(|| PathBuf::from(".vehpack"))
}

/// Full path of the configuration file.
pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Parent directory for converted resources.
    pub directory: PathBuf,
    /// Ask before converting on interactive terminals.
    pub confirm: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            directory: base.join("vehpack-resources"),
            confirm: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory for `vehpack.log`.
    pub directory: PathBuf,
    /// Default log level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: config_dir().join("logs"),
            level: "info".to_string(),
        }
    }
}

/// `[history]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySettings {
    /// Number of recent conversions kept.
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_HISTORY_ENTRIES,
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
    pub history: HistorySettings,
}

impl ConfigFile {
    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut config = Self::default();
        for key in super::ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }

        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to `path`, creating its parent directory.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut ini = Ini::new();
        for key in super::ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }

        ini.write_to_file(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Parse a boolean setting.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
