//! User configuration.
//!
//! Settings live in `config.ini` inside [`config_dir`]. Commands load a
//! [`ConfigFile`] once and pass it along; nothing reads configuration from
//! global state.

mod file;
mod keys;

pub use file::{
    config_dir, config_file_path, ConfigError, ConfigFile, HistorySettings, LoggingSettings,
    OutputSettings, CONFIG_DIR_ENV, CONFIG_FILE_NAME, DEFAULT_HISTORY_ENTRIES, LOG_LEVELS,
};
pub use keys::ConfigKey;
