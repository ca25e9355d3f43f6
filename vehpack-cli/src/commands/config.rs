//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, and `config path` commands
//! for viewing and modifying configuration settings from the command line.

use clap::Subcommand;
use vehpack::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., output.directory)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., output.directory)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key),
        ConfigCommands::Set { key, value } => run_set(&key, &value),
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
    }
}

/// Get a configuration value.
fn run_get(key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let config = ConfigFile::load()?;
    println!("{}", config_key.get(&config));

    Ok(())
}

/// Set a configuration value.
fn run_set(key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let mut config = ConfigFile::load()?;
    config_key
        .set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save()?;

    println!("Set {} = {}", config_key.name(), config_key.get(&config));

    Ok(())
}

/// List all configuration settings.
fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load()?;

    println!("Configuration Settings");
    println!("======================");
    println!();

    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        if section != current_section {
            if !current_section.is_empty() {
                println!();
            }
            println!("[{}]", section);
            current_section = section;
        }

        println!("  {} = {}", key.key_name(), key.get(&config));
    }

    Ok(())
}

/// Parse `section.key`, pointing the user at `config list` on failure.
fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'vehpack config list' to see available keys.",
            key
        ))
    })
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_error_mentions_list() {
        let err = parse_key("output.colour").unwrap_err();
        assert!(err.to_string().contains("vehpack config list"));
        assert_eq!(parse_key("history.max_entries").unwrap(), ConfigKey::HistoryMaxEntries);
    }
}
