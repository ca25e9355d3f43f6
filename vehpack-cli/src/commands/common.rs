//! Helpers shared by the conversion commands.

use std::path::PathBuf;

use dialoguer::Confirm;
use vehpack::config::ConfigFile;

use crate::error::CliError;

/// Parent directory for new resources: CLI argument, then config.
pub fn resolve_output_parent(cli_output: Option<PathBuf>, config: &ConfigFile) -> PathBuf {
    cli_output.unwrap_or_else(|| config.output.directory.clone())
}

/// Whether to prompt before writing.
pub fn needs_confirmation(assume_yes: bool, confirm_setting: bool, interactive: bool) -> bool {
    !assume_yes && confirm_setting && interactive
}

/// Ask the user to confirm, unless disabled or stdin is not a terminal.
pub fn confirm(prompt: &str, assume_yes: bool, config: &ConfigFile) -> Result<bool, CliError> {
    let interactive = atty::is(atty::Stream::Stdin);
    if !needs_confirmation(assume_yes, config.output.confirm, interactive) {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| CliError::Prompt(e.to_string()))
}
