//! Convert command - one mod folder into one resource.

use std::path::PathBuf;

use vehpack::resource::{convert_single, resource_name_for, validate_resource_name};

use super::common::{confirm, resolve_output_parent};
use crate::error::CliError;
use crate::output::{print_summary, ConsoleOutput};
use crate::runner::CliRunner;

/// Arguments for the convert command.
pub struct ConvertArgs {
    pub mod_folder: PathBuf,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub yes: bool,
    pub verbose: bool,
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose)?;
    runner.log_startup("convert");
    let config = runner.config();

    // Resource name: CLI > first model name in vehicles.meta > fallback
    let name = match args.name {
        Some(name) => {
            validate_resource_name(&name)?;
            name.trim().to_string()
        }
        None => resource_name_for(&args.mod_folder)?,
    };
    let target = resolve_output_parent(args.output, config).join(&name);

    println!("Source:   {}", args.mod_folder.display());
    println!("Resource: {}", target.display());
    println!();

    if !confirm("Convert this mod?", args.yes, config)? {
        println!("Cancelled.");
        return Ok(());
    }

    let summary = convert_single(&args.mod_folder, &target)?;
    print_summary(&ConsoleOutput, &summary);
    runner.record_history(&summary);

    Ok(())
}
