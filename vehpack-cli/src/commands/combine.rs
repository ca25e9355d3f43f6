//! Combine command - several mod folders into one resource.

use std::path::PathBuf;

use vehpack::resource::{convert_combined, stream_subdirs, validate_resource_name};

use super::common::{confirm, resolve_output_parent};
use crate::error::CliError;
use crate::output::{print_summary, ConsoleOutput};
use crate::runner::CliRunner;

/// Arguments for the combine command.
pub struct CombineArgs {
    pub mod_folders: Vec<PathBuf>,
    pub name: String,
    pub output: Option<PathBuf>,
    pub yes: bool,
    pub verbose: bool,
}

/// Run the combine command.
pub fn run(args: CombineArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose)?;
    runner.log_startup("combine");
    let config = runner.config();

    validate_resource_name(&args.name)?;
    let target = resolve_output_parent(args.output, config).join(args.name.trim());

    println!("Combining {} mod folders:", args.mod_folders.len());
    for (folder, subdir) in args
        .mod_folders
        .iter()
        .zip(stream_subdirs(&args.mod_folders))
    {
        println!("  {} -> stream/{}/", folder.display(), subdir);
    }
    println!("Resource: {}", target.display());
    println!();

    if !confirm("Build combined resource?", args.yes, config)? {
        println!("Cancelled.");
        return Ok(());
    }

    let summary = convert_combined(&args.mod_folders, &target)?;
    print_summary(&ConsoleOutput, &summary);
    runner.record_history(&summary);

    Ok(())
}
