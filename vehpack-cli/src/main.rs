//! vehpack CLI - Command-line interface
//!
//! Converts extracted GTA V vehicle mods into FiveM resources using the
//! vehpack library.

mod commands;
mod error;
mod output;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::combine::CombineArgs;
use commands::config::ConfigCommands;
use commands::convert::ConvertArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "vehpack")]
#[command(version = vehpack::VERSION)]
#[command(about = "Pack extracted GTA V vehicle mods into FiveM resources", long_about = None)]
struct Cli {
    /// Show debug output on the console
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one mod folder into a resource
    Convert {
        /// Extracted mod folder
        mod_folder: PathBuf,

        /// Parent directory for the resource (default: output.directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Resource folder name (default: first model name)
        #[arg(long)]
        name: Option<String>,

        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Combine several mod folders into one resource
    Combine {
        /// Extracted mod folders, in merge order
        #[arg(required = true)]
        mod_folders: Vec<PathBuf>,

        /// Resource folder name
        #[arg(short, long)]
        name: String,

        /// Parent directory for the resource (default: output.directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List recent conversions
    History {
        /// Forget all recorded conversions
        #[arg(long)]
        clear: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result: Result<(), CliError> = match cli.command {
        Commands::Convert {
            mod_folder,
            output,
            name,
            yes,
        } => commands::convert::run(ConvertArgs {
            mod_folder,
            output,
            name,
            yes,
            verbose,
        }),
        Commands::Combine {
            mod_folders,
            name,
            output,
            yes,
        } => commands::combine::run(CombineArgs {
            mod_folders,
            name,
            output,
            yes,
            verbose,
        }),
        Commands::Config { command } => commands::config::run(command),
        Commands::History { clear } => commands::history::run(clear, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
