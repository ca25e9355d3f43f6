//! History command - list or clear recent conversions.

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the history command.
pub fn run(clear: bool, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    let mut history = runner.history();

    if clear {
        history.clear();
        history.save()?;
        println!("History cleared: {}", history.path().display());
        return Ok(());
    }

    if history.is_empty() {
        println!("No conversions yet.");
        return Ok(());
    }

    println!("Recent Conversions");
    println!("==================");
    for entry in history.entries() {
        println!();
        println!("{}  [{}]", entry.timestamp, entry.mode);
        println!("  {}", entry.path.display());
        if !entry.models.is_empty() {
            println!("  Vehicles: {}", entry.models.join(", "));
        }
    }

    Ok(())
}
