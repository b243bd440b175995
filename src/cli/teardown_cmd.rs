//! `edgarwatch teardown` — delete the working directory.

use crate::cli::prompt::stdin_confirm;
use crate::config::AppConfig;
use crate::teardown::{run_teardown, TeardownOutcome};
use anyhow::{Context, Result};

/// Run teardown with the interactive confirmation prompt.
pub fn run(config: &AppConfig) -> Result<()> {
    println!("WARNING: This will permanently delete the working directory and all contents:");
    println!("{}", config.base_dir.display());
    println!();

    let outcome = run_teardown(config, stdin_confirm).context("teardown failed")?;

    match outcome {
        TeardownOutcome::Missing => {
            println!("Folder not found: {}", config.base_dir.display());
        }
        TeardownOutcome::Declined => {
            println!("Operation cancelled.");
        }
        TeardownOutcome::Deleted => {
            println!("\nSuccessfully deleted: {}", config.base_dir.display());
        }
    }
    Ok(())
}
