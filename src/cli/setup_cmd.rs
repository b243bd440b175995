//! `edgarwatch setup` — create the working directory and seed the CIK list.

use crate::cli::prompt::stdin_confirm;
use crate::config::AppConfig;
use crate::setup::{run_setup, SetupOutcome};
use anyhow::{Context, Result};

/// Run setup with the interactive confirmation prompt.
pub async fn run(config: &AppConfig) -> Result<()> {
    println!("Setting up working directory: {}", config.base_dir.display());

    let outcome = run_setup(config, stdin_confirm)
        .await
        .context("setup failed")?;

    match outcome {
        SetupOutcome::Declined => {
            println!("Operation cancelled.");
        }
        SetupOutcome::SeededFromRegistry { ciks, registrants } => {
            println!(
                "Created {} with {ciks} CIKs from the company registry ({registrants} registrants).",
                config.cik_list_path().display()
            );
            println!(
                "Registry table written to {}",
                config.registry_csv_path().display()
            );
            println!("\nSetup completed successfully!");
        }
        SetupOutcome::SeededDefaults { ciks, reason } => {
            println!("Company registry unavailable ({reason}).");
            println!(
                "Created {} with {ciks} default CIK numbers.",
                config.cik_list_path().display()
            );
            println!("\nSetup completed successfully!");
        }
    }
    Ok(())
}
