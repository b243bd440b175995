// Copyright 2026 Edgarwatch Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use edgarwatch::cli;
use edgarwatch::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "edgarwatch",
    about = "Edgarwatch — SEC EDGAR filing monitor",
    version,
    after_help = "Run 'edgarwatch <command> --help' for details on each command."
)]
struct Cli {
    /// Working directory for the CIK list and outputs (default ~/.edgarwatch)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Identifying User-Agent sent on every request (EDGAR usage policy
    /// requires a contact address)
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch filings for every listed CIK and write the weekly report
    Run,
    /// Create the working directory and seed the CIK list from the registry
    Setup,
    /// Delete the working directory and everything in it
    Teardown,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "edgarwatch=debug"
    } else {
        "edgarwatch=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::with_base_dir(
        cli.base_dir.unwrap_or_else(AppConfig::default_base_dir),
    );
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }

    let result = match cli.command {
        Commands::Run => cli::run_cmd::run(&config).await,
        Commands::Setup => cli::setup_cmd::run(&config).await,
        Commands::Teardown => cli::teardown_cmd::run(&config),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "edgarwatch", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}
