//! Command-line interface for pathcheck
//!
//! This module provides the main CLI structure and command handling for
//! pathcheck. It uses clap for argument parsing and keeps the bare
//! invocation equivalent to the `check` subcommand.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

pub use output::Output;

/// pathcheck - Verify expected data assets exist on disk
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check that the expected data asset exists (default)
    Check,
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        // Running with no subcommand performs the check
        match self.command {
            Some(Commands::Check) | None => commands::check::execute(&output).await,
            Some(Commands::Version) => commands::version::execute(&output).await,
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
