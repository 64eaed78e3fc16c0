//! Command-line interface for sms-meter
//!
//! Provides `estimate` and `inspect` subcommands over message bodies taken
//! from an argument, a file, or stdin.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod estimate;
mod input;
mod inspect;

/// Estimate SMS encoding class and transport segment counts
#[derive(Parser)]
#[command(name = "sms-meter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate encoding, character count, and segment count for a message
    Estimate(estimate::EstimateArgs),

    /// Show a per-character encoding breakdown of a message
    Inspect(inspect::InspectArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Estimate(args) => estimate::run(args),
        Commands::Inspect(args) => inspect::run(args),
    }
}
