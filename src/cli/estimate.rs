//! Estimate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use sms_meter::config::{self, OutputFormat};
use sms_meter::segment::{estimate_with_mode, CountingMode};

use super::input::read_message;

#[derive(Args)]
pub struct EstimateArgs {
    /// Message body (reads stdin when neither MESSAGE nor --file is given)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Read the message body from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Emit the estimate as a single JSON object
    #[arg(long)]
    pub json: bool,

    /// Counting mode for GSM-7 segment arithmetic: septets | code-points
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Config file path (otherwise auto-discovered in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed resolving working directory")?;
    let cfg = config::load_config(&cwd, args.config.as_deref())?;

    // CLI > config file > defaults
    let mode = match args.mode.as_deref() {
        Some(raw) => raw
            .parse::<CountingMode>()
            .map_err(|e| anyhow::anyhow!("Invalid counting mode: {e}"))?,
        None => cfg.counting_mode.unwrap_or_default(),
    };
    let json = args.json || cfg.format == Some(OutputFormat::Json);

    let message = read_message(args.message.as_deref(), args.file.as_deref())?;
    let est = estimate_with_mode(&message, mode);

    let warn_limit = cfg.segment_warn_limit.unwrap_or(config::Config::DEFAULT_SEGMENT_WARN_LIMIT);
    if est.segment_count > warn_limit {
        tracing::warn!(
            "Message needs {} segments (warn limit {})",
            est.segment_count,
            warn_limit
        );
    }

    if json {
        println!("{}", serde_json::to_string(&est)?);
    } else {
        println!("Characters: {}", est.character_count);
        println!("Encoding:   {}", est.encoding);
        println!("Units:      {}", est.unit_count);
        println!("Segments:   {}", est.segment_count);
    }

    Ok(())
}
