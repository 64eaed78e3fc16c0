//! Configuration loading
//!
//! Handles loading from config files with proper precedence
//! (CLI > File > Defaults). File discovery looks for `sms-meter.toml` /
//! `.sms-meter.toml` and the yaml variants in the working directory.

pub mod loader;

pub use loader::load_config;

use serde::Deserialize;

use crate::segment::CountingMode;

/// Output format for the `estimate` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// File-level configuration. Every field is optional; CLI flags override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub counting_mode: Option<CountingMode>,
    pub format: Option<OutputFormat>,
    /// Warn (via tracing) when an estimate exceeds this many segments.
    pub segment_warn_limit: Option<usize>,
}

impl Config {
    pub const DEFAULT_SEGMENT_WARN_LIMIT: usize = 10;
}
