//! sms-meter: estimate SMS encoding class and segment counts
//!
//! Thin binary wrapper; all logic lives in the library crate so UI layers and
//! scripts share one calculator.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
