//! Inspect command implementation
//!
//! Per-code-point breakdown showing which characters cost two septets and
//! which ones push the whole message into UCS-2. This is the answer to "why
//! did my message jump to 3 segments" — usually a single smart quote or emoji.

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::PathBuf;
use unicode_width::UnicodeWidthChar;

use sms_meter::gsm7::{classify_char, CharClass};
use sms_meter::segment::estimate;

use super::input::read_message;

#[derive(Args)]
pub struct InspectArgs {
    /// Message body (reads stdin when neither MESSAGE nor --file is given)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Read the message body from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let message = read_message(args.message.as_deref(), args.file.as_deref())?;

    let mut non_gsm = 0usize;
    for (idx, ch) in message.chars().enumerate() {
        let (display, width) = printable(ch);
        let pad = " ".repeat(4usize.saturating_sub(width));

        let label = match classify_char(ch) {
            CharClass::Basic => style("gsm7").dim(),
            CharClass::Extension => style("gsm7-ext x2").yellow(),
            CharClass::Other => {
                non_gsm += 1;
                style("non-gsm").red()
            }
        };

        println!("{idx:>4}  {display}{pad}  U+{:04X}  {label}", ch as u32);
    }

    let est = estimate(&message);
    println!();
    println!("Characters: {}", est.character_count);
    println!("Encoding:   {}", est.encoding);
    println!("Units:      {}", est.unit_count);
    println!("Segments:   {}", est.segment_count);
    if non_gsm > 0 {
        println!(
            "{}",
            style(format!("{non_gsm} character(s) force UCS-2 encoding")).red()
        );
    }

    Ok(())
}

/// Printable form of a code point and its display width. Controls are shown
/// as escapes so the table stays one row per character.
fn printable(ch: char) -> (String, usize) {
    match ch {
        '\n' => ("\\n".to_string(), 2),
        '\r' => ("\\r".to_string(), 2),
        '\t' => ("\\t".to_string(), 2),
        '\u{c}' => ("\\f".to_string(), 2),
        c if c.is_control() => {
            let s = format!("\\u{:04x}", c as u32);
            let w = s.chars().count();
            (s, w)
        }
        c => (c.to_string(), UnicodeWidthChar::width(c).unwrap_or(1)),
    }
}
