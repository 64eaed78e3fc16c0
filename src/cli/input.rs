//! Message-source resolution shared by the subcommands

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Resolve the message body from a positional argument, a file, or stdin.
///
/// Passing both an argument and `--file` is an error. File and stdin sources
/// drop one trailing newline so `echo`/heredoc pipelines measure the message,
/// not the line terminator; an argument is taken verbatim.
pub fn read_message(message: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (message, file) {
        (Some(_), Some(_)) => {
            anyhow::bail!("Cannot specify both MESSAGE and --file")
        }
        (Some(msg), None) => Ok(msg.to_string()),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed reading message file: {}", path.display()))?;
            Ok(strip_trailing_newline(content))
        }
        (None, None) => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed reading message from stdin")?;
            Ok(strip_trailing_newline(content))
        }
    }
}

fn strip_trailing_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
