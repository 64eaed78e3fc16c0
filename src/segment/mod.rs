//! Encoding classification and segment arithmetic
//!
//! An SMS body is carried either in the GSM 03.38 7-bit default alphabet or,
//! when any code point falls outside it, in UCS-2. Each encoding has a
//! single-segment capacity and a smaller per-segment capacity once the message
//! concatenates (each part reserves header bytes for reassembly):
//!
//! | Encoding | single segment | concatenated segment |
//! |----------|----------------|----------------------|
//! | GSM-7    | 160            | 153                  |
//! | UCS-2    | 70             | 67                   |
//!
//! Everything here is a total, pure function over `&str`; callers substitute
//! template variables before estimating — `{{var}}` syntax is never parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::gsm7::{self, CharClass};

/// SMS transport encoding class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Gsm7,
    Ucs2,
}

impl Encoding {
    /// Capacity of a message that fits in one segment.
    pub fn single_segment_limit(self) -> usize {
        match self {
            Encoding::Gsm7 => 160,
            Encoding::Ucs2 => 70,
        }
    }

    /// Per-segment capacity once the message concatenates.
    pub fn concat_segment_limit(self) -> usize {
        match self {
            Encoding::Gsm7 => 153,
            Encoding::Ucs2 => 67,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Gsm7 => write!(f, "GSM-7"),
            Encoding::Ucs2 => write!(f, "UCS-2"),
        }
    }
}

/// How GSM-7 segment arithmetic counts extension characters.
///
/// The standard charges two septets for extension-table characters (`{`, `}`,
/// `€`, ...). Some legacy preview surfaces counted every character as one;
/// `CodePoints` reproduces that behavior for callers that must match them.
/// The result's `character_count` is always code points regardless of mode —
/// only segment arithmetic differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingMode {
    #[default]
    Septets,
    CodePoints,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown counting mode '{0}' (expected 'septets' or 'code-points')")]
pub struct ParseCountingModeError(String);

impl FromStr for CountingMode {
    type Err = ParseCountingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "septets" => Ok(CountingMode::Septets),
            "code-points" | "code_points" | "codepoints" => Ok(CountingMode::CodePoints),
            other => Err(ParseCountingModeError(other.to_string())),
        }
    }
}

impl fmt::Display for CountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingMode::Septets => write!(f, "septets"),
            CountingMode::CodePoints => write!(f, "code-points"),
        }
    }
}

/// Immutable result of estimating a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentEstimate {
    /// Unicode code points in the message (not UTF-16 units, not graphemes).
    pub character_count: usize,
    pub encoding: Encoding,
    /// Count the segment arithmetic actually used: septets for GSM-7 under
    /// `CountingMode::Septets`, otherwise `character_count`.
    pub unit_count: usize,
    /// Transport segments required, always >= 1.
    pub segment_count: usize,
}

/// Classify a message body: `Gsm7` iff every code point belongs to the
/// GSM 03.38 default alphabet (basic or extension table). The empty string
/// is vacuously `Gsm7`.
pub fn classify_encoding(message: &str) -> Encoding {
    if gsm7::is_gsm7(message) {
        Encoding::Gsm7
    } else {
        Encoding::Ucs2
    }
}

/// Number of Unicode code points in `message`.
pub fn count_characters(message: &str) -> usize {
    message.chars().count()
}

/// Estimate with the default (standard-correct) counting mode.
pub fn estimate(message: &str) -> SegmentEstimate {
    estimate_with_mode(message, CountingMode::default())
}

/// Estimate encoding class, character count, and transport segment count.
///
/// A message within the single-segment limit is one segment; beyond it, every
/// additional `concat_segment_limit` units (or part thereof) adds one. An
/// empty message still occupies one segment slot.
pub fn estimate_with_mode(message: &str, mode: CountingMode) -> SegmentEstimate {
    let mut character_count = 0usize;
    let mut septets = 0usize;
    let mut gsm = true;

    for ch in message.chars() {
        character_count += 1;
        match gsm7::classify_char(ch) {
            CharClass::Basic => septets += 1,
            CharClass::Extension => septets += 2,
            CharClass::Other => gsm = false,
        }
    }

    let encoding = if gsm { Encoding::Gsm7 } else { Encoding::Ucs2 };
    let unit_count = match (encoding, mode) {
        (Encoding::Gsm7, CountingMode::Septets) => septets,
        _ => character_count,
    };

    let single = encoding.single_segment_limit();
    let concat = encoding.concat_segment_limit();
    let segment_count =
        if unit_count <= single { 1 } else { 1 + (unit_count - single).div_ceil(concat) };

    SegmentEstimate { character_count, encoding, unit_count, segment_count }
}
