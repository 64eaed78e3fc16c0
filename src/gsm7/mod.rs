//! GSM 03.38 default alphabet tables
//!
//! Membership queries only: this module answers whether a character fits the
//! 7-bit default alphabet and at what septet cost. It does not produce wire
//! encodings. The escape slot (0x1B) is not a message character and is
//! deliberately absent from the basic table.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The 127 printable members of the GSM 03.38 basic table, in table order
/// (rows 0x00..0x7F, escape slot skipped).
const BASIC_TABLE: &str = concat!(
    "@£$¥èéùìòÇ\nØø\rÅå",
    "Δ_ΦΓΛΩΠΨΣΘΞÆæßÉ",
    " !\"#¤%&'()*+,-./",
    "0123456789:;<=>?",
    "¡ABCDEFGHIJKLMNO",
    "PQRSTUVWXYZÄÖÑÜ§",
    "¿abcdefghijklmno",
    "pqrstuvwxyzäöñüà",
);

/// Escape-table characters. Each costs two septets on the wire (ESC + code).
const EXTENSION_TABLE: &str = "\u{c}^{}\\[~]|€";

static BASIC_SET: Lazy<HashSet<char>> = Lazy::new(|| BASIC_TABLE.chars().collect());
static EXTENSION_SET: Lazy<HashSet<char>> = Lazy::new(|| EXTENSION_TABLE.chars().collect());

/// Where a character falls relative to the GSM 03.38 default alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Basic table, one septet.
    Basic,
    /// Extension table, two septets (escape + code).
    Extension,
    /// Outside the default alphabet; forces UCS-2.
    Other,
}

impl CharClass {
    /// Septet cost of the character, or `None` if it is not representable.
    pub fn septets(self) -> Option<usize> {
        match self {
            CharClass::Basic => Some(1),
            CharClass::Extension => Some(2),
            CharClass::Other => None,
        }
    }
}

pub fn classify_char(ch: char) -> CharClass {
    if BASIC_SET.contains(&ch) {
        CharClass::Basic
    } else if EXTENSION_SET.contains(&ch) {
        CharClass::Extension
    } else {
        CharClass::Other
    }
}

/// True iff every code point belongs to the default alphabet (basic or
/// extension table). Vacuously true for the empty string.
pub fn is_gsm7(text: &str) -> bool {
    text.chars().all(|ch| classify_char(ch) != CharClass::Other)
}

/// Septet length of `text`, counting extension characters as 2.
///
/// Returns `None` as soon as any code point falls outside the default
/// alphabet — a septet length is meaningless for a UCS-2 message.
pub fn septet_len(text: &str) -> Option<usize> {
    text.chars().try_fold(0usize, |acc, ch| Some(acc + classify_char(ch).septets()?))
}
