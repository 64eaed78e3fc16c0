//! sms-meter: SMS encoding and segment estimation
//!
//! Given a fully-rendered message body (template variables already
//! substituted), determine whether it fits the GSM 03.38 default alphabet or
//! requires UCS-2, count its characters, and compute how many transport
//! segments it will occupy. Everything is a pure function; it is safe to call
//! on every keystroke.
//!
//! ```
//! use sms_meter::{estimate, Encoding};
//!
//! let est = estimate("Flash sale: 20% off everything until 9pm!");
//! assert_eq!(est.encoding, Encoding::Gsm7);
//! assert_eq!(est.segment_count, 1);
//! ```

pub mod config;
pub mod gsm7;
pub mod segment;

pub use segment::{
    classify_encoding, count_characters, estimate, estimate_with_mode, CountingMode, Encoding,
    SegmentEstimate,
};
