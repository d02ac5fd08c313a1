// SPDX-License-Identifier: MIT

//! Business logic for turning raw word lists into dropdown options.
//!
//! Responsibilities:
//! - Split user input on comma/newline delimiters into option records.
//! - Gate pasted text against the allowed character set.
//! - Render an option list as the pretty-printed JSON clipboard payload.

use crate::models::option_record::OptionRecord;

/// Convert raw input into one option record per comma- or newline-delimited
/// segment.
///
/// Every delimiter occurrence separates segments, so consecutive or trailing
/// delimiters yield records with empty labels. The function is total: any
/// input, including the empty string, produces a well-defined list, and the
/// record order matches the segment order.
pub fn convert(raw_input: &str) -> Vec<OptionRecord> {
    raw_input
        .split([',', '\n'])
        .map(OptionRecord::from_segment)
        .collect()
}

/// Paste gate: true when every character is an ASCII word character
/// (letter, digit, underscore), whitespace, or `&`.
///
/// Only paste events are checked; typed input is intentionally not filtered.
pub fn paste_allowed(candidate: &str) -> bool {
    candidate
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '&' || c.is_whitespace())
}

/// Render the option list as pretty-printed JSON with two-space indentation.
///
/// This is both the preview text and the clipboard payload.
pub fn to_pretty_json(options: &[OptionRecord]) -> String {
    // Two plain string fields per record; serialization cannot fail.
    serde_json::to_string_pretty(options).expect("option records always serialize")
}
