// SPDX-License-Identifier: MIT

//! Label/value option record derived from one segment of user input.

use serde::Serialize;

/// A single dropdown option. Serializes with `label` before `value` to match
/// the JSON shape consumers of the copied payload expect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OptionRecord {
    /// Whitespace-trimmed segment text, casing preserved.
    pub label: String,
    /// Lower-cased label with internal whitespace runs collapsed to `-`.
    pub value: String,
}

impl OptionRecord {
    /// Build a record from one raw comma/newline-delimited segment.
    ///
    /// The value is derived from the trimmed label alone, so two passes over
    /// the same segment always produce the same record.
    pub fn from_segment(segment: &str) -> Self {
        let label = segment.trim().to_string();
        let value = slug(&label);
        Self { label, value }
    }
}

/// Lowercase `label` and replace every maximal run of whitespace with a
/// single hyphen. The label is already trimmed, so hyphens never appear at
/// the ends.
fn slug(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::OptionRecord;

    #[test]
    fn from_segment_trims_label_and_preserves_casing() {
        let record = OptionRecord::from_segment("  Red Color ");

        assert_eq!(record.label, "Red Color");
        assert_eq!(record.value, "red-color");
    }

    #[test]
    fn value_collapses_internal_whitespace_runs() {
        let record = OptionRecord::from_segment("Deep   Sea\tBlue");

        assert_eq!(record.value, "deep-sea-blue");
    }

    #[test]
    fn empty_segment_yields_empty_record() {
        let record = OptionRecord::from_segment("   ");

        assert_eq!(record.label, "");
        assert_eq!(record.value, "");
    }

    // The derivation must be a pure function of the segment text.
    #[test]
    fn from_segment_is_deterministic() {
        assert_eq!(
            OptionRecord::from_segment(" Mixed  CASE input "),
            OptionRecord::from_segment(" Mixed  CASE input ")
        );
    }

    #[test]
    fn serializes_label_before_value() {
        let record = OptionRecord::from_segment("blue");
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"label":"blue","value":"blue"}"#);
    }
}
