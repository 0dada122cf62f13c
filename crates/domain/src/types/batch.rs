//! Batch row types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::Record;

/// One parsed input row
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    pub record_id: String,
    pub record: Record,
}

/// One result row, ready for the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub record_id: String,
    /// Redacted record rendered as JSON text
    pub redacted_data_json: String,
    pub is_pii: bool,
}

impl OutputRow {
    /// Verdict as written to the output column
    pub const fn is_pii_label(&self) -> &'static str {
        if self.is_pii {
            "True"
        } else {
            "False"
        }
    }
}

/// Why an input row produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingRecordId,
    MissingPayload,
    MalformedPayload,
    NotAnObject,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MissingRecordId => "missing record id",
            Self::MissingPayload => "missing payload",
            Self::MalformedPayload => "malformed payload",
            Self::NotAnObject => "payload is not an object",
        };
        f.write_str(label)
    }
}

/// Counters for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Data rows seen in the input, excluding the header
    pub rows_read: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
    /// Written rows whose verdict was PII
    pub pii_rows: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} read, {} written, {} skipped, {} flagged as PII",
            self.rows_read, self.rows_written, self.rows_skipped, self.pii_rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_label_uses_capitalised_booleans() {
        let mut row = OutputRow {
            record_id: "1".into(),
            redacted_data_json: "{}".into(),
            is_pii: true,
        };
        assert_eq!(row.is_pii_label(), "True");
        row.is_pii = false;
        assert_eq!(row.is_pii_label(), "False");
    }

    #[test]
    fn summary_reads_naturally() {
        let summary = BatchSummary { rows_read: 5, rows_written: 4, rows_skipped: 1, pii_rows: 3 };
        assert_eq!(summary.to_string(), "5 read, 4 written, 1 skipped, 3 flagged as PII");
    }

    #[test]
    fn skip_reasons_read_naturally() {
        assert_eq!(SkipReason::NotAnObject.to_string(), "payload is not an object");
    }
}
