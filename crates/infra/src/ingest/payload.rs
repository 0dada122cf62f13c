//! Payload extraction and best-effort JSON repair
//!
//! Exported spreadsheets often wrap the JSON column in an extra pair of
//! quotes with inner quotes doubled, and hand-edited rows leave dates and
//! bare words unquoted. Both are fixed up before a row is given up on.

use once_cell::sync::Lazy;
use piiarc_domain::{Record, SkipReason};
use regex::Regex;
use serde_json::Value;

type RepairPattern = Lazy<Result<Regex, regex::Error>>;

static BARE_DATE: RepairPattern =
    Lazy::new(|| Regex::new(r"(:\s*)(\d{4}[-/.]\d{2}[-/.]\d{2})([\s,}])"));
static BARE_WORD: RepairPattern =
    Lazy::new(|| Regex::new(r"(:\s*)([a-zA-Z_][a-zA-Z0-9_]*)([\s,}])"));

/// Undo spreadsheet quoting: one wrapping pair of quotes, then `""` → `"`
pub fn normalize(raw: &str) -> String {
    let inner = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };
    inner.replace("\"\"", "\"")
}

/// Quote unquoted date-like tokens and bare words that follow a `:`
pub fn repair(json: &str) -> String {
    let dated = quote_with(&BARE_DATE, json);
    quote_with(&BARE_WORD, &dated)
}

fn quote_with(pattern: &RepairPattern, text: &str) -> String {
    match Lazy::force(pattern) {
        Ok(re) => re.replace_all(text, "${1}\"${2}\"${3}").into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Parse a raw payload cell into a record
///
/// # Errors
/// `MalformedPayload` when the text is not JSON even after repair,
/// `NotAnObject` when it parses to something other than an object.
pub fn parse_payload(raw: &str) -> Result<Record, SkipReason> {
    let normalized = normalize(raw);
    let value = match serde_json::from_str::<Value>(&normalized) {
        Ok(value) => value,
        Err(_) => serde_json::from_str::<Value>(&repair(&normalized))
            .map_err(|_| SkipReason::MalformedPayload)?,
    };

    match value {
        Value::Object(record) => Ok(record),
        _ => Err(SkipReason::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_wrapping_quotes_and_doubled_quotes() {
        assert_eq!(normalize(r#""{""phone"": ""9876543210""}""#), r#"{"phone": "9876543210"}"#);
        assert_eq!(normalize(r#"{"a": 1}"#), r#"{"a": 1}"#);
        assert_eq!(normalize("\""), "\"");
    }

    #[test]
    fn repairs_bare_dates_and_words() {
        let repaired = repair(r#"{"dob": 1990-05-12, "status": active}"#);
        assert_eq!(repaired, r#"{"dob": "1990-05-12", "status": "active"}"#);
    }

    #[test]
    fn valid_json_skips_repair() {
        // The repair pass would quote `true`; it only runs after a failed parse
        let record = parse_payload(r#"{"ok": true, "n": 3}"#).unwrap();
        assert_eq!(record["ok"], Value::Bool(true));
    }

    #[test]
    fn parses_repaired_payload() {
        let record = parse_payload(r#"{"order": 42, "date": 2024/01/31, "state": shipped}"#)
            .expect("repairable payload");
        assert_eq!(record["date"], "2024/01/31");
        assert_eq!(record["state"], "shipped");
        assert_eq!(record["order"], 42);
    }

    #[test]
    fn rejects_unrepairable_and_non_objects() {
        assert_eq!(parse_payload("{ nope"), Err(SkipReason::MalformedPayload));
        assert_eq!(parse_payload("[1, 2]"), Err(SkipReason::NotAnObject));
        assert_eq!(parse_payload("\"text\""), Err(SkipReason::NotAnObject));
    }

    #[test]
    fn keeps_field_order() {
        let record = parse_payload(r#"{"b": 1, "a": 2}"#).unwrap();
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
