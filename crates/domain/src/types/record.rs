//! Record model
//!
//! A record is the parsed JSON object of one input row. Key order is the
//! order of the source document and is kept through redaction.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Ordered field name to JSON value mapping
pub type Record = Map<String, Value>;

/// Text form of a value as seen by the structural rules
///
/// Strings are used as-is, numbers by their JSON text, booleans as
/// `True`/`False`, null as `None`. Arrays and objects use compact JSON.
pub fn value_to_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::Null => Cow::Borrowed("None"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_and_strings_coerce_identically() {
        assert_eq!(value_to_text(&json!(9876543210_u64)), "9876543210");
        assert_eq!(value_to_text(&json!("9876543210")), "9876543210");
        assert_eq!(value_to_text(&json!(4.5)), "4.5");
    }

    #[test]
    fn wide_numbers_keep_their_digits() {
        let value: Value = serde_json::from_str("123456789012345678901234567890").unwrap();
        assert_eq!(value_to_text(&value), "123456789012345678901234567890");
    }

    #[test]
    fn other_scalars_use_fixed_spellings() {
        assert_eq!(value_to_text(&json!(true)), "True");
        assert_eq!(value_to_text(&json!(false)), "False");
        assert_eq!(value_to_text(&Value::Null), "None");
        assert_eq!(value_to_text(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn record_keeps_insertion_order() {
        let record: Record =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }
}
