//! Embedded PII scan over free-text fields

use piiarc_common::privacy::patterns::RuleRegistry;
use piiarc_domain::Record;
use serde_json::Value;

/// Mask PII substrings found in the string fields of `original`
///
/// Matches are searched in the original text and replaced (every
/// occurrence) in the current `working` value, so a field that an earlier
/// step already masked in full stays masked. Fields the registry consumes
/// whole are skipped, as are non-string values.
///
/// Returns the number of accepted matches.
pub fn scan_record(registry: &RuleRegistry, original: &Record, working: &mut Record) -> usize {
    let mut hits = 0;

    for (field, value) in original {
        let Value::String(text) = value else {
            continue;
        };
        if registry.is_scan_exempt(field) {
            continue;
        }
        let Some(Value::String(current)) = working.get_mut(field) else {
            continue;
        };

        for rule in registry.embedded() {
            for found in (rule.find)(text) {
                let masked = (rule.redact)(found);
                if current.contains(found) {
                    *current = current.replace(found, &masked);
                }
                hits += 1;
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    fn scan(value: Value) -> (Record, usize) {
        let original = record(value);
        let mut working = original.clone();
        let hits = scan_record(&RuleRegistry::builtin(), &original, &mut working);
        (working, hits)
    }

    #[test]
    fn masks_phone_inside_text() {
        let (working, hits) = scan(json!({"notes": "Call me at 9988776655 urgently"}));
        assert_eq!(hits, 1);
        assert_eq!(working["notes"], "Call me at 99XXXXXX55 urgently");
    }

    #[test]
    fn masks_each_independent_match() {
        let (working, hits) = scan(json!({
            "notes": "9988776655, backup 7766554433, mail ravi@example.com, id 2345 6789 0123"
        }));
        assert_eq!(hits, 4);
        assert_eq!(
            working["notes"],
            "99XXXXXX55, backup 77XXXXXX33, mail raXXX@example.com, id 23XXXXXXXX23"
        );
    }

    #[test]
    fn skips_fields_consumed_whole() {
        let (working, hits) = scan(json!({
            "name": "Ravi 9988776655",
            "email": "ravi@example.com",
            "phone": "call 9988776655"
        }));
        assert_eq!(hits, 0);
        assert_eq!(working["name"], "Ravi 9988776655");
        assert_eq!(working["phone"], "call 9988776655");
    }

    #[test]
    fn skips_non_string_values() {
        let (working, hits) = scan(json!({"order_id": 9988776655_u64}));
        assert_eq!(hits, 0);
        assert_eq!(working["order_id"], json!(9988776655_u64));
    }

    #[test]
    fn sentinel_in_working_copy_survives() {
        let original = record(json!({"city": "Pune 9988776655"}));
        let mut working = original.clone();
        working.insert("city".into(), json!("[REDACTED_PII]"));

        let hits = scan_record(&RuleRegistry::builtin(), &original, &mut working);
        assert_eq!(hits, 1);
        assert_eq!(working["city"], "[REDACTED_PII]");
    }

    #[test]
    fn rejects_invalid_prefixes() {
        let (working, hits) = scan(json!({"notes": "ref 1234567890 and 0234 5678 9012"}));
        assert_eq!(hits, 0);
        assert_eq!(working["notes"], "ref 1234567890 and 0234 5678 9012");
    }
}
