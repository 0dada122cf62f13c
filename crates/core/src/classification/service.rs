//! Classification service - per-record detection and redaction

use std::sync::Arc;

use piiarc_common::privacy::patterns::RuleRegistry;
use piiarc_domain::Record;
use tracing::{instrument, trace};

use super::decision::Decision;
use super::text_scanner;

/// Outcome of classifying one record
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    /// Redacted copy with the same key set as the input
    pub record: Record,
    pub is_pii: bool,
    pub decision: Decision,
    /// Accepted matches from the embedded scan
    pub embedded_hits: usize,
}

/// Applies the rule registry to records
///
/// Classification is infallible and keeps no state between calls, so one
/// service can be shared across worker threads.
#[derive(Debug, Clone)]
pub struct ClassificationService {
    registry: Arc<RuleRegistry>,
}

impl Default for ClassificationService {
    fn default() -> Self {
        Self::new(Arc::new(RuleRegistry::builtin()))
    }
}

impl ClassificationService {
    /// Create a service over a specific registry
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// Classify one record and build its redacted copy
    #[instrument(level = "trace", skip_all, fields(fields = record.len()))]
    pub fn classify(&self, record: &Record) -> ClassifiedRecord {
        let decision = Decision::evaluate(&self.registry, record);
        let mut redacted = resolve_fields(record, &decision);
        let embedded_hits = text_scanner::scan_record(&self.registry, record, &mut redacted);
        let is_pii = decision.is_pii_before_scan() || embedded_hits > 0;

        trace!(
            standalone = decision.standalone().len(),
            markers = decision.markers().len(),
            pair_present = decision.pair_present(),
            embedded_hits,
            is_pii,
            "record classified"
        );

        ClassifiedRecord { record: redacted, is_pii, decision, embedded_hits }
    }
}

/// Final value of every field before the embedded scan
///
/// A matched field takes its masked value unless its category is restored;
/// every other field keeps the original value.
fn resolve_fields(record: &Record, decision: &Decision) -> Record {
    let restored = decision.restored_categories();
    let mut redacted = record.clone();

    for pending in decision.redactions() {
        if restored.contains(&pending.category) {
            continue;
        }
        if let Some(value) = redacted.get_mut(pending.field) {
            *value = pending.masked.clone().into();
        }
    }

    redacted
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn restored_fields_keep_original_type() {
        let service = ClassificationService::default();
        let input = record(json!({"city": "Pune", "pin_code": 411001}));
        let result = service.classify(&input);
        assert!(!result.is_pii);
        assert_eq!(result.record, input);
        assert_eq!(result.record["pin_code"], json!(411001));
    }

    #[test]
    fn verdict_combines_all_sources() {
        let service = ClassificationService::default();
        let result = service.classify(&record(json!({
            "device_id": "DEV-99887",
            "notes": "reach me on 9988776655"
        })));
        assert!(!result.decision.is_pii_before_scan());
        assert_eq!(result.embedded_hits, 1);
        assert!(result.is_pii);
        // Lone device marker is restored before the scan runs
        assert_eq!(result.record["device_id"], "DEV-99887");
    }

    #[test]
    fn key_order_is_preserved() {
        let service = ClassificationService::default();
        let input = record(json!({"zeta": "x", "phone": "9876543210", "alpha": 1}));
        let result = service.classify(&input);
        let keys: Vec<_> = result.record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "phone", "alpha"]);
    }
}
