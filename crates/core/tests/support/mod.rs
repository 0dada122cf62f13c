//! Shared test helpers for `piiarc-core` integration tests.

#![allow(dead_code)]

use piiarc_core::{ClassificationService, ClassifiedRecord};
use piiarc_domain::Record;
use serde_json::Value;

/// Convert a `json!` object literal into a record
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Classify with the built-in registry
pub fn classify(value: Value) -> ClassifiedRecord {
    ClassificationService::default().classify(&record(value))
}
