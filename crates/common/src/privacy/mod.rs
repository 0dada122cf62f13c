//! Privacy primitives: PII categories, the structural rules that recognise
//! them, and the maskers applied once they are found.

pub mod patterns;

pub use patterns::{PiiCategory, PiiError, PiiResult, RuleRegistry, REDACTED_SENTINEL};
