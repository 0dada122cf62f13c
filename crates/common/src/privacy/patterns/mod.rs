//! PII pattern rules
//!
//! `rules` holds the validators and embedded finders, `redact` the maskers,
//! and `registry` ties each record field to a category, validator and masker.

pub mod error;
pub mod redact;
pub mod registry;
pub mod rules;
pub mod types;

pub use error::{PiiError, PiiResult};
pub use redact::REDACTED_SENTINEL;
pub use registry::{EmbeddedRule, FieldRule, RuleRegistry, RuleShape};
pub use types::{CategoryKind, PiiCategory};
