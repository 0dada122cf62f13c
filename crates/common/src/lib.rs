//! Shared building blocks for the PiiArc crates.
//!
//! - `error`: the common error type and severity classification
//! - `privacy`: PII categories, structural rules, maskers and the rule registry
//! - `utils`: small declarative macros

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod error;
#[macro_use]
pub mod utils;
pub mod privacy;

pub use error::{CommonError, ErrorClassification, ErrorSeverity};
pub use privacy::patterns::{CategoryKind, PiiCategory, PiiError, PiiResult, RuleRegistry};
