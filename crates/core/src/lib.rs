//! # PiiArc Core
//!
//! Pure detection and redaction logic - no I/O.
//!
//! This crate contains:
//! - The per-record decision structure and classification service
//! - The embedded-text scanner
//! - Port interfaces (traits) for batch sources and sinks
//! - The batch processor that drives classification between them
//!
//! ## Architecture Principles
//! - Depends on `piiarc-common` and `piiarc-domain` only
//! - No file, network or platform code
//! - All external collaborators via traits

pub mod batch;
pub mod classification;

// Re-export specific items to avoid ambiguity
pub use batch::{BatchProcessor, RecordSource, ResultSink, SourceRow};
pub use classification::{ClassificationService, ClassifiedRecord, Decision, PendingRedaction};
