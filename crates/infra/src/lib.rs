//! # PiiArc Infrastructure
//!
//! Implementations of the core batch ports and the rest of the impure code.
//!
//! This crate contains:
//! - CSV ingestion with payload un-escaping and JSON repair
//! - CSV result writer with the fixed JSON layout
//! - Configuration loading (files and environment)
//! - Logging setup
//! - The file-to-file batch pipeline
//!
//! ## Architecture
//! - Implements traits defined in `piiarc-core`
//! - Depends on `piiarc-domain` and `piiarc-core`
//! - Contains all file I/O

pub mod config;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod observability;
pub mod pipeline;

// Re-export commonly used items
pub use errors::InfraError;
pub use export::CsvResultSink;
pub use ingest::CsvRecordSource;
pub use observability::init_tracing;
pub use pipeline::{run_file, RunReport};
