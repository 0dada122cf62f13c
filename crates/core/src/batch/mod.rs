//! Batch processing
//!
//! Ports for row sources and result sinks, and the processor that drives
//! classification between them.

pub mod ports;
pub mod processor;

pub use ports::{RecordSource, ResultSink, SourceRow};
pub use processor::BatchProcessor;
