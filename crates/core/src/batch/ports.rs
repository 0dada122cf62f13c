//! Port interfaces for batch processing

use piiarc_domain::{InputRow, Result, SkipReason};

use crate::classification::ClassifiedRecord;

/// One row pulled from a source: parsed, or skipped with a reason
pub type SourceRow = std::result::Result<InputRow, SkipReason>;

/// Supplier of input rows
pub trait RecordSource {
    /// Read up to `max` rows; an empty vector means the source is exhausted
    ///
    /// # Errors
    /// Returns an error only for failures that should stop the whole run.
    fn next_chunk(&mut self, max: usize) -> Result<Vec<SourceRow>>;
}

/// Consumer of classified rows, called in input order
pub trait ResultSink {
    /// Write one classified row
    fn write(&mut self, record_id: &str, result: &ClassifiedRecord) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}
