//! Batch processor
//!
//! Pulls chunks from a [`RecordSource`], classifies them (optionally across
//! the rayon pool) and hands results to a [`ResultSink`] in input order.

use piiarc_domain::{BatchSummary, InputRow, PipelineConfig, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use super::ports::{RecordSource, ResultSink};
use crate::classification::{ClassificationService, ClassifiedRecord};

/// Drives classification between a source and a sink
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    service: ClassificationService,
    parallel: bool,
    chunk_size: usize,
}

impl BatchProcessor {
    pub fn new(service: ClassificationService, config: &PipelineConfig) -> Self {
        Self { service, parallel: config.parallel, chunk_size: config.chunk_size.max(1) }
    }

    /// Process every row of `source` into `sink`
    ///
    /// Skipped rows are counted and logged at debug level. Output order always
    /// matches input order, including in parallel mode.
    ///
    /// # Errors
    /// Propagates source and sink failures; classification itself cannot fail.
    pub fn run<S, K>(&self, source: &mut S, sink: &mut K) -> Result<BatchSummary>
    where
        S: RecordSource + ?Sized,
        K: ResultSink + ?Sized,
    {
        info!(parallel = self.parallel, chunk_size = self.chunk_size, "batch started");
        let mut summary = BatchSummary::default();

        loop {
            let chunk = source.next_chunk(self.chunk_size)?;
            if chunk.is_empty() {
                break;
            }
            let first_row = summary.rows_read;
            summary.rows_read += chunk.len();

            let mut rows = Vec::with_capacity(chunk.len());
            for (offset, row) in chunk.into_iter().enumerate() {
                match row {
                    Ok(row) => rows.push(row),
                    Err(reason) => {
                        debug!(row = first_row + offset + 1, %reason, "row skipped");
                        summary.rows_skipped += 1;
                    }
                }
            }

            for (row, result) in rows.iter().zip(self.classify_rows(&rows)) {
                sink.write(&row.record_id, &result)?;
                summary.rows_written += 1;
                if result.is_pii {
                    summary.pii_rows += 1;
                }
            }
        }

        sink.finish()?;
        info!(
            rows_read = summary.rows_read,
            rows_written = summary.rows_written,
            rows_skipped = summary.rows_skipped,
            pii_rows = summary.pii_rows,
            "batch finished"
        );
        Ok(summary)
    }

    fn classify_rows(&self, rows: &[InputRow]) -> Vec<ClassifiedRecord> {
        if self.parallel {
            rows.par_iter().map(|row| self.service.classify(&row.record)).collect()
        } else {
            rows.iter().map(|row| self.service.classify(&row.record)).collect()
        }
    }
}
