//! Batch pipeline
//!
//! Wires the CSV source and sink to the core batch processor for one input
//! file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use piiarc_common::privacy::patterns::RuleRegistry;
use piiarc_common::ErrorClassification;
use piiarc_core::{BatchProcessor, ClassificationService};
use piiarc_domain::{BatchSummary, Config, PiiArcError, Result};
use tracing::{error, info};

use crate::errors::InfraError;
use crate::export::CsvResultSink;
use crate::ingest::CsvRecordSource;

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub summary: BatchSummary,
}

/// Classify every row of `input` and write results to the configured output
///
/// # Errors
/// - `InputNotFound` if `input` does not exist; no output file is created
/// - `Internal` if the rule registry fails its self-check
/// - `Io`/`Csv`/`Serialization` for failures reading or writing rows
pub fn run_file(input: &Path, config: &Config) -> Result<RunReport> {
    if !input.is_file() {
        return Err(PiiArcError::InputNotFound(input.display().to_string()));
    }

    let registry = checked_registry(RuleRegistry::builtin())?;
    let service = ClassificationService::new(Arc::new(registry));
    let processor = BatchProcessor::new(service, &config.pipeline);

    let output_path = PathBuf::from(&config.output.path);
    info!(input = %input.display(), output = %output_path.display(), "processing input");

    let mut source = CsvRecordSource::open(input)?;
    let mut sink = CsvResultSink::create(&output_path)?;
    let summary = processor.run(&mut source, &mut sink)?;

    Ok(RunReport { output_path, summary })
}

/// Run the registry self-check, logging a failure with its severity
fn checked_registry(registry: RuleRegistry) -> Result<RuleRegistry> {
    if let Err(err) = registry.health_check() {
        error!(
            severity = %err.severity(),
            critical = err.is_critical(),
            error = %err,
            "rule registry failed its self-check"
        );
        return Err(InfraError::from(err).into());
    }
    Ok(registry)
}
