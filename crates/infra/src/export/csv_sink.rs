//! CSV result sink

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use piiarc_core::{ClassifiedRecord, ResultSink};
use piiarc_domain::constants::OUTPUT_HEADER;
use piiarc_domain::{OutputRow, Result};

use super::json_format::to_spaced_json;
use crate::errors::InfraError;

/// [`ResultSink`] writing `record_id,redacted_data_json,is_pii` rows
pub struct CsvResultSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvResultSink<File> {
    /// Create (or truncate) the output file and write the header
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be created, `Csv` if the header
    /// cannot be written.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(InfraError::from)?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvResultSink<W> {
    /// Wrap a writer and emit the header row
    ///
    /// # Errors
    /// Returns `Csv` if the header cannot be written.
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = WriterBuilder::new().terminator(Terminator::CRLF).from_writer(writer);
        writer.write_record(OUTPUT_HEADER).map_err(InfraError::from)?;
        Ok(Self { writer })
    }

    #[cfg(test)]
    fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| InfraError::from(e.into_error()).into())
    }

    fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.writer
            .write_record([
                row.record_id.as_str(),
                row.redacted_data_json.as_str(),
                row.is_pii_label(),
            ])
            .map_err(InfraError::from)?;
        Ok(())
    }
}

impl<W: Write> ResultSink for CsvResultSink<W> {
    fn write(&mut self, record_id: &str, result: &ClassifiedRecord) -> Result<()> {
        let row = OutputRow {
            record_id: record_id.to_string(),
            redacted_data_json: to_spaced_json(&result.record)?,
            is_pii: result.is_pii,
        };
        self.write_row(&row)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(InfraError::from)?;
        Ok(())
    }
}
