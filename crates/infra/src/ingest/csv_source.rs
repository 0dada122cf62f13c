//! CSV record source
//!
//! Reads rows with a `record_id` column and a JSON payload column spelled
//! `Data_json` or `data_json`. Short rows are tolerated; a row without an id
//! or a usable payload is handed to the processor as a skip.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use piiarc_core::{RecordSource, SourceRow};
use piiarc_domain::constants::{PAYLOAD_COLUMNS, RECORD_ID_COLUMN};
use piiarc_domain::{InputRow, PiiArcError, Result, SkipReason};

use super::payload::parse_payload;
use crate::errors::InfraError;

/// [`RecordSource`] over a CSV reader
pub struct CsvRecordSource<R: Read> {
    reader: csv::Reader<R>,
    record_id_index: Option<usize>,
    payload_indexes: Vec<usize>,
    buffer: StringRecord,
}

impl CsvRecordSource<File> {
    /// Open a CSV file
    ///
    /// # Errors
    /// `InputNotFound` when the file does not exist, `Io`/`Csv` for other
    /// failures opening it or reading its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PiiArcError::InputNotFound(path.display().to_string()),
            _ => InfraError::from(e).into(),
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read> CsvRecordSource<R> {
    /// Wrap a reader and resolve the header columns
    ///
    /// # Errors
    /// Returns `Csv` if the header cannot be read.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers().map_err(InfraError::from)?.clone();

        let position = |name: &str| headers.iter().position(|header| header == name);
        let record_id_index = position(RECORD_ID_COLUMN);
        let payload_indexes: Vec<usize> =
            PAYLOAD_COLUMNS.iter().filter_map(|&name| position(name)).collect();

        if record_id_index.is_none() {
            tracing::warn!(column = RECORD_ID_COLUMN, "input has no record id column");
        }
        if payload_indexes.is_empty() {
            tracing::warn!(columns = ?PAYLOAD_COLUMNS, "input has no payload column");
        }

        Ok(Self { reader, record_id_index, payload_indexes, buffer: StringRecord::new() })
    }

    fn parse_row(&self, row: &StringRecord) -> SourceRow {
        let record_id = self
            .record_id_index
            .and_then(|index| row.get(index))
            .ok_or(SkipReason::MissingRecordId)?;

        let payload = self
            .payload_indexes
            .iter()
            .filter_map(|index| row.get(*index))
            .find(|cell| !cell.is_empty())
            .ok_or(SkipReason::MissingPayload)?;

        let record = parse_payload(payload)?;
        Ok(InputRow { record_id: record_id.to_string(), record })
    }
}

impl<R: Read> RecordSource for CsvRecordSource<R> {
    fn next_chunk(&mut self, max: usize) -> Result<Vec<SourceRow>> {
        let mut rows = Vec::with_capacity(max.min(1024));
        while rows.len() < max {
            if !self.reader.read_record(&mut self.buffer).map_err(InfraError::from)? {
                break;
            }
            rows.push(self.parse_row(&self.buffer));
        }
        Ok(rows)
    }
}
