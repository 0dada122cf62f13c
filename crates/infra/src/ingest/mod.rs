//! Input side of the batch: CSV rows to parsed records

pub mod csv_source;
pub mod payload;

pub use csv_source::CsvRecordSource;
pub use payload::parse_payload;
