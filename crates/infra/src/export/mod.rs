//! Output side of the batch: classified records to CSV rows

pub mod csv_sink;
pub mod json_format;

pub use csv_sink::CsvResultSink;
pub use json_format::{to_spaced_json, SpacedFormatter};
