//! Domain types and models

pub mod batch;
pub mod record;

pub use batch::{BatchSummary, InputRow, OutputRow, SkipReason};
pub use record::{value_to_text, Record};
