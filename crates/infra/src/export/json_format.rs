//! JSON rendering for the output column
//!
//! Compact JSON with a space after `,` and `:` (`{"a": 1, "b": [1, 2]}`),
//! non-ASCII written as-is. Downstream consumers of the output compare this
//! text verbatim, so the layout is fixed.

use std::io;

use piiarc_domain::{PiiArcError, Record, Result};
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::errors::InfraError;

/// `serde_json` formatter with `", "` and `": "` separators
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Render a record with [`SpacedFormatter`]
///
/// # Errors
/// Returns `Serialization` if the record cannot be written.
pub fn to_spaced_json(record: &Record) -> Result<String> {
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
    record.serialize(&mut serializer).map_err(InfraError::from)?;
    String::from_utf8(buffer).map_err(|e| PiiArcError::Serialization(e.to_string()))
}
