//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use csv::Error as CsvError;
use piiarc_common::privacy::PiiError;
use piiarc_domain::PiiArcError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PiiArcError);

impl From<InfraError> for PiiArcError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PiiArcError> for InfraError {
    fn from(value: PiiArcError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
pub(crate) trait IntoPiiArcError {
    fn into_piiarc(self) -> PiiArcError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PiiArcError */
/* -------------------------------------------------------------------------- */

impl IntoPiiArcError for IoError {
    fn into_piiarc(self) -> PiiArcError {
        match self.kind() {
            ErrorKind::PermissionDenied => PiiArcError::Io(format!("permission denied: {self}")),
            _ => PiiArcError::Io(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_piiarc())
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → PiiArcError */
/* -------------------------------------------------------------------------- */

impl IntoPiiArcError for CsvError {
    fn into_piiarc(self) -> PiiArcError {
        let line = self.position().map(|pos| pos.line());
        match self.into_kind() {
            csv::ErrorKind::Io(err) => err.into_piiarc(),
            csv::ErrorKind::Utf8 { err, .. } => match line {
                Some(line) => PiiArcError::Csv(format!("invalid UTF-8 on line {line}: {err}")),
                None => PiiArcError::Csv(format!("invalid UTF-8: {err}")),
            },
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                PiiArcError::Csv(format!(
                    "row on line {} has {len} fields, expected {expected_len}",
                    line.unwrap_or_default()
                ))
            }
            other => PiiArcError::Csv(format!("{other:?}")),
        }
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        InfraError(value.into_piiarc())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / rule registry → PiiArcError */
/* -------------------------------------------------------------------------- */

impl IntoPiiArcError for JsonError {
    fn into_piiarc(self) -> PiiArcError {
        PiiArcError::Serialization(format!("JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_piiarc())
    }
}

impl IntoPiiArcError for PiiError {
    fn into_piiarc(self) -> PiiArcError {
        PiiArcError::Internal(format!("rule registry unavailable: {self}"))
    }
}

impl From<PiiError> for InfraError {
    fn from(value: PiiError) -> Self {
        InfraError(value.into_piiarc())
    }
}
