use thiserror::Error;

use crate::error::{CommonError, ErrorSeverity};
use crate::impl_error_classification;

/// Errors raised while preparing the PII rule set
///
/// Classification itself never fails; these only surface from the registry
/// self-check.
#[derive(Debug, Error)]
pub enum PiiError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("Pattern compilation error for '{rule}': {message}")]
    PatternCompilation { rule: &'static str, message: String },
}

pub type PiiResult<T> = Result<T, PiiError>;

impl_error_classification!(PiiError, Common,
    Self::PatternCompilation { .. } => {
        severity: ErrorSeverity::Critical,
        critical: true,
    }
);
