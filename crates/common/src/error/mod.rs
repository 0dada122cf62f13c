//! Common error types shared by the PiiArc crates
//!
//! 1. **`CommonError`**: failure shapes every module can embed instead of
//!    redefining them.
//! 2. **`ErrorClassification` trait**: severity and criticality, read by the
//!    pipeline when it reports a failure.
//! 3. **`ErrorSeverity` enum**: the severity scale used in log fields.
//!
//! ## Composition
//!
//! Module-specific errors embed `CommonError` and delegate classification to
//! it:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum ScannerError {
//!     #[error("Bad rule: {0}")]
//!     BadRule(String),
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//!
//! impl_error_classification!(ScannerError, Common,
//!     Self::BadRule(_) => {
//!         severity: ErrorSeverity::Error,
//!         critical: false,
//!     }
//! );
//! ```

use std::fmt;

/// Failure shapes shared across modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// A table or setting is inconsistent
    Validation { field: String, message: String },

    /// An invariant the code relies on does not hold
    Internal { message: String, context: String },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            Self::Internal { message, context } => {
                write!(f, "Internal error in '{}': {}", context, message)
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl ErrorClassification for CommonError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation { .. } => ErrorSeverity::Error,
            Self::Internal { .. } => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

impl CommonError {
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    pub fn internal_with_context<S: Into<String>, C: Into<String>>(message: S, context: C) -> Self {
        Self::Internal { message: message.into(), context: context.into() }
    }
}

/// Severity and criticality of an error
pub trait ErrorClassification {
    /// Severity level used in log fields
    fn severity(&self) -> ErrorSeverity;

    /// Whether the engine itself is unusable
    fn is_critical(&self) -> bool;
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The run cannot continue with this configuration
    Error,
    /// The engine itself is broken
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Implement `ErrorClassification` by delegating the embedded
/// `CommonError` variant and listing the rest
///
/// ```rust,ignore
/// impl_error_classification!(MyError, Common,
///     Self::Specific(_) => {
///         severity: ErrorSeverity::Error,
///         critical: false,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_error_classification {
    (
        $error_type:ty,
        $common_variant:ident
        $(,
            $variant:pat => {
                severity: $severity:expr,
                critical: $critical:expr
                $(,)?
            }
        )*
        $(,)?
    ) => {
        impl $crate::error::ErrorClassification for $error_type {
            fn severity(&self) -> $crate::error::ErrorSeverity {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::severity(e),
                    $(
                        $variant => $severity,
                    )*
                }
            }

            fn is_critical(&self) -> bool {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::is_critical(e),
                    $(
                        $variant => $critical,
                    )*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates `CommonError::validation` display and classification.
    ///
    /// Assertions:
    /// - Confirms the message names the offending field.
    /// - Confirms validation errors are `Error` severity and not critical.
    #[test]
    fn test_validation_error() {
        let err = CommonError::validation("phone", "claimed by more than one rule");
        assert_eq!(
            err.to_string(),
            "Validation error for field 'phone': claimed by more than one rule"
        );
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_critical());
    }

    #[test]
    fn test_internal_is_critical() {
        let err = CommonError::internal_with_context("no field rules", "rule_registry");
        assert!(err.is_critical());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Internal error in 'rule_registry': no field rules");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
