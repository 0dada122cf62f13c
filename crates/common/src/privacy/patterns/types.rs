use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_tag_conversions;

/// PII categories recognized by the rule registry
///
/// Each variant maps to a stable lowercase tag (`phone`, `upi_id`, `ip`, ...)
/// which is what appears in logs and serialized decisions.
///
/// # Examples
/// ```
/// use piiarc_common::privacy::patterns::types::{CategoryKind, PiiCategory};
///
/// assert_eq!(PiiCategory::Phone.kind(), CategoryKind::Standalone);
/// assert_eq!(PiiCategory::Ip.as_str(), "ip");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    // Standalone identifiers
    Phone,
    Aadhar,
    Passport,
    UpiId,

    // Combinable signals
    Name,
    Email,
    Address,
    Ip,
    Device,
}

impl_tag_conversions!(PiiCategory {
    Phone => "phone",
    Aadhar => "aadhar",
    Passport => "passport",
    UpiId => "upi_id",
    Name => "name",
    Email => "email",
    Address => "address",
    Ip => "ip",
    Device => "device",
});

impl PiiCategory {
    /// Whether this category is standalone or combinable
    pub const fn kind(self) -> CategoryKind {
        match self {
            Self::Phone | Self::Aadhar | Self::Passport | Self::UpiId => CategoryKind::Standalone,
            Self::Name | Self::Email | Self::Address | Self::Ip | Self::Device => {
                CategoryKind::Combinable
            }
        }
    }
}

/// Evidence strength of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Presence alone is sufficient evidence of PII
    Standalone,
    /// Individually weak; conclusive only alongside another signal
    Combinable,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::Combinable => write!(f, "combinable"),
        }
    }
}
