//! Record classification
//!
//! [`Decision`] gathers evidence from the original record, the service turns
//! it into a redacted copy, and the text scanner layers embedded matches on
//! top.

pub mod decision;
pub mod service;
pub mod text_scanner;

pub use decision::{Decision, PendingRedaction};
pub use service::{ClassificationService, ClassifiedRecord};
