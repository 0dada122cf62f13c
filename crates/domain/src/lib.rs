//! # PiiArc Domain
//!
//! Plain data types shared by the engine and its I/O collaborators.
//!
//! This crate contains:
//! - The record model and scalar coercion
//! - Batch row types and the run summary
//! - Configuration structures
//! - Domain error types and Result definitions
//! - Domain constants (column names, defaults, environment keys)
//!
//! ## Architecture
//! - No dependencies on other PiiArc crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
