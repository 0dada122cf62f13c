//! Common utility functions and helper macros
//!
//! - **[`macros`]**: Utility macros for reducing boilerplate code

#[macro_use]
pub mod macros;
