//! Configuration loading and management
//!
//! This module provides utilities for loading the run configuration from
//! files and environment variables.

pub mod loader;

// Re-export commonly used items
pub use loader::{apply_env_overrides, find_config_file, load, load_from_file};
