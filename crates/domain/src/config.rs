//! Runtime configuration structures
//!
//! Every section has serde defaults so a partial file (or no file at all)
//! yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_PATH};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub pipeline: PipelineConfig,
}

/// Where results are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: DEFAULT_OUTPUT_PATH.to_string() }
    }
}

/// Diagnostic log filter used when `RUST_LOG` is unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string() }
    }
}

/// Batch execution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Classify rows across worker threads
    pub parallel: bool,
    /// Rows held in memory per classification chunk
    pub chunk_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { parallel: true, chunk_size: DEFAULT_CHUNK_SIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output.path, "redacted_output.csv");
        assert_eq!(config.logging.level, "warn");
        assert!(config.pipeline.parallel);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"pipeline": {"parallel": false}}"#).unwrap();
        assert!(!config.pipeline.parallel);
        assert_eq!(config.pipeline.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.output, OutputConfig::default());
    }
}
