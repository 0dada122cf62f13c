//! Application constants
//!
//! Column names, file defaults and environment keys used across the batch
//! surface.

// Input columns
pub const RECORD_ID_COLUMN: &str = "record_id";
/// Payload column spellings, in lookup order
pub const PAYLOAD_COLUMNS: [&str; 2] = ["Data_json", "data_json"];

// Output columns
pub const REDACTED_JSON_COLUMN: &str = "redacted_data_json";
pub const IS_PII_COLUMN: &str = "is_pii";
pub const OUTPUT_HEADER: [&str; 3] = [RECORD_ID_COLUMN, REDACTED_JSON_COLUMN, IS_PII_COLUMN];

// Defaults
pub const DEFAULT_OUTPUT_PATH: &str = "redacted_output.csv";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

// Configuration files searched for in the working directory
pub const CONFIG_FILE_NAMES: [&str; 2] = ["piiarc.toml", "piiarc.json"];

// Environment keys
pub const ENV_CONFIG_PATH: &str = "PIIARC_CONFIG";
pub const ENV_OUTPUT_PATH: &str = "PIIARC_OUTPUT_PATH";
pub const ENV_LOG_LEVEL: &str = "PIIARC_LOG_LEVEL";
pub const ENV_PARALLEL: &str = "PIIARC_PARALLEL";
