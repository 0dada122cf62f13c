//! Configuration loader
//!
//! Loads the run configuration from an optional file plus environment
//! overrides.
//!
//! ## Loading Strategy
//! 1. If `PIIARC_CONFIG` is set, load that file (it must exist)
//! 2. Otherwise search the standard locations for a config file
//! 3. No file found: start from defaults
//! 4. Apply environment overrides on top
//!
//! ## Environment Variables
//! - `PIIARC_CONFIG`: Explicit config file path
//! - `PIIARC_OUTPUT_PATH`: Output CSV path
//! - `PIIARC_LOG_LEVEL`: Log filter used when `RUST_LOG` is unset
//! - `PIIARC_PARALLEL`: Whether rows are classified in parallel (true/false)
//!
//! ## File Locations
//! The loader checks the following paths (in order):
//! 1. `./piiarc.toml` or `./piiarc.json` (current working directory)
//! 2. Relative to executable location

use std::path::{Path, PathBuf};

use piiarc_domain::constants::{
    CONFIG_FILE_NAMES, ENV_CONFIG_PATH, ENV_LOG_LEVEL, ENV_OUTPUT_PATH, ENV_PARALLEL,
};
use piiarc_domain::{Config, PiiArcError, Result};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `PiiArcError::Config` if:
/// - `PIIARC_CONFIG` names a file that does not exist
/// - File format is invalid
pub fn load() -> Result<Config> {
    let explicit = std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from);

    let mut config = match explicit.or_else(find_config_file) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PiiArcError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PiiArcError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            PiiArcError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PiiArcError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PiiArcError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PiiArcError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PiiArcError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search the standard locations for a configuration file
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Apply `PIIARC_*` overrides on top of a loaded configuration
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(path) = env_var(ENV_OUTPUT_PATH) {
        config.output.path = path;
    }
    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.pipeline.parallel = env_bool(ENV_PARALLEL, config.pipeline.parallel);
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
