// Configuration utilities and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::utils::error::{ProjError, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "PROJ_CONFIG";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Logging section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Console output section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize human-readable output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// User configuration. Only affects presentation, never generated files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<ProjConfig> {
        match get_config_path() {
            Some(path) => Self::load_or_default(path),
            None => Ok(ProjConfig::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ProjConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(ProjConfig::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ProjError::Config(
                format!("Failed to read {}: {}", path.display(), e)
            ))?;

        Self::parse_config(&content)
            .map_err(|e| match e {
                ProjError::Config(msg) => ProjError::Config(format!("{}: {}", path.display(), msg)),
                other => other,
            })
    }

    /// Parse configuration from a TOML string
    pub fn parse_config(content: &str) -> Result<ProjConfig> {
        let config: ProjConfig = toml::from_str(content)
            .map_err(|e| ProjError::Config(
                format!("Invalid TOML syntax: {}", e)
            ))?;

        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ProjError::Config(format!(
                "Invalid log level '{}' (expected one of: {})",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(ProjConfig {
            logging: LoggingConfig { level },
            ..config
        })
    }
}

/// Config file location: `$PROJ_CONFIG`, else `<config dir>/proj/config.toml`
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|dir| dir.join("proj").join("config.toml"))
}
