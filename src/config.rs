//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::source::SimulatedConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferSettings,

    #[serde(default)]
    pub simulated: SimulatedConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Buffer defaults
#[derive(Debug, Clone, Deserialize)]
pub struct BufferSettings {
    /// Registered data source to fetch from
    #[serde(default = "default_source")]
    pub source: String,

    /// Name used for the buffer in log output
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_source() -> String {
    "simulated".to_string()
}

fn default_label() -> String {
    "dataviewer".to_string()
}

impl Default for BufferSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            label: default_label(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dataviewer").join("config.toml")),
            Some(PathBuf::from("/etc/dataviewer/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(source) = std::env::var("DATAVIEWER_SOURCE") {
            self.buffer.source = source;
        }
        if let Ok(rate) = std::env::var("DATAVIEWER_SAMPLE_RATE") {
            if let Ok(r) = rate.parse() {
                self.simulated.sample_rate = r;
            }
        }

        if let Ok(level) = std::env::var("DATAVIEWER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DATAVIEWER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# DataViewer Configuration
#
# Environment variables override these settings:
# - DATAVIEWER_SOURCE
# - DATAVIEWER_SAMPLE_RATE
# - DATAVIEWER_LOG_LEVEL
# - DATAVIEWER_LOG_FORMAT

[buffer]
# Data source to fetch from (see `dataviewer sources`)
source = "simulated"

# Name used for the buffer in log output
label = "dataviewer"

[simulated]
# Sample rate for channels without a known rate (Hz)
sample_rate = 256.0

# Frequency of the generated sinusoid (Hz)
frequency = 1.0

# Amplitude of the generated sinusoid
amplitude = 1.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
