//! Engine configuration management
//!
//! Handles loading engine configuration from TOML text or files.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

/// Minimum severity for binaries that install a subscriber.
///
/// Written in lower case in configuration files (`log_level = "debug"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-discard events
    Trace,
    /// Construction, reset and rewind events
    Debug,
    /// Default level
    #[default]
    Info,
    /// Exhausted bounded-Gaussian attempts
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Level::from(*self).as_str().to_ascii_lowercase())
    }
}

/// Engine configuration structure
///
/// # Examples
///
/// ```rust
/// use twister_engine::{EngineConfig, RandomEngine};
///
/// let config = EngineConfig::from_toml_str("seed = 42\nstart_count = 3").unwrap();
/// let engine = RandomEngine::from_config(&config);
/// assert_eq!(engine.root_seed(), 42);
/// assert_eq!(engine.current_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed to initialise from; `None` draws one from OS entropy
    pub seed: Option<i32>,
    /// Stream position to advance to after initialisation
    pub start_count: u64,
    /// Log level for binaries embedding the engine
    pub log_level: LogLevel,
}

impl EngineConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
