//! Error types for the ambient surfaces of the engine crate.
//!
//! Generation primitives never fail; invalid inputs degrade to sentinel
//! results instead. The errors here cover the fallible edges:
//! - `ConfigError`: Errors from loading an [`EngineConfig`](crate::EngineConfig)
//! - `StateError`: Errors from parsing a [`StreamState`](crate::StreamState) token

use thiserror::Error;

/// Configuration loading errors.
///
/// # Examples
/// ```
/// use twister_engine::{ConfigError, EngineConfig};
///
/// let err = EngineConfig::from_toml_str("start_count = -1").unwrap_err();
/// assert!(matches!(err, ConfigError::ParseError(_)));
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(#[from] std::io::Error),

    /// The configuration text is not valid TOML for this schema
    /// (including unknown log level names).
    #[error("Configuration parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Stream-state token parsing errors.
///
/// # Examples
/// ```
/// use twister_engine::StateError;
///
/// let err = StateError::MissingSeparator("42".to_string());
/// assert_eq!(format!("{}", err), "Stream state '42' is not of the form <seed>:<count>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The token has no `:` between seed and count.
    #[error("Stream state '{0}' is not of the form <seed>:<count>")]
    MissingSeparator(String),

    /// The seed part is not a 32-bit signed integer.
    #[error("Invalid seed in stream state: {0}")]
    InvalidSeed(String),

    /// The count part is not an unsigned integer.
    #[error("Invalid draw count in stream state: {0}")]
    InvalidCount(String),
}
