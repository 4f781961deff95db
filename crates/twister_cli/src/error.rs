//! CLI error types

use thiserror::Error;
use twister_engine::{ConfigError, StateError};

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed stream-state token
    #[error("Stream state error: {0}")]
    State(#[from] StateError),

    /// Invalid command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialisation failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
