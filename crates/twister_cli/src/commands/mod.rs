//! CLI command implementations
//!
//! Each submodule implements a family of CLI commands. Seeded commands
//! take an owned engine and log its final position on completion.

pub mod draw;
pub mod entropy;
pub mod sample;
pub mod stream;

use std::fmt::Display;

use serde::Serialize;
use tracing::info;
use twister_engine::RandomEngine;

use crate::{CliError, Result};

/// Logs the position a seeded command finished at, for later `--resume`.
pub(crate) fn log_final_state(engine: &RandomEngine) {
    info!(state = %engine.snapshot(), "Final stream state");
}

/// Renders values one per line, or as a JSON array.
pub(crate) fn render<T: Serialize + Display>(values: &[T], format: &str) -> Result<String> {
    match format {
        "text" => Ok(values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        "json" => Ok(serde_json::to_string(values)?),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: text, json",
            other
        ))),
    }
}
