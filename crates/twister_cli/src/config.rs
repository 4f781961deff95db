//! Configuration file handling
//!
//! The configuration file is optional: a missing file yields defaults,
//! while a present but malformed file is an error.

use std::path::Path;
use std::str::FromStr;

use twister_engine::{EngineConfig, RandomEngine, StreamState};

use crate::{CliError, Result};

/// Largest stream position a command will replay to.
///
/// Replay is linear in the position; this bound keeps it to seconds.
pub const MAX_POSITION: u64 = 1 << 34;

/// Rejects stream positions beyond [`MAX_POSITION`].
pub fn check_position(count: u64) -> Result<u64> {
    if count > MAX_POSITION {
        return Err(CliError::InvalidArgument(format!(
            "stream position {} exceeds the replay limit {}",
            count, MAX_POSITION
        )));
    }
    Ok(count)
}

/// Loads `path` if it exists, otherwise returns the default configuration.
pub fn load(path: &str) -> Result<EngineConfig> {
    if !Path::new(path).exists() {
        return Ok(EngineConfig::default());
    }
    Ok(EngineConfig::load(path)?)
}

/// Where a seeded command takes its stream from.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamSource<'a> {
    /// `--seed`: a fresh stream at position 0
    pub seed: Option<i32>,
    /// `--resume`: a `seed:count` token
    pub resume: Option<&'a str>,
}

/// Builds the engine for a seeded command.
///
/// Precedence: a resume token, then an explicit seed, then the
/// configured seed and start position, then fresh entropy.
pub fn engine_for(source: StreamSource<'_>, config: &EngineConfig) -> Result<RandomEngine> {
    if let Some(token) = source.resume {
        let state = StreamState::from_str(token)?;
        check_position(state.draw_count)?;
        return Ok(RandomEngine::from_state(state));
    }
    Ok(match source.seed {
        Some(seed) => RandomEngine::new(seed),
        None => {
            check_position(config.start_count)?;
            RandomEngine::from_config(config)
        }
    })
}
