//! Persistable stream position.
//!
//! The only state an engine ever exposes for persistence is the pair
//! `(seed, draw_count)`. Replaying it is `RandomEngine::new(seed)`
//! followed by `advance(draw_count)`; the generator's internal array is
//! never serialised.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Seed plus draw count: a reproducible address into a seeded stream.
///
/// The text form is `<seed>:<draw_count>`.
///
/// # Examples
///
/// ```rust
/// use twister_engine::{RandomEngine, StreamState};
///
/// let mut engine = RandomEngine::new(-3);
/// engine.advance(10);
///
/// let token = engine.snapshot().to_string();
/// assert_eq!(token, "-3:10");
///
/// let state: StreamState = token.parse().unwrap();
/// let mut replayed = RandomEngine::from_state(state);
/// assert_eq!(replayed.uniform_int(0, 99), engine.uniform_int(0, 99));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamState {
    /// Root seed of the stream.
    pub seed: i32,
    /// Number of draw-units consumed from that seed.
    pub draw_count: u64,
}

impl StreamState {
    /// Creates a stream state.
    pub fn new(seed: i32, draw_count: u64) -> Self {
        Self { seed, draw_count }
    }
}

impl fmt::Display for StreamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.seed, self.draw_count)
    }
}

impl FromStr for StreamState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (seed, count) = trimmed
            .split_once(':')
            .ok_or_else(|| StateError::MissingSeparator(trimmed.to_string()))?;

        let seed = seed
            .trim()
            .parse::<i32>()
            .map_err(|_| StateError::InvalidSeed(seed.to_string()))?;
        let draw_count = count
            .trim()
            .parse::<u64>()
            .map_err(|_| StateError::InvalidCount(count.to_string()))?;

        Ok(Self::new(seed, draw_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let state = StreamState::new(42, 1_000);
        assert_eq!(state.to_string(), "42:1000");
        assert_eq!("42:1000".parse::<StreamState>(), Ok(state));
        assert_eq!(" -7 : 3 ".parse::<StreamState>(), Ok(StreamState::new(-7, 3)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "42".parse::<StreamState>(),
            Err(StateError::MissingSeparator("42".to_string()))
        );
        assert_eq!(
            "abc:1".parse::<StreamState>(),
            Err(StateError::InvalidSeed("abc".to_string()))
        );
        assert_eq!(
            "1:-5".parse::<StreamState>(),
            Err(StateError::InvalidCount("-5".to_string()))
        );
        assert_eq!(
            "3000000000:0".parse::<StreamState>(),
            Err(StateError::InvalidSeed("3000000000".to_string()))
        );
    }

    #[test]
    fn test_serde_json_round_trip() {
        let state = StreamState::new(-1, 77);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"seed":-1,"draw_count":77}"#);
        let back: StreamState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
