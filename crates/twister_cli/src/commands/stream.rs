//! Stream-state command.

use tracing::info;
use twister_engine::{RandomEngine, StreamState};

use crate::config::check_position;
use crate::Result;

/// Moves `engine` to `count` (if given) and returns its state token.
pub fn position(engine: &mut RandomEngine, count: Option<u64>) -> Result<StreamState> {
    if let Some(count) = count {
        engine.jump_to_count(check_position(count)?);
    }
    Ok(engine.snapshot())
}

/// Run the state command
pub fn run(mut engine: RandomEngine, count: Option<u64>) -> Result<()> {
    let state = position(&mut engine, count)?;
    info!(seed = state.seed, draw_count = state.draw_count, "Stream position");
    println!("{}", state);
    Ok(())
}
