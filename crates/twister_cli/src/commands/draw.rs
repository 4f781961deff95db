//! Scalar draw commands: integers, floats, Gaussians, dice and weights.

use tracing::info;
use twister_engine::RandomEngine;

use super::log_final_state;
use crate::config::check_position;
use crate::{CliError, Result};

/// Draws `count` integers in `[min, max]` after skipping `skip` draw-units.
pub fn ints(
    engine: &mut RandomEngine,
    min: i32,
    max: i32,
    count: usize,
    skip: u64,
) -> Result<Vec<i32>> {
    if min > max {
        return Err(CliError::InvalidArgument(format!(
            "min ({}) must not exceed max ({})",
            min, max
        )));
    }
    engine.discard(check_position(skip)?);
    Ok((0..count).map(|_| engine.uniform_int(min, max)).collect())
}

/// Draws `count` floats in `[min, max]` after skipping `skip` draw-units.
pub fn floats(
    engine: &mut RandomEngine,
    min: f64,
    max: f64,
    count: usize,
    skip: u64,
) -> Result<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(CliError::InvalidArgument(format!(
            "[{}, {}] is not a finite range",
            min, max
        )));
    }
    engine.discard(check_position(skip)?);
    Ok((0..count).map(|_| engine.uniform_float(min, max)).collect())
}

/// Draws `count` values from `N(mean, stddev^2)`.
pub fn gaussians(
    engine: &mut RandomEngine,
    mean: f64,
    stddev: f64,
    count: usize,
) -> Result<Vec<f64>> {
    if !mean.is_finite() || !stddev.is_finite() || stddev < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "N({}, {}^2) is not a valid distribution",
            mean, stddev
        )));
    }
    Ok((0..count).map(|_| engine.gaussian(mean, stddev)).collect())
}

/// Run the int command
pub fn run_int(mut engine: RandomEngine, min: i32, max: i32, count: usize, skip: u64) -> Result<()> {
    info!("Drawing {} integer(s) in [{}, {}]", count, min, max);
    for value in ints(&mut engine, min, max, count, skip)? {
        println!("{}", value);
    }
    log_final_state(&engine);
    Ok(())
}

/// Run the float command
pub fn run_float(mut engine: RandomEngine, min: f64, max: f64, count: usize, skip: u64) -> Result<()> {
    info!("Drawing {} float(s) in [{}, {}]", count, min, max);
    for value in floats(&mut engine, min, max, count, skip)? {
        println!("{}", value);
    }
    log_final_state(&engine);
    Ok(())
}

/// Run the gaussian command
pub fn run_gaussian(mut engine: RandomEngine, mean: f64, stddev: f64, count: usize) -> Result<()> {
    info!("Drawing {} Gaussian value(s), mean {}, stddev {}", count, mean, stddev);
    for value in gaussians(&mut engine, mean, stddev, count)? {
        println!("{}", value);
    }
    log_final_state(&engine);
    Ok(())
}

/// Run the dice command
pub fn run_dice(mut engine: RandomEngine, count: i32, sides: i32) -> Result<()> {
    if count < 0 || sides < 1 {
        return Err(CliError::InvalidArgument(format!(
            "cannot roll {}d{}",
            count, sides
        )));
    }
    info!("Rolling {}d{}", count, sides);
    println!("{}", engine.roll_dice(count, sides));
    log_final_state(&engine);
    Ok(())
}

/// Run the weighted command
pub fn run_weighted(mut engine: RandomEngine, weights: &[f64]) -> Result<()> {
    info!("Choosing among {} weight(s)", weights.len());
    match engine.weighted_index(weights) {
        Some(index) => println!("{}", index),
        None => println!("none"),
    }
    log_final_state(&engine);
    Ok(())
}
