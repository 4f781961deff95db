//! One-shot helpers backed by throwaway engines.
//!
//! Each function seeds a private [`RandomEngine`] from fresh OS entropy,
//! draws one value and drops the engine. They share no state, so they
//! are safe to call from any number of threads at once, and they never
//! touch a caller's engine.

use rand::RngCore;
use uuid::Uuid;

use crate::engine::RandomEngine;

pub use crate::engine::new_seed;

/// Returns an integer in `[min, max]` from a fresh engine.
pub fn uniform_int(min: i32, max: i32) -> i32 {
    RandomEngine::from_entropy().uniform_int(min, max)
}

/// Returns a real in `[min, max]` from a fresh engine.
pub fn uniform_float(min: f64, max: f64) -> f64 {
    RandomEngine::from_entropy().uniform_float(min, max)
}

/// Returns `true` with probability `probability` from a fresh engine.
pub fn bool(probability: f64) -> bool {
    RandomEngine::from_entropy().bool(probability)
}

/// Returns a GUID built from four 32-bit words of a fresh engine.
///
/// The words are packed most significant first; no version or variant
/// bits are set.
///
/// # Examples
///
/// ```rust
/// use twister_engine::oneshot;
///
/// let a = oneshot::new_guid();
/// let b = oneshot::new_guid();
/// assert_ne!(a, b);
/// ```
pub fn new_guid() -> Uuid {
    guid_from(&mut RandomEngine::from_entropy())
}

/// Packs four words drawn from `engine` into a GUID (four draw-units).
pub fn guid_from(engine: &mut RandomEngine) -> Uuid {
    let words = [
        engine.next_u32(),
        engine.next_u32(),
        engine.next_u32(),
        engine.next_u32(),
    ];
    let value = words
        .iter()
        .fold(0u128, |acc, &word| (acc << 32) | u128::from(word));
    Uuid::from_u128(value)
}
