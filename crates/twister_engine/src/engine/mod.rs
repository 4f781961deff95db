//! Seeded generation engine with an addressable stream position.
//!
//! This module provides [`RandomEngine`], a value type that owns an
//! MT19937 generator, the seed it was initialised from, and the number
//! of draw-units consumed since that initialisation.
//!
//! ## Draw-units
//!
//! One draw-unit is one 32-bit word from the generator. Every elementary
//! primitive consumes exactly one word, so `current_count()` is both the
//! number of primitive draws and the generator's true position. Two
//! engines with equal seed and equal count produce identical output from
//! then on, whatever mix of operations brought them there.
//!
//! ## Module Structure
//!
//! - this file: construction, stream-position control, uniform primitives
//! - `biased`: extremum-of-N biased float/bool approximation
//! - `gaussian`: normal draws and range-bounded variants
//! - `discrete`: weighted index selection and dice

mod biased;
mod discrete;
mod gaussian;


pub use gaussian::{inverse_normal_cdf, TRUNCATION_RETRIES};

use rand::rngs::OsRng;
use rand::{Error, RngCore};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::mt19937::Mt19937;
use crate::source::UniformSource;
use crate::state::StreamState;

/// `2^32 - 1`: dividing a word by this maps it onto the closed unit interval.
const CLOSED_UNIT_DIVISOR: f64 = u32::MAX as f64;

/// `1 / 2^32`: maps a word (plus one half) onto the open unit interval.
const OPEN_UNIT_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// Deterministic, seedable random generation engine.
///
/// The engine is single-owner: it has no interior locking and is meant
/// to be held by one caller context. Cloning copies the whole state, so
/// a clone continues the same stream independently.
///
/// # Examples
///
/// ```rust
/// use twister_engine::RandomEngine;
///
/// let mut engine = RandomEngine::new(42);
/// let first = engine.uniform_int(0, 1000);
/// assert_eq!(engine.current_count(), 1);
///
/// // Rewinding replays the stream exactly.
/// engine.reset();
/// assert_eq!(engine.uniform_int(0, 1000), first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomEngine {
    /// Seed the generator was (re)initialised from.
    seed: i32,
    /// Word generator, exclusively owned.
    generator: Mt19937,
    /// Draw-units consumed since the last (re)initialisation.
    draw_count: u64,
}

impl RandomEngine {
    /// Creates an engine initialised with `seed`; `current_count()` starts at 0.
    pub fn new(seed: i32) -> Self {
        debug!(seed, "initialising random engine");
        Self {
            seed,
            generator: Mt19937::new(seed as u32),
            draw_count: 0,
        }
    }

    /// Creates an engine from one hardware-entropy seed.
    ///
    /// The seed is captured once and is available via
    /// [`root_seed`](Self::root_seed) for later replay.
    pub fn from_entropy() -> Self {
        Self::new(new_seed())
    }

    /// Creates an engine at the position recorded in `state`.
    ///
    /// Equivalent to `new(state.seed)` followed by `advance(state.draw_count)`.
    pub fn from_state(state: StreamState) -> Self {
        let mut engine = Self::new(state.seed);
        engine.advance(state.draw_count);
        engine
    }

    /// Creates an engine from configuration.
    ///
    /// An absent seed falls back to entropy; the engine is then advanced
    /// to `start_count`.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = match config.seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        };
        engine.advance(config.start_count);
        engine
    }

    /// Returns the seed the engine was last initialised from.
    #[inline]
    pub fn root_seed(&self) -> i32 {
        self.seed
    }

    /// Returns the number of draw-units consumed since the last reset.
    #[inline]
    pub fn current_count(&self) -> u64 {
        self.draw_count
    }

    /// Returns the persistable `(seed, draw_count)` pair.
    pub fn snapshot(&self) -> StreamState {
        StreamState::new(self.seed, self.draw_count)
    }

    /// Replaces the whole engine state with a fresh one seeded by `seed`.
    pub fn reseed(&mut self, seed: i32) {
        *self = Self::new(seed);
    }

    /// Reseeds from fresh entropy and returns the new seed.
    pub fn reroll_seed(&mut self) -> i32 {
        let seed = new_seed();
        self.reseed(seed);
        seed
    }

    /// Reinitialises the generator from the stored seed and zeroes the count.
    pub fn reset(&mut self) {
        debug!(seed = self.seed, from = self.draw_count, "resetting random engine");
        self.generator = Mt19937::new(self.seed as u32);
        self.draw_count = 0;
    }

    /// Skips `count` draw-units without producing output.
    ///
    /// Costs one state regeneration per 624 units skipped, so time is
    /// linear in `count`; callers taking positions from untrusted input
    /// should bound them. The count saturates at `u64::MAX`.
    pub fn discard(&mut self, count: u64) {
        if count == 0 {
            return;
        }
        trace!(count, from = self.draw_count, "discarding draw-units");
        self.generator.discard(count);
        self.draw_count = self.draw_count.saturating_add(count);
    }

    /// Skips forward by `steps` draw-units. Same effect as [`discard`](Self::discard).
    #[inline]
    pub fn advance(&mut self, steps: u64) {
        self.discard(steps);
    }

    /// Moves the stream to absolute position `target`.
    ///
    /// Forward jumps advance by the difference. The generator has no
    /// backward seek, so a backward jump resets and replays `target`
    /// draw-units.
    pub fn jump_to_count(&mut self, target: u64) {
        if target == self.draw_count {
            return;
        }
        if target > self.draw_count {
            self.advance(target - self.draw_count);
        } else {
            debug!(from = self.draw_count, target, "rewinding by reset and replay");
            self.reset();
            self.advance(target);
        }
    }

    /// Consumes and returns one raw word.
    #[inline]
    fn next_word(&mut self) -> u32 {
        self.draw_count = self.draw_count.saturating_add(1);
        self.generator.next_word()
    }

    /// Returns an integer in `[min, max]`; one draw-unit.
    ///
    /// Uses a single multiply-shift of one word onto the span, so the
    /// draw count per call is fixed. Both ends are reachable. The
    /// residual non-uniformity is below `span / 2^32`.
    ///
    /// `min <= max` is a caller precondition.
    #[inline]
    pub fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        let word = self.next_word();
        map_to_int_range(word, min, max)
    }

    /// Returns a real in the closed interval `[min, max]`; one draw-unit.
    ///
    /// `min <= max` is a caller precondition.
    #[inline]
    pub fn uniform_float(&mut self, min: f64, max: f64) -> f64 {
        let word = self.next_word();
        map_to_float_range(word, min, max)
    }

    /// Returns `true` with probability `probability`; one draw-unit.
    ///
    /// The probability is clamped into `[0, 1]`.
    pub fn bool(&mut self, probability: f64) -> bool {
        let p = clamp_probability(probability);
        self.uniform_float(0.0, 1.0) < p
    }

    /// Draws a value on the open unit interval `(0, 1)`; one draw-unit.
    #[inline]
    fn open_unit(&mut self) -> f64 {
        let word = self.next_word();
        (f64::from(word) + 0.5) * OPEN_UNIT_SCALE
    }
}

impl UniformSource for RandomEngine {
    #[inline]
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        RandomEngine::uniform_int(self, min, max)
    }

    #[inline]
    fn uniform_float(&mut self, min: f64, max: f64) -> f64 {
        RandomEngine::uniform_float(self, min, max)
    }
}

/// Word-level access for `rand` adaptors.
///
/// Every word handed out is counted: `next_u64` costs two draw-units and
/// `fill_bytes` one per started 4-byte chunk.
impl RngCore for RandomEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_word());
        let low = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Draws one 32-bit seed from operating-system entropy.
pub fn new_seed() -> i32 {
    OsRng.next_u32() as i32
}

/// Maps a word onto `[min, max]` by multiply-shift.
///
/// Wrapping arithmetic keeps a violated precondition from panicking.
#[inline]
fn map_to_int_range(word: u32, min: i32, max: i32) -> i32 {
    let span = (i64::from(max) - i64::from(min) + 1) as u64;
    let offset = ((u128::from(word) * u128::from(span)) >> 32) as i64;
    i64::from(min).wrapping_add(offset) as i32
}

/// Maps a word onto the closed interval `[min, max]`.
///
/// Interpolating as `min * (1 - u) + max * u` hits both ends exactly.
#[inline]
fn map_to_float_range(word: u32, min: f64, max: f64) -> f64 {
    let u = f64::from(word) / CLOSED_UNIT_DIVISOR;
    let value = min * (1.0 - u) + max * u;
    value.max(min).min(max)
}

#[inline]
fn clamp_probability(probability: f64) -> f64 {
    probability.clamp(0.0, 1.0)
}
