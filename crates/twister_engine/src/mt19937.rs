//! 32-bit Mersenne Twister (MT19937) word generator.
//!
//! This module provides [`Mt19937`], a bit-exact implementation of the
//! generator standardised as `std::mt19937` (period 2^19937 - 1). It is
//! the opaque word source behind [`RandomEngine`](crate::RandomEngine).
//!
//! ## Reference
//!
//! - Matsumoto, M. & Nishimura, T. (1998). "Mersenne Twister: A
//!   623-dimensionally equidistributed uniform pseudo-random number
//!   generator". ACM Transactions on Modeling and Computer Simulation.

use std::fmt;

use rand::{Error, RngCore, SeedableRng};

/// Degree of recurrence (state size in words).
const N: usize = 624;
/// Middle word offset.
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
/// Initialisation multiplier (Knuth, TAOCP Vol. 2, 3rd ed., p. 106).
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Default seed used by the reference implementation.
pub const DEFAULT_SEED: u32 = 5489;

/// MT19937 generator state.
///
/// The state array is never exposed. The only ways to observe the
/// generator are [`next_word`](Self::next_word) and
/// [`discard`](Self::discard); persistence goes through the owning
/// engine's `(seed, draw_count)` pair instead.
///
/// # Examples
///
/// ```rust
/// use twister_engine::Mt19937;
///
/// let mut mt = Mt19937::new(5489);
/// assert_eq!(mt.next_word(), 3_499_211_612);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Creates a generator initialised with `seed`, matching
    /// `std::mt19937(seed)`.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    /// Produces the next tempered 32-bit word.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Skips `count` words.
    ///
    /// Equivalent to calling [`next_word`](Self::next_word) `count` times
    /// and dropping the results, but skips tempering and only regenerates
    /// the state block when a block boundary is crossed.
    pub fn discard(&mut self, mut count: u64) {
        while count > 0 {
            if self.index >= N {
                self.twist();
            }
            let available = (N - self.index) as u64;
            let step = available.min(count);
            self.index += step as usize;
            count -= step;
        }
    }

    /// Regenerates the full block of `N` untempered words.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
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

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates to the low 32 bits so that small seeds match the
    /// reference generator.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
