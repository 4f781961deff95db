//! Biased float and boolean draws.
//!
//! Bias is produced by drawing `force` uniform samples and keeping the
//! one nearest the target. This is an extremum-of-N approximation, not a
//! closed-form skewed distribution: it concentrates mass near the target
//! as `force` grows, but the resulting density has no simple formula.
//! It lives in its own pair of operations so it can be swapped for an
//! inverse-CDF construction without touching the plain uniform API.

use super::{clamp_probability, RandomEngine};

impl RandomEngine {
    /// Returns a value in `[min, max]` biased toward `target`.
    ///
    /// `target` is clamped into `[min, max]` and `force` is raised to at
    /// least 1. With `force == 1` this is a plain
    /// [`uniform_float`](Self::uniform_float). Otherwise `force` samples
    /// are drawn (one draw-unit each) and the one with the smallest
    /// absolute distance to the target is returned; ties go to the
    /// earliest sample.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twister_engine::RandomEngine;
    ///
    /// let mut engine = RandomEngine::new(7);
    /// let value = engine.biased_float(0.0, 10.0, 9.0, 4);
    /// assert!((0.0..=10.0).contains(&value));
    /// assert_eq!(engine.current_count(), 4);
    /// ```
    pub fn biased_float(&mut self, min: f64, max: f64, target: f64, force: u32) -> f64 {
        let target = target.max(min).min(max);
        let force = force.max(1);

        let mut best = self.uniform_float(min, max);
        let mut best_distance = (best - target).abs();

        for _ in 1..force {
            let candidate = self.uniform_float(min, max);
            let distance = (candidate - target).abs();
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }

        best
    }

    /// Returns a boolean with base probability `probability`, biased
    /// toward `true` or `false`.
    ///
    /// With `force <= 1` this is a plain [`bool`](Self::bool). Otherwise
    /// the bias target is the midpoint of `[0, p]` when favouring `true`
    /// or of `[p, 1]` when favouring `false`; one
    /// [`biased_float`](Self::biased_float) over `[0, 1]` is drawn toward
    /// it and compared against `p`. Consumes `force` draw-units.
    pub fn biased_bool(&mut self, probability: f64, bias_toward_true: bool, force: u32) -> bool {
        let p = clamp_probability(probability);
        let force = force.max(1);

        if force == 1 {
            return self.bool(p);
        }

        let target = if bias_toward_true {
            p * 0.5
        } else {
            p + (1.0 - p) * 0.5
        };

        self.biased_float(0.0, 1.0, target, force) < p
    }
}
