//! Weighted index selection and dice aggregation.

use super::RandomEngine;

impl RandomEngine {
    /// Picks an index with probability proportional to its weight.
    ///
    /// Only positive, finite weights take part; other entries (zero,
    /// negative, NaN, infinite) can never be chosen but keep their
    /// position, so returned indices always refer to the caller's slice.
    /// Returns `None` (consuming no draw) when no weight takes part.
    /// Otherwise one draw-unit is consumed.
    ///
    /// Weights are scaled by the largest one before summing, so the
    /// running total stays finite even when the raw sum would overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twister_engine::RandomEngine;
    ///
    /// let mut engine = RandomEngine::new(1);
    /// assert_eq!(engine.weighted_index(&[0.0, 0.0, 10.0]), Some(2));
    /// assert_eq!(engine.weighted_index(&[]), None);
    /// assert_eq!(engine.weighted_index(&[-1.0, -2.0]), None);
    /// ```
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let largest = weights
            .iter()
            .copied()
            .filter(|&w| takes_part(w))
            .fold(0.0, f64::max);
        if largest <= 0.0 {
            return None;
        }

        let scaled = |w: f64| if takes_part(w) { w / largest } else { 0.0 };
        let total: f64 = weights.iter().map(|&w| scaled(w)).sum();
        let drawn = self.uniform_float(0.0, total);

        let mut cumulative = 0.0;
        let mut last_chosen = None;
        for (index, &weight) in weights.iter().enumerate() {
            let share = scaled(weight);
            if share > 0.0 {
                cumulative += share;
                last_chosen = Some(index);
                if drawn <= cumulative {
                    return Some(index);
                }
            }
        }

        // Rounding in the running sum can leave `drawn` a hair above the
        // final cumulative value.
        last_chosen
    }

    /// Rolls `count` dice with `sides` faces each and returns the sum.
    ///
    /// Returns 0 without drawing when either argument is not positive.
    /// Otherwise consumes `count` draw-units.
    pub fn roll_dice(&mut self, count: i32, sides: i32) -> i32 {
        if count <= 0 || sides <= 0 {
            return 0;
        }
        (0..count).fold(0i32, |total, _| total.saturating_add(self.uniform_int(1, sides)))
    }

    /// Rolls one die per entry of `sides` and returns the sum.
    ///
    /// Entries below 1 contribute nothing and consume no draw. An empty
    /// slice yields 0.
    pub fn roll_dice_array(&mut self, sides: &[i32]) -> i32 {
        sides
            .iter()
            .filter(|&&s| s >= 1)
            .fold(0i32, |total, &s| total.saturating_add(self.uniform_int(1, s)))
    }
}

fn takes_part(weight: f64) -> bool {
    weight > 0.0 && weight.is_finite()
}
