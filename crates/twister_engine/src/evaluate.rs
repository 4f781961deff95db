//! Luck evaluation of rolled values.
//!
//! Each function scores how expected an outcome was on a `[0, 1]` scale:
//! `0.0` is a rare, lucky roll and `1.0` a common one. The scores draw
//! nothing from any engine.
//!
//! # Examples
//!
//! ```rust
//! use twister_engine::evaluate::{eval_bool_true, eval_float_max};
//!
//! assert_eq!(eval_float_max(0.9, 0.0, 1.0), 1.0 - 0.9);
//! assert_eq!(eval_bool_true(true, 0.25), 0.25);
//! ```

/// Scores `value` by its position in `[min, max]`; values near `max` are luckier.
///
/// Returns `1 - (value - min) / (max - min)`, the chance of a uniform
/// roll landing at `value` or higher. A degenerate or inverted range
/// scores `1.0`. Values outside the range are not clamped, so they
/// score below `0.0` or above `1.0`.
pub fn eval_float_max(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 || range.is_nan() {
        return 1.0;
    }
    1.0 - (value - min) / range
}

/// Scores a boolean roll against the probability that it comes up `true`.
///
/// `probability` is clamped into `[0, 1]`. A `true` result scores the
/// clamped probability and a `false` result scores its complement.
pub fn eval_bool_true(value: bool, probability: f64) -> f64 {
    let p = probability.clamp(0.0, 1.0);
    if value {
        p
    } else {
        1.0 - p
    }
}
