//! Normal draws and their range-bounded variants.
//!
//! Each normal draw inverts the standard normal CDF at one open-unit
//! uniform, so a Gaussian costs exactly one draw-unit. Ziggurat or
//! Box-Muller samplers would consume a variable number of words and
//! break stream addressing.

use tracing::warn;

use super::RandomEngine;

/// Retries made by [`RandomEngine::gaussian_truncated`] before it falls
/// back to a uniform draw.
pub const TRUNCATION_RETRIES: u32 = 5;

/// Number of standard deviations mapped onto the whole range at spread 1.
const SIGMAS_PER_RANGE: f64 = 6.0;

// Beasley-Springer-Moro coefficients.
const BSM_A: [f64; 4] = [
    2.506_628_238_84,
    -18.615_000_625_29,
    41.391_197_735_34,
    -25.441_060_496_37,
];
const BSM_B: [f64; 4] = [
    -8.473_510_930_90,
    23.083_367_437_43,
    -21.062_241_018_26,
    3.130_829_098_33,
];
const BSM_C: [f64; 9] = [
    0.337_475_482_272_614_7,
    0.976_169_019_091_718_6,
    0.160_797_971_491_820_9,
    0.027_643_881_033_386_3,
    0.003_840_572_937_360_9,
    0.000_395_189_651_191_9,
    0.000_032_176_788_176_8,
    0.000_000_288_816_736_4,
    0.000_000_396_031_518_7,
];

/// Inverse of the standard normal CDF.
///
/// Beasley-Springer-Moro approximation: a rational function on the
/// central region `|u - 0.5| <= 0.42` and a polynomial in
/// `ln(-ln(r))` on the tails. Absolute error is around `3e-9` at worst on
/// `(1e-9, 1 - 1e-9)`.
///
/// # Arguments
///
/// * `u` - probability in the open interval `(0, 1)`
///
/// # Examples
///
/// ```rust
/// use twister_engine::inverse_normal_cdf;
///
/// assert_eq!(inverse_normal_cdf(0.5), 0.0);
/// assert!((inverse_normal_cdf(0.975) - 1.959_964).abs() < 1e-6);
/// ```
pub fn inverse_normal_cdf(u: f64) -> f64 {
    let y = u - 0.5;

    if y.abs() <= 0.42 {
        let r = y * y;
        let numer = BSM_A[0] + r * (BSM_A[1] + r * (BSM_A[2] + r * BSM_A[3]));
        let denom = 1.0 + r * (BSM_B[0] + r * (BSM_B[1] + r * (BSM_B[2] + r * BSM_B[3])));
        return y * numer / denom;
    }

    let r = if y < 0.0 { u } else { 1.0 - u };
    let s = (-r.ln()).ln();
    let z = BSM_C
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| acc * s + coefficient);

    if y < 0.0 {
        -z
    } else {
        z
    }
}

impl RandomEngine {
    /// Returns one normal draw with the given mean and standard deviation;
    /// one draw-unit.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u = self.open_unit();
        mean + std_dev * inverse_normal_cdf(u)
    }

    /// Returns a normal draw centred on `bias` and kept inside `[min, max]`.
    ///
    /// The standard deviation is `(max - min) * spread / 6`, so at spread 1
    /// six sigma span the range. Up to `attempts` draws (at least one) are
    /// made looking for an in-range value; if every attempt misses, the
    /// last draw is clamped into range.
    ///
    /// This fallback differs from [`gaussian_truncated`](Self::gaussian_truncated),
    /// which redraws uniformly instead of clamping.
    pub fn gaussian_clamped(
        &mut self,
        min: f64,
        max: f64,
        bias: f64,
        spread: f64,
        attempts: u32,
    ) -> f64 {
        let (centre, std_dev) = bounded_normal_params(min, max, bias, spread);
        let attempts = attempts.max(1);

        let mut value = centre;
        for _ in 0..attempts {
            value = self.gaussian(centre, std_dev);
            if (min..=max).contains(&value) {
                return value;
            }
        }

        warn!(attempts, value, min, max, "gaussian attempts exhausted, clamping");
        value.max(min).min(max)
    }

    /// Returns a normal draw centred on `bias`, redrawn until inside `[min, max]`.
    ///
    /// Same parameterisation as [`gaussian_clamped`](Self::gaussian_clamped).
    /// Makes up to [`TRUNCATION_RETRIES`] normal draws; if all of them
    /// miss, falls back to one plain `uniform_float(min, max)` draw rather
    /// than clamping.
    pub fn gaussian_truncated(&mut self, min: f64, max: f64, bias: f64, spread: f64) -> f64 {
        let (centre, std_dev) = bounded_normal_params(min, max, bias, spread);

        for _ in 0..TRUNCATION_RETRIES {
            let value = self.gaussian(centre, std_dev);
            if (min..=max).contains(&value) {
                return value;
            }
        }

        warn!(
            retries = TRUNCATION_RETRIES,
            min, max, "gaussian retries exhausted, falling back to uniform"
        );
        self.uniform_float(min, max)
    }
}

/// Returns the clamped centre and derived standard deviation.
fn bounded_normal_params(min: f64, max: f64, bias: f64, spread: f64) -> (f64, f64) {
    let centre = bias.max(min).min(max);
    let std_dev = (max - min) * spread / SIGMAS_PER_RANGE;
    (centre, std_dev)
}
