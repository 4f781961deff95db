//! Primitive uniform surface consumed by higher layers.
//!
//! Samplers and other collaborators only ever need two primitives: an
//! inclusive integer range and a closed real range. Keeping them behind
//! this trait lets those layers stay generic (static dispatch) and lets
//! tests drive them with scripted sources.

/// Source of inclusive uniform draws.
///
/// Implementations must consume a fixed amount of underlying randomness
/// per call so that callers issuing a fixed number of calls stay
/// reproducible.
pub trait UniformSource {
    /// Returns an integer in `[min, max]`, both ends reachable.
    ///
    /// `min <= max` is a caller precondition; the result is unspecified
    /// otherwise.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// Returns a real in `[min, max]`, both ends reachable.
    ///
    /// `min <= max` is a caller precondition; the result is unspecified
    /// otherwise.
    fn uniform_float(&mut self, min: f64, max: f64) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).uniform_int(min, max)
    }

    #[inline]
    fn uniform_float(&mut self, min: f64, max: f64) -> f64 {
        (**self).uniform_float(min, max)
    }
}
