//! Slice element selection and in-place shuffling.

use twister_engine::UniformSource;

use crate::sampler::GeometricSampler;

impl<'a, S: UniformSource + ?Sized> GeometricSampler<'a, S> {
    /// Returns a uniformly chosen element; 1 draw, or none for an empty slice.
    ///
    /// Slices longer than `i32::MAX + 1` elements are outside the
    /// primitive's index range.
    pub fn choose<'t, T>(&mut self, items: &'t [T]) -> Option<&'t T> {
        if items.is_empty() {
            return None;
        }
        let index = self.source.uniform_int(0, last_index(items.len()));
        items.get(index as usize)
    }

    /// Shuffles `items` in place; `len - 1` draws.
    ///
    /// Fisher-Yates from the last index down to 1, swapping each slot
    /// with a uniform index in `[0, i]`, so every permutation is equally
    /// likely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twister_engine::RandomEngine;
    /// use twister_sampling::GeometricSampler;
    ///
    /// let mut engine = RandomEngine::new(42);
    /// let mut cards = [1, 2, 3, 4, 5];
    /// GeometricSampler::new(&mut engine).shuffle(&mut cards);
    ///
    /// let mut sorted = cards;
    /// sorted.sort();
    /// assert_eq!(sorted, [1, 2, 3, 4, 5]);
    /// assert_eq!(engine.current_count(), 4);
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.source.uniform_int(0, last_index(i + 1));
            items.swap(i, j as usize);
        }
    }
}

/// Largest index of a slice of `len` elements, as a primitive bound.
fn last_index(len: usize) -> i32 {
    (len - 1) as i32
}
