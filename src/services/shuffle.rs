//! Uniform random permutation of roster names.

use rand::Rng;

/// Returns a uniformly random permutation of `items` (Fisher–Yates).
///
/// Walks from the last index down to 1, swapping each element with one at a
/// uniformly chosen index in `0..=i`. Every permutation is equally likely.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}
