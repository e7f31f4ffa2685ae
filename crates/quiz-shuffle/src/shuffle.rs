//! Fisher-Yates shuffles over borrowed slices.
//!
//! Two entry points share the same swap loop but differ in where the swap
//! positions come from: [`deterministic_shuffle`] draws them from a
//! seed-driven [`Lcg`], [`shuffle_array`] from a uniform random source. Both
//! leave the input untouched and return a new vector.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::lcg::Lcg;

/// Returns a permutation of `items` determined entirely by `seed`.
///
/// The same `(items, seed)` pair yields the same ordering on every call and
/// in every process. Sequences of length zero or one are returned as-is.
///
/// # Examples
///
/// ```
/// use quiz_shuffle::deterministic_shuffle;
///
/// let options = ["A", "B", "C", "D"];
/// let shuffled = deterministic_shuffle(&options, "seed1");
///
/// assert_eq!(shuffled, ["C", "D", "A", "B"]);
/// assert_eq!(options, ["A", "B", "C", "D"]);
/// ```
#[must_use]
pub fn deterministic_shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut shuffled = items.to_vec();
    if shuffled.len() <= 1 {
        return shuffled;
    }

    let mut lcg = Lcg::from_seed(seed);
    for index in (1..shuffled.len()).rev() {
        let other = lcg.next_index(index + 1);
        shuffled.swap(index, other);
    }
    shuffled
}

/// Returns a uniformly random permutation of `items`.
///
/// Uses the thread-local generator; there is no reproducibility guarantee.
/// Use [`deterministic_shuffle`] when the order must be stable.
#[must_use]
pub fn shuffle_array<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_array_with_rng(items, &mut rand::rng())
}

/// Returns a random permutation of `items` drawn from `rng`.
pub fn shuffle_array_with_rng<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
