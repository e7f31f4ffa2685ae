//! Linear congruential generator driving the deterministic shuffle.
//!
//! The constants are fixed: changing any of them changes every stored
//! ordering. The generator is weak (its period is at most 233 280) and is
//! only ever used to pick swap positions.

use crate::hash::simple_hash;

/// LCG multiplier.
pub const LCG_MULTIPLIER: i64 = 9301;

/// LCG increment.
pub const LCG_INCREMENT: i64 = 49_297;

/// LCG modulus.
pub const LCG_MODULUS: i64 = 233_280;

/// Modulus as a double, used when scaling the state into an index.
const LCG_MODULUS_F64: f64 = 233_280.0;

/// A seeded linear congruential generator.
///
/// The state advances as `h = (h * 9301 + 49297) mod 233280`. The remainder
/// is Euclidean, so after the first step the state always lies in
/// `0..233280`, even when the seed hash is negative.
///
/// # Example
///
/// ```
/// use quiz_shuffle::Lcg;
///
/// let mut first = Lcg::from_seed("seed1");
/// let mut second = Lcg::from_seed("seed1");
///
/// assert_eq!(first.next_index(4), second.next_index(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    /// Creates a generator whose initial state is the given hash.
    #[must_use]
    pub fn from_hash(hash: i32) -> Self {
        Self {
            state: i64::from(hash),
        }
    }

    /// Creates a generator seeded with [`simple_hash`] of `seed`.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        Self::from_hash(simple_hash(seed))
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> i64 {
        self.state
    }

    /// Advances the generator once and returns the new state.
    pub fn advance(&mut self) -> i64 {
        // |state| < 2^31 before the first step, so the product fits in i64.
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT).rem_euclid(LCG_MODULUS);
        self.state
    }

    /// Advances the generator and maps the new state onto `0..bound`,
    /// saturating to `0` when `bound` is zero.
    ///
    /// The index is `floor((state / 233280) * bound)` evaluated in double
    /// precision, which keeps results identical to previously stored
    /// orderings.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "index scaling must round exactly like the double-precision formula"
    )]
    pub fn next_index(&mut self, bound: usize) -> usize {
        let state = self.advance();
        let fraction = state as f64 / LCG_MODULUS_F64;
        let index = (fraction * bound as f64).floor() as usize;
        index.min(bound.saturating_sub(1))
    }
}
