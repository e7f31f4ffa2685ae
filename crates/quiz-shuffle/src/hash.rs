//! Seed hashing.
//!
//! Seeds are arbitrary strings; the shuffle needs a 32-bit integer. The hash
//! below is the classic multiplier-31 rolling hash over UTF-16 code units,
//! wrapping on overflow exactly like 32-bit two's-complement arithmetic. Its
//! output must stay bit-for-bit stable because stored shuffles depend on it.

/// Hashes a string into a signed 32-bit integer.
///
/// Every UTF-16 code unit `c` updates the accumulator as
/// `h = ((h << 5) - h) + c`, i.e. `h * 31 + c`, with wraparound at each step.
/// Characters outside the Basic Multilingual Plane contribute both halves of
/// their surrogate pair.
///
/// # Examples
///
/// ```
/// use quiz_shuffle::simple_hash;
///
/// assert_eq!(simple_hash(""), 0);
/// assert_eq!(simple_hash("abc"), 96_354);
/// assert_eq!(
///     simple_hash("the quick brown fox jumps over the lazy dog"),
///     -2_082_818_701
/// );
/// ```
#[must_use]
pub fn simple_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}
