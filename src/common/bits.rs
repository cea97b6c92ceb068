//! Bit Manipulation Helpers.
//!
//! Width-aware helpers shared by the multi-bit elements. Values are carried
//! in a `u64`, so every width is validated against `MAX_WIDTH` before use.

use crate::common::error::{SimError, SimResult};

/// Widest element the engine models (one `u64` word).
pub const MAX_WIDTH: usize = 64;

/// Validates an element width.
///
/// # Arguments
///
/// * `width` - Requested number of bits
/// * `what` - Element name used in the error message
///
/// # Returns
///
/// `Ok(())` for `1..=MAX_WIDTH`, otherwise `InvalidConfiguration`.
pub fn check_width(width: usize, what: &str) -> SimResult<()> {
    if width == 0 {
        return Err(SimError::InvalidConfiguration(format!(
            "{} width must be non-zero",
            what
        )));
    }
    if width > MAX_WIDTH {
        return Err(SimError::InvalidConfiguration(format!(
            "{} width {} exceeds {} bits",
            what, width, MAX_WIDTH
        )));
    }
    Ok(())
}

/// Returns a mask with the low `width` bits set.
///
/// A width of 64 yields `u64::MAX`.
pub fn mask(width: usize) -> u64 {
    if width >= MAX_WIDTH {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Extracts bit `idx` of `value`.
pub fn bit(value: u64, idx: usize) -> bool {
    (value >> idx) & 1 != 0
}

/// Packs a least-significant-bit-first sequence of booleans into a word.
pub fn pack<I>(bits: I) -> u64
where
    I: IntoIterator<Item = bool>,
{
    bits.into_iter()
        .enumerate()
        .fold(0, |acc, (i, b)| if b { acc | (1u64 << i) } else { acc })
}

/// Formats the low `width` bits of `value` as a binary string, MSB first.
pub fn to_binary(value: u64, width: usize) -> String {
    (0..width)
        .rev()
        .map(|i| if bit(value, i) { '1' } else { '0' })
        .collect()
}
