//! Mask generation for the dual-threshold stopping rule.
//!
//! Both masks are derived from the average chunk size. The set bits of a
//! mask are spaced evenly over the 64-bit fingerprint, so a mask with `n`
//! set bits matches (`fp & mask == 0`) with probability of about `2^-n`.

/// Smallest valid argument to [`spread`].
pub(crate) const MIN_SPREAD_BITS: u32 = 2;

/// Largest valid argument to [`spread`].
pub(crate) const MAX_SPREAD_BITS: u32 = 64;

/// Distance, in bits, between the average mask and the small/large masks.
const NORMALIZATION: u32 = 2;

/// Returns the number of bits needed to represent `n` (`8192` -> `14`).
pub(crate) const fn bit_length(n: usize) -> u32 {
    usize::BITS - n.leading_zeros()
}

/// Builds a 64-bit mask with `n` one-bits spread evenly across the word.
///
/// Only defined for `2 <= n <= 64`; configuration validation keeps every
/// caller inside that range.
pub(crate) const fn spread(n: u32) -> u64 {
    debug_assert!(n >= MIN_SPREAD_BITS && n <= MAX_SPREAD_BITS);

    let shift = (64 - n) / (n - 1) + 1;
    let mut mask = 1u64;
    let mut i = 0;
    while i < n - 1 {
        mask = (mask << shift) | 1;
        i += 1;
    }
    mask
}

/// Returns the exponent the masks are centered on, or `None` when the
/// average size leaves either mask outside the range [`spread`] accepts.
pub(crate) const fn mask_bits(avg_size: usize) -> Option<u32> {
    if avg_size == 0 {
        return None;
    }
    let bits = bit_length(avg_size) - 1;
    if bits < MIN_SPREAD_BITS + NORMALIZATION || bits + NORMALIZATION > MAX_SPREAD_BITS {
        return None;
    }
    Some(bits)
}

/// Derives `(mask_small, mask_large)` from a validated average size.
///
/// `mask_small` has more set bits and is used below the average size,
/// `mask_large` has fewer and is used above it.
pub(crate) const fn mask_pair(bits: u32) -> (u64, u64) {
    (spread(bits + NORMALIZATION), spread(bits - NORMALIZATION))
}
