//! This crate contains common limb-level utilities for crates within the
//! `mpint` system. Most users should never have to interact with this
//! directly; the items here exist for the static-representation routines in
//! `mpint_core` and for anyone writing highly optimized code over raw limb
//! slices.
//!
//! A limb sequence represents a non-negative magnitude in base `2^BITS`,
//! least-significant limb first.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod widening;

pub use widening::{dd_division, widen_add, widen_mul_add};

/// The basic element of a limb buffer. The backend boundary is crossed
/// through width-independent digit iterators, so unlike register-sized
/// schemes this can stay fixed at 64 bits on every architecture.
pub type Digit = u64;

/// Signed version of `Digit`
pub type IDigit = i64;

/// Bitwidth of a `Digit`
pub const BITS: usize = Digit::BITS as usize;

/// Maximum value of a `Digit`
pub const MAX: Digit = Digit::MAX;

/// Number of bytes in a `Digit`
pub const DIGIT_BYTES: usize = (Digit::BITS / u8::BITS) as usize;

/// Number of significant bits in `x`, i.e. the position of the highest set
/// bit plus one. Returns 0 for `x == 0`.
#[inline]
pub const fn sig_bits(x: Digit) -> usize {
    BITS - (x.leading_zeros() as usize)
}

/// Number of significant bits in a normalized little-endian magnitude using
/// `size` limbs of `limbs`. The top used limb must be nonzero when
/// `size != 0`. Returns 0 for `size == 0`.
#[inline]
pub const fn size_in_bits(limbs: &[Digit], size: usize) -> usize {
    if size == 0 {
        0
    } else {
        ((size - 1) * BITS) + sig_bits(limbs[size - 1])
    }
}

/// Strips most-significant zero limbs, returning the normalized limb count
/// for the first `size` limbs of `limbs`.
#[inline]
pub const fn normalized_size(limbs: &[Digit], mut size: usize) -> usize {
    while size > 0 && limbs[size - 1] == 0 {
        size -= 1;
    }
    size
}
