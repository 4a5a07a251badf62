use core::mem;

use mpint_core::{Digit, StaticInt, BITS};
use num_bigint::{BigInt, BigUint, Sign};

use crate::cache;

/// Exclusive owner of one backend integer.
///
/// This is the heap arm of the `Int` union: a thin ownership wrapper over
/// `num_bigint::BigInt` that adds no algorithmic logic of its own, only
/// buffer lifetime. Construction goes through the thread-local promotion
/// cache and `Drop` returns the magnitude buffer there, so steady-state
/// promote/drop cycles do not touch the allocator.
///
/// Moved-from safety comes with Rust move semantics; there is no sharing or
/// reference counting anywhere, a `DynInt` clone is a deep backend clone.
#[derive(Debug)]
pub(crate) struct DynInt {
    big: BigInt,
}

impl DynInt {
    /// The single promotion path: builds a backend value with the same
    /// magnitude and sign as the static source.
    pub(crate) fn from_static<const N: usize>(src: &StaticInt<N>) -> Self {
        let mut mag = cache::take_magnitude();
        assign_limbs(&mut mag, src.digits());
        let sign = if src.is_zero() {
            Sign::NoSign
        } else if src.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        DynInt {
            big: BigInt::from_biguint(sign, mag),
        }
    }

    /// Adopts an already-computed backend value
    #[inline]
    pub(crate) fn from_bigint(big: BigInt) -> Self {
        DynInt { big }
    }

    #[inline]
    pub(crate) fn get(&self) -> &BigInt {
        &self.big
    }

    #[inline]
    pub(crate) fn get_mut(&mut self) -> &mut BigInt {
        &mut self.big
    }
}

impl Drop for DynInt {
    fn drop(&mut self) {
        let (_, mag) = mem::take(&mut self.big).into_parts();
        cache::recycle_magnitude(mag);
    }
}

impl Clone for DynInt {
    fn clone(&self) -> Self {
        DynInt {
            big: self.big.clone(),
        }
    }
}

/// Overwrites `mag` with the given little-endian limbs, reusing its
/// allocation where the capacity suffices.
fn assign_limbs(mag: &mut BigUint, limbs: &[Digit]) {
    mag.assign_from_slice(&[]);
    for &limb in limbs.iter().rev() {
        *mag <<= BITS;
        *mag += limb;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_is_bit_identical() {
        let src = StaticInt::<3>::try_from_i128(-(1i128 << 100) - 12345).unwrap();
        let d = DynInt::from_static(&src);
        assert_eq!(d.get().sign(), Sign::Minus);
        let digits: Vec<u64> = d.get().magnitude().iter_u64_digits().collect();
        assert_eq!(digits, src.digits());
    }

    #[test]
    fn promotion_of_zero() {
        let d = DynInt::from_static(&StaticInt::<1>::zero());
        assert_eq!(d.get().sign(), Sign::NoSign);
    }
}
