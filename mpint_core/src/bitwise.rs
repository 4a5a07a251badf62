use mpint_internals::*;

use crate::StaticInt;

/// # Shifts and bitwise operations
///
/// Shifts operate on the magnitude with the sign carried through, which
/// gives truncation toward zero for right shifts of negative values. The
/// limbwise bitwise operations are defined for non-negative operands only;
/// negative operands take the dispatch engine's backend path, which supplies
/// the emulated two's complement semantics.
impl<const N: usize> StaticInt<N> {
    /// Left shift by `s` bits. `None` if the result needs more than `N`
    /// limbs.
    pub fn shl(lhs: &Self, s: usize) -> Option<Self> {
        if lhs.is_zero() {
            return Some(Self::zero());
        }
        match lhs.nbits().checked_add(s) {
            Some(t) if t <= N * BITS => (),
            _ => return None,
        }
        let limb_s = s / BITS;
        let bit_s = s % BITS;
        let asize = lhs.abs_size();
        let mut res = [0; N];
        if bit_s == 0 {
            for i in (0..asize).rev() {
                res[i + limb_s] = lhs.limbs[i];
            }
        } else {
            for i in (0..asize).rev() {
                let idx = i + limb_s;
                if idx + 1 < N {
                    res[idx + 1] |= lhs.limbs[i] >> (BITS - bit_s);
                }
                res[idx] |= lhs.limbs[i] << bit_s;
            }
        }
        let size = normalized_size(&res, (asize + limb_s + 1).min(N));
        Some(Self::from_raw(res, size, lhs.is_negative()))
    }

    /// Right shift by `s` bits, truncating the magnitude toward zero.
    /// The result always fits, so this cannot fail.
    #[must_use]
    pub fn shr(lhs: &Self, s: usize) -> Self {
        if s >= lhs.nbits() {
            return Self::zero();
        }
        let limb_s = s / BITS;
        let bit_s = s % BITS;
        let asize = lhs.abs_size();
        let mut res = [0; N];
        if bit_s == 0 {
            for i in limb_s..asize {
                res[i - limb_s] = lhs.limbs[i];
            }
        } else {
            for i in limb_s..asize {
                let lo = lhs.limbs[i] >> bit_s;
                let hi = if i + 1 < asize {
                    lhs.limbs[i + 1] << (BITS - bit_s)
                } else {
                    0
                };
                res[i - limb_s] = lo | hi;
            }
        }
        let size = normalized_size(&res, asize - limb_s);
        Self::from_raw(res, size, lhs.is_negative() && size != 0)
    }

    /// Limbwise AND of two non-negative values
    #[must_use]
    pub fn and(lhs: &Self, rhs: &Self) -> Self {
        debug_assert!(!lhs.is_negative() && !rhs.is_negative());
        let size = lhs.abs_size().min(rhs.abs_size());
        let mut res = [0; N];
        for i in 0..size {
            res[i] = lhs.limbs[i] & rhs.limbs[i];
        }
        let size = normalized_size(&res, size);
        Self::from_raw(res, size, false)
    }

    /// Limbwise OR of two non-negative values
    #[must_use]
    pub fn or(lhs: &Self, rhs: &Self) -> Self {
        debug_assert!(!lhs.is_negative() && !rhs.is_negative());
        let size = lhs.abs_size().max(rhs.abs_size());
        let mut res = [0; N];
        for i in 0..size {
            res[i] = lhs.limbs[i] | rhs.limbs[i];
        }
        Self::from_raw(res, size, false)
    }

    /// Limbwise XOR of two non-negative values
    #[must_use]
    pub fn xor(lhs: &Self, rhs: &Self) -> Self {
        debug_assert!(!lhs.is_negative() && !rhs.is_negative());
        let size = lhs.abs_size().max(rhs.abs_size());
        let mut res = [0; N];
        for i in 0..size {
            res[i] = lhs.limbs[i] ^ rhs.limbs[i];
        }
        let size = normalized_size(&res, size);
        Self::from_raw(res, size, false)
    }
}
