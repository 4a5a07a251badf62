use core::cmp::Ordering;

use mpint_internals::*;

/// A sign/magnitude integer stored in exactly `N` inline limbs.
///
/// The magnitude lives in `limbs` in little-endian limb order. The `size`
/// field encodes both the number of significant limbs (its absolute value)
/// and the sign of the integer (its own sign); `size == 0` is the unique
/// representation of zero.
///
/// # Invariants
///
/// - `|size| <= N`
/// - the most significant used limb `limbs[|size| - 1]` is nonzero whenever
///   `size != 0` (no leading zero limbs within the used range)
/// - limbs at and above `|size|` are zero, so that copies and raw
///   comparisons are predictable
///
/// Two's complement is never used: the sign lives only in `size`, which
/// keeps magnitude overflow detection independent of sign handling. Every
/// fallible primitive returns `None` on capacity overflow instead of
/// panicking or unwinding; `None` is an internal signal for the dispatch
/// engine in the `mpint` crate and must never surface to end users.
#[derive(Debug, Clone, Copy)]
pub struct StaticInt<const N: usize> {
    pub(crate) limbs: [Digit; N],
    pub(crate) size: i32,
}

impl<const N: usize> StaticInt<N> {
    const ASSERT_CAPACITY: () = assert!(N >= 1, "`StaticInt` requires at least one limb");

    /// Zero-value construction
    #[inline]
    pub const fn zero() -> Self {
        let () = Self::ASSERT_CAPACITY;
        StaticInt {
            limbs: [0; N],
            size: 0,
        }
    }

    /// One-value construction
    #[inline]
    pub const fn one() -> Self {
        let mut res = Self::zero();
        res.limbs[0] = 1;
        res.size = 1;
        res
    }

    /// Constructs from a single limb magnitude with a non-negative sign
    #[inline]
    pub const fn from_digit(x: Digit) -> Self {
        let mut res = Self::zero();
        res.limbs[0] = x;
        res.size = (x != 0) as i32;
        res
    }

    /// Constructs from a normalized magnitude buffer. `size` must already be
    /// normalized (no leading zero limbs), and limbs at and above `size`
    /// must be zero.
    #[inline]
    pub(crate) const fn from_raw(limbs: [Digit; N], size: usize, negative: bool) -> Self {
        debug_assert!(size <= N);
        debug_assert!(size == 0 || limbs[size - 1] != 0);
        StaticInt {
            limbs,
            size: if negative {
                -(size as i32)
            } else {
                size as i32
            },
        }
    }

    /// Constructs from a `u128` magnitude and explicit sign, or `None` if
    /// the magnitude needs more than `N` limbs. A zero magnitude ignores
    /// `negative` and produces canonical zero.
    pub const fn try_from_sign_magnitude(negative: bool, mag: u128) -> Option<Self> {
        let lo = mag as Digit;
        let hi = (mag >> BITS) as Digit;
        if hi != 0 && N < 2 {
            return None;
        }
        let mut limbs = [0; N];
        limbs[0] = lo;
        let size = if hi != 0 {
            limbs[1] = hi;
            2
        } else {
            (lo != 0) as usize
        };
        Some(Self::from_raw(limbs, size, negative && mag != 0))
    }

    /// Constructs from a native unsigned integer, or `None` if it needs more
    /// than `N` limbs
    #[inline]
    pub const fn try_from_u128(x: u128) -> Option<Self> {
        Self::try_from_sign_magnitude(false, x)
    }

    /// Constructs from a native signed integer, or `None` if its magnitude
    /// needs more than `N` limbs
    #[inline]
    pub const fn try_from_i128(x: i128) -> Option<Self> {
        Self::try_from_sign_magnitude(x < 0, x.unsigned_abs())
    }

    /// Constructs from a little-endian limb sequence and explicit sign, or
    /// `None` if the normalized magnitude needs more than `N` limbs. Limbs
    /// beyond the last nonzero one are tolerated and stripped.
    pub fn try_from_limbs<I>(limbs: I, negative: bool) -> Option<Self>
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut res = [0; N];
        let mut size = 0;
        for (i, limb) in limbs.into_iter().enumerate() {
            if i >= N {
                if limb != 0 {
                    return None;
                }
            } else {
                res[i] = limb;
                if limb != 0 {
                    size = i + 1;
                }
            }
        }
        Some(Self::from_raw(res, size, negative && size != 0))
    }

    /// The signed size field: sign of the integer with `|size|` significant
    /// limbs
    #[inline]
    pub const fn signed_size(&self) -> i32 {
        self.size
    }

    /// Number of significant limbs
    #[inline]
    pub const fn abs_size(&self) -> usize {
        self.size.unsigned_abs() as usize
    }

    /// Sign of the integer: -1, 0, or 1
    #[inline]
    pub const fn sign(&self) -> i32 {
        (self.size > 0) as i32 - ((self.size < 0) as i32)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.size < 0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub const fn is_one(&self) -> bool {
        self.size == 1 && self.limbs[0] == 1
    }

    #[inline]
    pub const fn is_even(&self) -> bool {
        (self.limbs[0] & 1) == 0
    }

    /// The significant limbs of the magnitude, least significant first
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.limbs[..self.abs_size()]
    }

    /// Number of significant bits in the magnitude, 0 for zero
    #[inline]
    pub fn nbits(&self) -> usize {
        size_in_bits(&self.limbs, self.abs_size())
    }

    /// Number of set bits in the magnitude
    pub fn count_ones(&self) -> usize {
        let mut res = 0;
        for i in 0..self.abs_size() {
            res += self.limbs[i].count_ones() as usize;
        }
        res
    }

    /// The magnitude as a `u128`, or `None` if it needs more than two limbs
    pub fn to_u128_magnitude(&self) -> Option<u128> {
        match self.abs_size() {
            0 => Some(0),
            1 => Some(self.limbs[0] as u128),
            2 => Some((self.limbs[0] as u128) | ((self.limbs[1] as u128) << BITS)),
            _ => None,
        }
    }

    /// Negation. Capacity is unaffected, this cannot fail.
    #[inline]
    #[must_use]
    pub const fn neg(mut self) -> Self {
        self.size = -self.size;
        self
    }

    /// Absolute value
    #[inline]
    #[must_use]
    pub const fn abs(mut self) -> Self {
        self.size = self.size.abs();
        self
    }

    /// Three-way comparison: by sign first, then by limb count, then by limb
    /// contents from most significant to least significant
    pub fn cmp(&self, rhs: &Self) -> Ordering {
        if self.size != rhs.size {
            return self.size.cmp(&rhs.size);
        }
        let mag = self.mag_cmp(rhs);
        if self.is_negative() {
            mag.reverse()
        } else {
            mag
        }
    }

    /// Compares magnitudes only, ignoring sign. The signed sizes are assumed
    /// equal in limb count by `cmp`; this also works standalone.
    pub(crate) fn mag_cmp(&self, rhs: &Self) -> Ordering {
        let asize = self.abs_size();
        let bsize = rhs.abs_size();
        if asize != bsize {
            return asize.cmp(&bsize);
        }
        for i in (0..asize).rev() {
            if self.limbs[i] != rhs.limbs[i] {
                return self.limbs[i].cmp(&rhs.limbs[i]);
            }
        }
        Ordering::Equal
    }
}

impl<const N: usize> PartialEq for StaticInt<N> {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl<const N: usize> Eq for StaticInt<N> {}

impl<const N: usize> Default for StaticInt<N> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_zero() {
        let z = StaticInt::<2>::try_from_sign_magnitude(true, 0).unwrap();
        assert_eq!(z.signed_size(), 0);
        assert_eq!(z.sign(), 0);
        assert!(z.is_zero());
        assert!(!z.is_negative());
        assert_eq!(z, StaticInt::<2>::zero());
    }

    #[test]
    fn construction_capacity() {
        assert!(StaticInt::<1>::try_from_u128(u64::MAX as u128).is_some());
        assert!(StaticInt::<1>::try_from_u128((u64::MAX as u128) + 1).is_none());
        assert!(StaticInt::<2>::try_from_u128(u128::MAX).is_some());
        assert!(StaticInt::<2>::try_from_i128(i128::MIN).is_some());
        let x = StaticInt::<2>::try_from_i128(i128::MIN).unwrap();
        assert_eq!(x.to_u128_magnitude(), Some(1u128 << 127));
        assert!(x.is_negative());
    }

    #[test]
    fn ordering() {
        let a = StaticInt::<2>::try_from_i128(-5).unwrap();
        let b = StaticInt::<2>::try_from_i128(3).unwrap();
        let c = StaticInt::<2>::try_from_i128(-(1i128 << 80)).unwrap();
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(c.cmp(&a), Ordering::Less);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn bit_queries() {
        let x = StaticInt::<2>::try_from_u128((1 << 70) | 0b1011).unwrap();
        assert_eq!(x.nbits(), 71);
        assert_eq!(x.count_ones(), 4);
        assert_eq!(StaticInt::<2>::zero().nbits(), 0);
    }
}
