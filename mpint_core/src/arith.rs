use core::cmp::Ordering;

use mpint_internals::*;

use crate::StaticInt;

/// # Arithmetic
///
/// Fallible primitives return `None` on capacity overflow. They never
/// allocate and never unwind; the caller decides whether `None` means
/// promotion or a hard error. All primitives take operands by reference and
/// compute into a fresh value, so any aliasing of the inputs is fine.
impl<const N: usize> StaticInt<N> {
    /// Magnitude addition. `None` if the sum needs more than `N` limbs.
    fn mag_add(lhs: &Self, rhs: &Self) -> Option<([Digit; N], usize)> {
        let size = lhs.abs_size().max(rhs.abs_size());
        let mut res = [0; N];
        let mut carry = 0;
        // limbs at and above `abs_size` are zero per the invariants, so both
        // operands can be read out to `size`
        for i in 0..size {
            let (sum, c) = widen_add(lhs.limbs[i], rhs.limbs[i], carry);
            res[i] = sum;
            carry = c;
        }
        if carry != 0 {
            if size == N {
                return None;
            }
            res[size] = carry;
            return Some((res, size + 1));
        }
        Some((res, size))
    }

    /// Magnitude subtraction, requiring `|lhs| >= |rhs|`. Cannot overflow.
    fn mag_sub(lhs: &Self, rhs: &Self) -> ([Digit; N], usize) {
        let size = lhs.abs_size();
        let mut res = [0; N];
        let mut carry = 1;
        for i in 0..size {
            let (sum, c) = widen_add(lhs.limbs[i], !rhs.limbs[i], carry);
            res[i] = sum;
            carry = c;
        }
        debug_assert_eq!(carry, 1);
        let size = normalized_size(&res, size);
        (res, size)
    }

    /// Addition. The four sign combinations are handled explicitly:
    /// same-sign operands add magnitudes with the shared sign, mixed-sign
    /// operands subtract the smaller magnitude from the larger with the
    /// larger's sign, and exact cancellation produces canonical zero.
    pub fn add(lhs: &Self, rhs: &Self) -> Option<Self> {
        if lhs.is_zero() {
            return Some(*rhs);
        }
        if rhs.is_zero() {
            return Some(*lhs);
        }
        if lhs.is_negative() == rhs.is_negative() {
            let (limbs, size) = Self::mag_add(lhs, rhs)?;
            Some(Self::from_raw(limbs, size, lhs.is_negative()))
        } else {
            match lhs.mag_cmp(rhs) {
                Ordering::Equal => Some(Self::zero()),
                Ordering::Greater => {
                    let (limbs, size) = Self::mag_sub(lhs, rhs);
                    Some(Self::from_raw(limbs, size, lhs.is_negative()))
                }
                Ordering::Less => {
                    let (limbs, size) = Self::mag_sub(rhs, lhs);
                    Some(Self::from_raw(limbs, size, rhs.is_negative()))
                }
            }
        }
    }

    /// Subtraction. `None` if the difference needs more than `N` limbs.
    #[inline]
    pub fn sub(lhs: &Self, rhs: &Self) -> Option<Self> {
        Self::add(lhs, &rhs.neg())
    }

    /// Schoolbook multiplication. The capacity check is exact: the result is
    /// rejected only if its true normalized size exceeds `N` limbs, not by a
    /// worst-case `2N` bound.
    pub fn mul(lhs: &Self, rhs: &Self) -> Option<Self> {
        if lhs.is_zero() || rhs.is_zero() {
            return Some(Self::zero());
        }
        let asize = lhs.abs_size();
        let bsize = rhs.abs_size();
        // the product has at least `asize + bsize - 1` limbs
        if asize + bsize > N + 1 {
            return None;
        }
        let mut res = [0; N];
        // index `N` of the result, reachable only by the top row's carry-out
        let mut top: Digit = 0;
        for i in 0..asize {
            let mut carry = 0;
            for j in 0..bsize {
                let idx = i + j;
                let (lo, hi) = widen_mul_add(lhs.limbs[i], rhs.limbs[j], carry);
                let (lo, c) = lo.overflowing_add(res[idx]);
                res[idx] = lo;
                carry = hi + (c as Digit);
            }
            if carry != 0 {
                let idx = i + bsize;
                if idx == N {
                    top = carry;
                } else {
                    res[idx] = carry;
                }
            }
        }
        if top != 0 {
            return None;
        }
        let size = normalized_size(&res, (asize + bsize).min(N));
        Some(Self::from_raw(
            res,
            size,
            lhs.is_negative() != rhs.is_negative(),
        ))
    }

    /// Multiplies the magnitude by a single limb, preserving the sign.
    pub fn mul_digit(lhs: &Self, d: Digit) -> Option<Self> {
        if lhs.is_zero() || d == 0 {
            return Some(Self::zero());
        }
        let asize = lhs.abs_size();
        let mut res = [0; N];
        let mut carry = 0;
        for i in 0..asize {
            let (lo, hi) = widen_mul_add(lhs.limbs[i], d, carry);
            res[i] = lo;
            carry = hi;
        }
        let size = if carry != 0 {
            if asize == N {
                return None;
            }
            res[asize] = carry;
            asize + 1
        } else {
            asize
        };
        Some(Self::from_raw(res, size, lhs.is_negative()))
    }

    /// Adds a single limb to a non-negative value.
    pub fn add_digit(lhs: &Self, d: Digit) -> Option<Self> {
        debug_assert!(!lhs.is_negative());
        let mut res = lhs.limbs;
        let mut size = lhs.abs_size();
        let mut carry = d;
        let mut i = 0;
        while carry != 0 {
            if i == N {
                return None;
            }
            let (sum, c) = res[i].overflowing_add(carry);
            res[i] = sum;
            carry = c as Digit;
            i += 1;
        }
        if i > size {
            size = i;
        }
        Some(Self::from_raw(res, size, false))
    }

    /// Divides the magnitude by a single nonzero limb, returning the
    /// truncated quotient (with `lhs`'s sign) and the magnitude remainder.
    /// A single limb divisor always fits, so this cannot overflow capacity.
    pub fn div_rem_digit(lhs: &Self, d: Digit) -> (Self, Digit) {
        debug_assert!(d != 0);
        let asize = lhs.abs_size();
        let mut res = [0; N];
        let mut rem: Digit = 0;
        for i in (0..asize).rev() {
            let cur = ((rem as u128) << BITS) | (lhs.limbs[i] as u128);
            res[i] = (cur / (d as u128)) as Digit;
            rem = (cur % (d as u128)) as Digit;
        }
        let size = normalized_size(&res, asize);
        (Self::from_raw(res, size, lhs.is_negative() && size != 0), rem)
    }

    /// Truncated division fast path for operands of at most two significant
    /// limbs each. `None` means the operands are too wide for this path (it
    /// never means the *result* overflows: `|quo| <= |lhs|` and
    /// `|rem| < |rhs|` always fit).
    ///
    /// The divisor must be nonzero; the caller surfaces division by zero
    /// before reaching this layer.
    pub fn div_rem(lhs: &Self, rhs: &Self) -> Option<(Self, Self)> {
        debug_assert!(!rhs.is_zero());
        let duo = lhs.to_u128_magnitude()?;
        let div = rhs.to_u128_magnitude()?;
        let (quo, rem) = dd_division(
            (duo as Digit, (duo >> BITS) as Digit),
            (div as Digit, (div >> BITS) as Digit),
        );
        let quo = (quo.0 as u128) | ((quo.1 as u128) << BITS);
        let rem = (rem.0 as u128) | ((rem.1 as u128) << BITS);
        let quo_negative = lhs.is_negative() != rhs.is_negative();
        Some((
            Self::try_from_sign_magnitude(quo_negative, quo)?,
            Self::try_from_sign_magnitude(lhs.is_negative(), rem)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn si<const N: usize>(x: i128) -> StaticInt<N> {
        StaticInt::try_from_i128(x).unwrap()
    }

    #[test]
    fn sign_cases() {
        for (a, b) in [(7, 5), (5, 7), (-7, 5), (7, -5), (-7, -5), (7, -7)] {
            let r = StaticInt::<2>::add(&si(a), &si(b)).unwrap();
            assert_eq!(r, si::<2>(a + b), "{a} + {b}");
            let r = StaticInt::<2>::sub(&si(a), &si(b)).unwrap();
            assert_eq!(r, si::<2>(a - b), "{a} - {b}");
        }
    }

    #[test]
    fn add_capacity() {
        let max = StaticInt::<1>::from_digit(Digit::MAX);
        assert!(StaticInt::<1>::add(&max, &StaticInt::one()).is_none());
        assert_eq!(
            StaticInt::<1>::add(&max, &StaticInt::one().neg()).unwrap(),
            StaticInt::from_digit(Digit::MAX - 1)
        );
    }

    #[test]
    fn mul_exact_capacity() {
        // 2^64 * 2^63 needs exactly 128 bits, which fits two limbs
        let a = si::<2>(1 << 64);
        let b = si::<2>(1 << 63);
        assert_eq!(
            StaticInt::<2>::mul(&a, &b).unwrap().to_u128_magnitude(),
            Some(1 << 127)
        );
        // 2^64 * 2^64 does not fit
        assert!(StaticInt::<2>::mul(&a, &a).is_none());
        // a full 64 x 64 bit product does not fit one limb
        let m = StaticInt::<1>::from_digit(Digit::MAX);
        assert!(StaticInt::<1>::mul(&m, &m).is_none());
    }

    #[test]
    fn mul_signs() {
        assert_eq!(
            StaticInt::<2>::mul(&si(-3), &si(5)).unwrap(),
            si::<2>(-15)
        );
        assert_eq!(StaticInt::<2>::mul(&si(-3), &si(-5)).unwrap(), si::<2>(15));
        assert_eq!(
            StaticInt::<2>::mul(&si(-3), &StaticInt::zero()).unwrap(),
            StaticInt::zero()
        );
    }

    #[test]
    fn digit_primitives() {
        let x = si::<2>(1_000_000_000_000_000_000);
        let y = StaticInt::mul_digit(&x, 10).unwrap();
        let y = StaticInt::add_digit(&y, 9).unwrap();
        let (q, r) = StaticInt::div_rem_digit(&y, 10);
        assert_eq!(q, x);
        assert_eq!(r, 9);
        assert!(StaticInt::<1>::mul_digit(&StaticInt::from_digit(1 << 63), 2).is_none());
    }

    #[test]
    fn truncated_division() {
        for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (1, 100)] {
            let (q, r) = StaticInt::<2>::div_rem(&si(a), &si(b)).unwrap();
            assert_eq!(q, si::<2>(a / b), "{a} / {b}");
            assert_eq!(r, si::<2>(a % b), "{a} % {b}");
        }
        let wide = si::<3>(1).neg();
        let three = StaticInt::<3>::try_from_u128(u128::MAX)
            .and_then(|x| StaticInt::mul_digit(&x, 8));
        // operands wider than two limbs fall back
        assert!(StaticInt::<3>::div_rem(&three.unwrap(), &wide.abs()).is_none());
    }
}
