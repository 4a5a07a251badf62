use core::{
    mem,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
        SubAssign,
    },
};

use mpint_core::StaticInt;
use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::Pow;

use crate::{checked_cast, int::Repr, Error, Int};

/// # Arithmetic dispatch
///
/// Every operation follows the same transition rule: try the static fast
/// path when all operands are static, and fall back to the backend when any
/// operand is dynamic or the static path reports capacity overflow. Results
/// go through [Int::from_bigint] on the backend path, so anything that fits
/// inline is stored inline.
impl<const N: usize> Int<N> {
    fn binop(
        lhs: &Self,
        rhs: &Self,
        static_op: impl FnOnce(&StaticInt<N>, &StaticInt<N>) -> Option<StaticInt<N>>,
        big_op: impl FnOnce(&BigInt, &BigInt) -> BigInt,
    ) -> Self {
        if let (Repr::Static(a), Repr::Static(b)) = (&lhs.repr, &rhs.repr) {
            if let Some(res) = static_op(a, b) {
                return Int::from_static(res);
            }
        }
        Int::from_bigint(Self::with_bigints(lhs, rhs, big_op))
    }

    fn bit_op(
        lhs: &Self,
        rhs: &Self,
        static_op: impl FnOnce(&StaticInt<N>, &StaticInt<N>) -> StaticInt<N>,
        big_op: impl FnOnce(&BigInt, &BigInt) -> BigInt,
    ) -> Self {
        // the limbwise path covers non-negative operands; negative operands
        // need the backend's emulated two's complement semantics
        if let (Repr::Static(a), Repr::Static(b)) = (&lhs.repr, &rhs.repr) {
            if !a.is_negative() && !b.is_negative() {
                return Int::from_static(static_op(a, b));
            }
        }
        Int::from_bigint(Self::with_bigints(lhs, rhs, big_op))
    }

    /// Truncated division: the quotient is rounded toward zero and the
    /// remainder carries the dividend's sign.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if let (Repr::Static(a), Repr::Static(b)) = (&self.repr, &rhs.repr) {
            if let Some((q, r)) = StaticInt::div_rem(a, b) {
                return Ok((Int::from_static(q), Int::from_static(r)));
            }
        }
        Ok(Self::with_bigints(self, rhs, |a, b| {
            let (q, r) = a.div_rem(b);
            (Int::from_bigint(q), Int::from_bigint(r))
        }))
    }

    /// Truncated division, reporting division by zero instead of panicking
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Truncated remainder, reporting division by zero instead of panicking
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Raises `self` to the power `exp`. `0^0 == 1`.
    pub fn pow(&self, exp: u32) -> Self {
        if let Repr::Static(a) = &self.repr {
            if let Some(res) = static_pow(a, exp) {
                return Int::from_static(res);
            }
        }
        self.with_bigint(|a| Int::from_bigint(Pow::pow(a, exp)))
    }

    /// Greatest common divisor; always non-negative, `gcd(0, 0) == 0`
    pub fn gcd(&self, rhs: &Self) -> Self {
        if let (Repr::Static(a), Repr::Static(b)) = (&self.repr, &rhs.repr) {
            if let (Some(x), Some(y)) = (a.to_u128_magnitude(), b.to_u128_magnitude()) {
                if let Some(g) = StaticInt::try_from_u128(gcd_u128(x, y)) {
                    return Int::from_static(g);
                }
            }
        }
        Self::with_bigints(self, rhs, |a, b| Int::from_bigint(a.gcd(b)))
    }

    /// Integer square root, truncated toward zero
    pub fn sqrt(&self) -> Result<Self, Error> {
        if self.sign() < 0 {
            return Err(Error::SqrtOfNegative {
                value: self.to_string(),
            });
        }
        if let Repr::Static(a) = &self.repr {
            if let Some(mag) = a.to_u128_magnitude() {
                if let Some(res) = StaticInt::try_from_u128(isqrt_u128(mag)) {
                    return Ok(Int::from_static(res));
                }
            }
        }
        Ok(self.with_bigint(|a| Int::from_bigint(a.sqrt())))
    }

    /// Left shift with a caller-supplied count of any width. A count that
    /// does not fit the platform size type is reported as an overflow of
    /// that type, never silently truncated.
    pub fn checked_shl(&self, bits: u128) -> Result<Self, Error> {
        let bits: usize = checked_cast(bits)?;
        Ok(self.shl_usize(bits))
    }

    /// Right shift with a caller-supplied count of any width; see
    /// [checked_shl](Int::checked_shl)
    pub fn checked_shr(&self, bits: u128) -> Result<Self, Error> {
        let bits: usize = checked_cast(bits)?;
        Ok(self.shr_usize(bits))
    }

    fn shl_usize(&self, bits: usize) -> Self {
        match &self.repr {
            Repr::Static(a) => match StaticInt::shl(a, bits) {
                Some(res) => Int::from_static(res),
                None => self.with_bigint(|x| Int::from_bigint(x << bits)),
            },
            Repr::Dynamic(d) => Int::from_bigint(d.get() << bits),
        }
    }

    /// Right shifts truncate the magnitude toward zero (division by a power
    /// of two in the truncated division family), for negative values as
    /// well. This deliberately differs from an arithmetic (flooring) shift.
    fn shr_usize(&self, bits: usize) -> Self {
        match &self.repr {
            Repr::Static(a) => Int::from_static(StaticInt::shr(a, bits)),
            Repr::Dynamic(d) => {
                let mag = d.get().magnitude() >> bits;
                Int::from_bigint(BigInt::from_biguint(d.get().sign(), mag))
            }
        }
    }
}

fn static_pow<const N: usize>(base: &StaticInt<N>, mut exp: u32) -> Option<StaticInt<N>> {
    let mut base = *base;
    let mut res = StaticInt::one();
    while exp > 0 {
        if exp & 1 == 1 {
            res = StaticInt::mul(&res, &base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = StaticInt::mul(&base, &base)?;
        }
    }
    Some(res)
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn isqrt_u128(x: u128) -> u128 {
    if x < 2 {
        return x;
    }
    // Newton iteration from an initial guess that is at least the root
    let bits = 128 - x.leading_zeros() as usize;
    let mut res = 1u128 << ((bits + 1) / 2);
    loop {
        let next = (res + x / res) >> 1;
        if next >= res {
            return res;
        }
        res = next;
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident, $compute:expr) => {
        impl<const N: usize> $imp<&Int<N>> for &Int<N> {
            type Output = Int<N>;

            fn $method(self, rhs: &Int<N>) -> Int<N> {
                let compute: fn(&Int<N>, &Int<N>) -> Int<N> = $compute;
                compute(self, rhs)
            }
        }

        impl<const N: usize> $imp<Int<N>> for &Int<N> {
            type Output = Int<N>;

            fn $method(self, rhs: Int<N>) -> Int<N> {
                self.$method(&rhs)
            }
        }

        impl<const N: usize> $imp<&Int<N>> for Int<N> {
            type Output = Int<N>;

            fn $method(self, rhs: &Int<N>) -> Int<N> {
                (&self).$method(rhs)
            }
        }

        impl<const N: usize> $imp<Int<N>> for Int<N> {
            type Output = Int<N>;

            fn $method(self, rhs: Int<N>) -> Int<N> {
                (&self).$method(&rhs)
            }
        }

        impl<const N: usize> $imp_assign<&Int<N>> for Int<N> {
            fn $method_assign(&mut self, rhs: &Int<N>) {
                *self = (&*self).$method(rhs);
            }
        }

        impl<const N: usize> $imp_assign<Int<N>> for Int<N> {
            fn $method_assign(&mut self, rhs: Int<N>) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, |a, b| Int::binop(
    a,
    b,
    StaticInt::add,
    |x, y| x + y
));
forward_binop!(Sub, sub, SubAssign, sub_assign, |a, b| Int::binop(
    a,
    b,
    StaticInt::sub,
    |x, y| x - y
));
forward_binop!(Mul, mul, MulAssign, mul_assign, |a, b| Int::binop(
    a,
    b,
    StaticInt::mul,
    |x, y| x * y
));
// the `Div` and `Rem` operators panic on a zero divisor like the built-in
// integer types; `checked_div`, `checked_rem` and `div_rem` report it
forward_binop!(Div, div, DivAssign, div_assign, |a, b| match a
    .checked_div(b)
{
    Ok(res) => res,
    Err(e) => panic!("{e}"),
});
forward_binop!(Rem, rem, RemAssign, rem_assign, |a, b| match a
    .checked_rem(b)
{
    Ok(res) => res,
    Err(e) => panic!("{e}"),
});
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| {
    Int::bit_op(a, b, |x, y| StaticInt::and(x, y), |x, y| x & y)
});
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| {
    Int::bit_op(a, b, |x, y| StaticInt::or(x, y), |x, y| x | y)
});
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| {
    Int::bit_op(a, b, |x, y| StaticInt::xor(x, y), |x, y| x ^ y)
});

macro_rules! scalar_binop {
    ($($t:ty)*) => {$(
        impl<const N: usize> Add<$t> for &Int<N> {
            type Output = Int<N>;

            fn add(self, rhs: $t) -> Int<N> {
                self + &Int::<N>::from(rhs)
            }
        }

        impl<const N: usize> Add<$t> for Int<N> {
            type Output = Int<N>;

            fn add(self, rhs: $t) -> Int<N> {
                &self + &Int::<N>::from(rhs)
            }
        }

        impl<const N: usize> Sub<$t> for &Int<N> {
            type Output = Int<N>;

            fn sub(self, rhs: $t) -> Int<N> {
                self - &Int::<N>::from(rhs)
            }
        }

        impl<const N: usize> Sub<$t> for Int<N> {
            type Output = Int<N>;

            fn sub(self, rhs: $t) -> Int<N> {
                &self - &Int::<N>::from(rhs)
            }
        }

        impl<const N: usize> Mul<$t> for &Int<N> {
            type Output = Int<N>;

            fn mul(self, rhs: $t) -> Int<N> {
                self * &Int::<N>::from(rhs)
            }
        }

        impl<const N: usize> Mul<$t> for Int<N> {
            type Output = Int<N>;

            fn mul(self, rhs: $t) -> Int<N> {
                &self * &Int::<N>::from(rhs)
            }
        }
    )*};
}

scalar_binop!(i32 i64 i128 u32 u64 u128);

impl<const N: usize> Neg for Int<N> {
    type Output = Int<N>;

    fn neg(self) -> Int<N> {
        match self.repr {
            Repr::Static(s) => Int::from_static(s.neg()),
            // storing through `from_bigint` keeps the re-pack guarantee for
            // explicitly promoted small values
            Repr::Dynamic(mut d) => {
                let big = mem::take(d.get_mut());
                Int::from_bigint(-big)
            }
        }
    }
}

impl<const N: usize> Neg for &Int<N> {
    type Output = Int<N>;

    fn neg(self) -> Int<N> {
        -self.clone()
    }
}

macro_rules! shift_ops {
    ($($t:ty)*) => {$(
        impl<const N: usize> Shl<$t> for &Int<N> {
            type Output = Int<N>;

            fn shl(self, s: $t) -> Int<N> {
                self.shl_usize(s as usize)
            }
        }

        impl<const N: usize> Shl<$t> for Int<N> {
            type Output = Int<N>;

            fn shl(self, s: $t) -> Int<N> {
                (&self).shl(s)
            }
        }

        impl<const N: usize> Shr<$t> for &Int<N> {
            type Output = Int<N>;

            fn shr(self, s: $t) -> Int<N> {
                self.shr_usize(s as usize)
            }
        }

        impl<const N: usize> Shr<$t> for Int<N> {
            type Output = Int<N>;

            fn shr(self, s: $t) -> Int<N> {
                (&self).shr(s)
            }
        }

        impl<const N: usize> ShlAssign<$t> for Int<N> {
            fn shl_assign(&mut self, s: $t) {
                *self = (&*self).shl(s);
            }
        }

        impl<const N: usize> ShrAssign<$t> for Int<N> {
            fn shr_assign(&mut self, s: $t) {
                *self = (&*self).shr(s);
            }
        }
    )*};
}

shift_ops!(u32 usize);

#[cfg(test)]
mod tests {
    use crate::{Int1, Int2};

    #[test]
    fn self_operation() {
        let mut x = Int2::from(123);
        x = &x * &x;
        assert_eq!(x, Int2::from(15129));
        let mut y = Int2::from(7);
        y += y.clone();
        assert_eq!(y, Int2::from(14));
        y -= y.clone();
        assert!(y.is_zero());
    }

    #[test]
    fn promote_on_overflow_and_repack() {
        let a = Int1::from(u64::MAX);
        let b = &a * &a;
        assert!(b.is_dynamic());
        let (q, r) = b.div_rem(&a).unwrap();
        assert!(q.is_static() && r.is_static());
        assert_eq!(q, a);
        assert!(r.is_zero());
    }

    #[test]
    fn division_by_zero_is_reported() {
        let x = Int2::from(7);
        let z = Int2::new();
        assert_eq!(x.checked_div(&z), Err(crate::Error::DivisionByZero));
        assert_eq!(x, Int2::from(7));
        assert!(z.is_zero());
    }

    #[test]
    #[should_panic(expected = "division or modulo by zero")]
    fn division_operator_panics_on_zero() {
        let _ = Int2::from(7) / Int2::new();
    }

    #[test]
    fn shift_count_validation() {
        let x = Int2::from(3);
        assert_eq!(x.checked_shl(2).unwrap(), Int2::from(12));
        assert!(matches!(
            x.checked_shl(u128::MAX),
            Err(crate::Error::Overflow { .. })
        ));
    }
}
