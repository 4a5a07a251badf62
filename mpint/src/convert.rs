use core::fmt;

use mpint_core::StaticInt;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::{int::Repr, Error, Int};

/// Narrowing conversion that reports out-of-range inputs through the
/// common [Error::Overflow] shape instead of `TryFromIntError`
pub fn checked_cast<T, U>(x: T) -> Result<U, Error>
where
    T: Copy + fmt::Display,
    U: TryFrom<T>,
{
    U::try_from(x).map_err(|_| Error::overflow::<U>(x))
}

macro_rules! from_unsigned {
    ($($t:ty)*) => {$(
        impl<const N: usize> From<$t> for Int<N> {
            fn from(x: $t) -> Self {
                match StaticInt::try_from_u128(x as u128) {
                    Some(s) => Int::from_static(s),
                    None => Int::from_bigint(BigInt::from(x)),
                }
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty)*) => {$(
        impl<const N: usize> From<$t> for Int<N> {
            fn from(x: $t) -> Self {
                match StaticInt::try_from_i128(x as i128) {
                    Some(s) => Int::from_static(s),
                    None => Int::from_bigint(BigInt::from(x)),
                }
            }
        }
    )*};
}

from_unsigned!(u8 u16 u32 u64 usize u128);
from_signed!(i8 i16 i32 i64 isize i128);

impl<const N: usize> ToPrimitive for Int<N> {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|x| i64::try_from(x).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|x| u64::try_from(x).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        match &self.repr {
            Repr::Static(s) => {
                let mag = s.to_u128_magnitude()?;
                if s.is_negative() {
                    match mag.cmp(&(1u128 << 127)) {
                        core::cmp::Ordering::Greater => None,
                        core::cmp::Ordering::Equal => Some(i128::MIN),
                        core::cmp::Ordering::Less => Some(-(mag as i128)),
                    }
                } else if mag > i128::MAX as u128 {
                    None
                } else {
                    Some(mag as i128)
                }
            }
            Repr::Dynamic(d) => d.get().to_i128(),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match &self.repr {
            Repr::Static(s) => {
                if s.is_negative() {
                    None
                } else {
                    s.to_u128_magnitude()
                }
            }
            Repr::Dynamic(d) => d.get().to_u128(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match &self.repr {
            Repr::Static(s) => match s.to_u128_magnitude() {
                Some(mag) => {
                    let mag = mag as f64;
                    Some(if s.is_negative() { -mag } else { mag })
                }
                None => self.with_bigint(|big| big.to_f64()),
            },
            Repr::Dynamic(d) => d.get().to_f64(),
        }
    }
}

impl<const N: usize> Int<N> {
    /// Conversion to `f64` with rounding; values beyond the `f64` range
    /// map to the infinity of the matching sign
    pub fn to_f64(&self) -> f64 {
        match ToPrimitive::to_f64(self) {
            Some(x) => x,
            None => {
                if self.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

macro_rules! try_into_native {
    ($($t:ty => $m:ident),* $(,)?) => {$(
        impl<const N: usize> TryFrom<&Int<N>> for $t {
            type Error = Error;

            fn try_from(x: &Int<N>) -> Result<Self, Error> {
                x.$m().ok_or_else(|| Error::overflow::<$t>(x))
            }
        }

        impl<const N: usize> TryFrom<Int<N>> for $t {
            type Error = Error;

            fn try_from(x: Int<N>) -> Result<Self, Error> {
                <$t>::try_from(&x)
            }
        }
    )*};
}

try_into_native!(
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    isize => to_isize,
    i128 => to_i128,
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    usize => to_usize,
    u128 => to_u128,
);

/// Truncates toward zero; NaN and infinities are rejected
impl<const N: usize> TryFrom<f64> for Int<N> {
    type Error = Error;

    fn try_from(x: f64) -> Result<Self, Error> {
        if !x.is_finite() {
            return Err(Error::NonFinite(x));
        }
        match BigInt::from_f64(x.trunc()) {
            Some(big) => Ok(Int::from_bigint(big)),
            None => Err(Error::NonFinite(x)),
        }
    }
}

impl<const N: usize> TryFrom<f32> for Int<N> {
    type Error = Error;

    fn try_from(x: f32) -> Result<Self, Error> {
        Self::try_from(x as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Int1, Int2};

    #[test]
    fn native_round_trips() {
        assert_eq!(i64::try_from(Int1::from(i64::MIN)), Ok(i64::MIN));
        assert_eq!(u64::try_from(Int1::from(u64::MAX)), Ok(u64::MAX));
        assert_eq!(i128::try_from(Int2::from(i128::MIN)), Ok(i128::MIN));
        assert_eq!(u128::try_from(Int2::from(u128::MAX)), Ok(u128::MAX));
        assert_eq!(u8::try_from(Int1::from(255)), Ok(255u8));
    }

    #[test]
    fn narrowing_overflow_reports_value() {
        let e = u8::try_from(Int1::from(256)).unwrap_err();
        match e {
            Error::Overflow { target, value } => {
                assert_eq!(target, "u8");
                assert_eq!(value, "256");
            }
            _ => panic!("unexpected error {e:?}"),
        }
        assert!(u64::try_from(Int1::from(-1)).is_err());
        let wide = Int2::from(u128::MAX) + Int2::one();
        assert!(wide.is_dynamic());
        assert!(u128::try_from(&wide).is_err());
    }

    #[test]
    fn float_construction() {
        assert_eq!(Int2::try_from(-7.9f64), Ok(Int2::from(-7)));
        assert_eq!(Int2::try_from(0.25f64), Ok(Int2::zero()));
        assert_eq!(Int2::try_from(1e30f64).unwrap().to_f64(), 1e30f64);
        assert!(matches!(
            Int2::try_from(f64::NAN),
            Err(Error::NonFinite(x)) if x.is_nan()
        ));
        assert_eq!(
            Int2::try_from(f32::INFINITY),
            Err(Error::NonFinite(f64::INFINITY))
        );
    }

    #[test]
    fn float_extraction() {
        assert_eq!(Int2::from(-3).to_f64(), -3.0);
        let huge = Int1::from(2).pow(8000);
        assert!(huge.to_f64().is_infinite());
        assert!((-huge).to_f64().is_sign_negative());
    }

    #[test]
    fn checked_cast_shapes_errors() {
        let ok: Result<u8, _> = checked_cast(200u32);
        assert_eq!(ok, Ok(200u8));
        let err: Result<u8, _> = checked_cast(300u32);
        assert!(matches!(err, Err(Error::Overflow { target: "u8", .. })));
    }
}
