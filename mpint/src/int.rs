use core::fmt;

use mpint_core::StaticInt;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed};

use crate::{cache, dynamic::DynInt};

/// The active representation of an [Int].
///
/// # Invariants
///
/// - Exactly one variant is active at any time (the enum tag is the
///   discriminant the design requires) and the `Int` exclusively owns it.
/// - `Static` holds a normalized sign/magnitude value in `N` inline limbs.
/// - `Dynamic` holds the exclusively-owned backend value. A dynamic value
///   never reverts to static in place; it is only ever replaced wholesale
///   when an operation stores a new result into the `Int`.
#[derive(Debug, Clone)]
pub(crate) enum Repr<const N: usize> {
    Static(StaticInt<N>),
    Dynamic(DynInt),
}

/// A signed integer with `N` limbs of inline storage and transparent
/// promotion to an arbitrary-precision backend.
///
/// `Int<N>` behaves like a built-in integer type with value semantics:
/// construction from native integers, floats and strings, the full set of
/// arithmetic and comparison operators, and checked conversions back to
/// native types. Values whose magnitude fits in `N` 64-bit limbs live
/// entirely inline; wider values are promoted to the backend. Any operation
/// result that fits inline is stored inline, even when one of the inputs
/// was dynamic and the computation ran through the backend, so transient
/// overflows do not pin a value to the heap.
///
/// The capacity `N` is a compile-time tuning knob, not a semantic limit.
/// [Int1], [Int2] and [Int3] cover the common cases.
#[derive(Clone)]
pub struct Int<const N: usize> {
    pub(crate) repr: Repr<N>,
}

/// An [Int] with one inline limb
pub type Int1 = Int<1>;
/// An [Int] with two inline limbs
pub type Int2 = Int<2>;
/// An [Int] with three inline limbs
pub type Int3 = Int<3>;

impl<const N: usize> Int<N> {
    /// Zero-value construction, always static
    #[inline]
    pub const fn new() -> Self {
        Int {
            repr: Repr::Static(StaticInt::zero()),
        }
    }

    /// Zero-value construction, always static
    #[inline]
    pub const fn zero() -> Self {
        Self::new()
    }

    /// One-value construction, always static
    #[inline]
    pub const fn one() -> Self {
        Int {
            repr: Repr::Static(StaticInt::one()),
        }
    }

    #[inline]
    pub(crate) const fn from_static(s: StaticInt<N>) -> Self {
        Int {
            repr: Repr::Static(s),
        }
    }

    /// Stores a backend result, re-packing it into static form if its
    /// magnitude fits `N` limbs. This is what keeps "promote once, shrink
    /// back" workflows cheap and what guarantees that a result which fits
    /// inline is never left dynamic.
    pub(crate) fn from_bigint(big: BigInt) -> Self {
        let (sign, mag) = big.into_parts();
        match StaticInt::try_from_limbs(mag.iter_u64_digits(), sign == Sign::Minus) {
            Some(s) => {
                cache::recycle_magnitude(mag);
                Int::from_static(s)
            }
            None => Int {
                repr: Repr::Dynamic(DynInt::from_bigint(BigInt::from_biguint(sign, mag))),
            },
        }
    }

    /// Runs `f` over the backend view of `self`, materializing a transient
    /// backend value through the promotion cache if `self` is static.
    pub(crate) fn with_bigint<R>(&self, f: impl FnOnce(&BigInt) -> R) -> R {
        match &self.repr {
            Repr::Static(s) => f(DynInt::from_static(s).get()),
            Repr::Dynamic(d) => f(d.get()),
        }
    }

    /// Runs `f` over the backend views of both operands, materializing
    /// transient backend values for the static ones.
    pub(crate) fn with_bigints<R>(
        lhs: &Self,
        rhs: &Self,
        f: impl FnOnce(&BigInt, &BigInt) -> R,
    ) -> R {
        match (&lhs.repr, &rhs.repr) {
            (Repr::Dynamic(a), Repr::Dynamic(b)) => f(a.get(), b.get()),
            (Repr::Dynamic(a), Repr::Static(b)) => f(a.get(), DynInt::from_static(b).get()),
            (Repr::Static(a), Repr::Dynamic(b)) => f(DynInt::from_static(a).get(), b.get()),
            (Repr::Static(a), Repr::Static(b)) => {
                f(DynInt::from_static(a).get(), DynInt::from_static(b).get())
            }
        }
    }

    /// Whether the value is currently stored inline
    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self.repr, Repr::Static(_))
    }

    /// Whether the value is currently stored in the backend
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self.repr, Repr::Dynamic(_))
    }

    /// Explicitly promotes to the backend representation. Returns `false`
    /// if the value was already dynamic. The numeric value is unchanged.
    pub fn promote(&mut self) -> bool {
        match &self.repr {
            Repr::Static(s) => {
                self.repr = Repr::Dynamic(DynInt::from_static(s));
                true
            }
            Repr::Dynamic(_) => false,
        }
    }

    /// Sign of the value: -1, 0, or 1
    pub fn sign(&self) -> i32 {
        match &self.repr {
            Repr::Static(s) => s.sign(),
            Repr::Dynamic(d) => match d.get().sign() {
                Sign::Minus => -1,
                Sign::NoSign => 0,
                Sign::Plus => 1,
            },
        }
    }

    /// The sign as a value: -1, 0, or 1
    pub fn signum(&self) -> Self {
        match self.sign() {
            1 => Self::one(),
            0 => Self::zero(),
            _ => -Self::one(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Static(s) => s.is_zero(),
            Repr::Dynamic(d) => d.get().sign() == Sign::NoSign,
        }
    }

    pub fn is_one(&self) -> bool {
        match &self.repr {
            Repr::Static(s) => s.is_one(),
            Repr::Dynamic(d) => d.get().is_one(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    pub fn is_even(&self) -> bool {
        match &self.repr {
            Repr::Static(s) => s.is_even(),
            Repr::Dynamic(d) => !d.get().magnitude().bit(0),
        }
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Number of significant bits in the magnitude; 0 for zero
    pub fn nbits(&self) -> usize {
        match &self.repr {
            Repr::Static(s) => s.nbits(),
            Repr::Dynamic(d) => d.get().bits() as usize,
        }
    }

    /// Number of set bits in the magnitude
    pub fn count_ones(&self) -> usize {
        match &self.repr {
            Repr::Static(s) => s.count_ones(),
            Repr::Dynamic(d) => d.get().magnitude().count_ones() as usize,
        }
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        match &self.repr {
            Repr::Static(s) => Int::from_static(s.abs()),
            // storing through `from_bigint` keeps the re-pack guarantee for
            // explicitly promoted small values
            Repr::Dynamic(d) => Int::from_bigint(d.get().abs()),
        }
    }
}

impl<const N: usize> Default for Int<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
