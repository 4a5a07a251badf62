use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{int::Repr, Int};

impl<const N: usize> Ord for Int<N> {
    /// Total order by numeric value, independent of representation
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (&self.repr, &rhs.repr) {
            (Repr::Static(a), Repr::Static(b)) => a.cmp(b),
            // mixed and dynamic comparisons go through the backend, but a
            // sign difference is decided without materializing anything
            _ => {
                let (sa, sb) = (self.sign(), rhs.sign());
                if sa != sb {
                    return sa.cmp(&sb);
                }
                Self::with_bigints(self, rhs, |a, b| a.cmp(b))
            }
        }
    }
}

impl<const N: usize> PartialOrd for Int<N> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<const N: usize> PartialEq for Int<N> {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl<const N: usize> Eq for Int<N> {}

/// Hashes the numeric value, not the representation: a value hashes the
/// same whether it is stored inline or in the backend, so explicit
/// promotion cannot split map keys.
impl<const N: usize> Hash for Int<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.sign() as i8).hash(state);
        match &self.repr {
            Repr::Static(s) => {
                for &limb in s.digits() {
                    limb.hash(state);
                }
            }
            Repr::Dynamic(d) => {
                for limb in d.get().magnitude().iter_u64_digits() {
                    limb.hash(state);
                }
            }
        }
    }
}

macro_rules! scalar_cmp {
    ($($t:ty)*) => {$(
        impl<const N: usize> PartialEq<$t> for Int<N> {
            fn eq(&self, rhs: &$t) -> bool {
                *self == Int::<N>::from(*rhs)
            }
        }

        impl<const N: usize> PartialOrd<$t> for Int<N> {
            fn partial_cmp(&self, rhs: &$t) -> Option<Ordering> {
                Some(self.cmp(&Int::<N>::from(*rhs)))
            }
        }
    )*};
}

scalar_cmp!(i32 i64 i128 u32 u64 u128);

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use crate::Int1;

    fn hash_of(x: &Int1) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    #[test]
    fn cross_representation_equality() {
        let a = Int1::from(-42);
        let mut b = a.clone();
        b.promote();
        assert!(a.is_static() && b.is_dynamic());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert!(a >= b && a <= b);
    }

    #[test]
    fn ordering_across_widths() {
        let small = Int1::from(-3);
        let wide_neg = -(Int1::from(u64::MAX) * Int1::from(u64::MAX));
        let wide_pos = -wide_neg.clone();
        assert!(wide_neg.is_dynamic());
        assert!(wide_neg < small);
        assert!(small < Int1::from(0));
        assert!(Int1::from(0) < wide_pos);
        assert!(small < wide_pos);
    }

    #[test]
    fn scalar_comparisons() {
        let x = Int1::from(100);
        assert_eq!(x, 100i64);
        assert!(x > 99u32);
        assert!(x < 1i128 << 100);
    }
}
