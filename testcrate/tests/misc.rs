use mpint::prelude::*;

#[test]
fn representation_transitions() {
    // fits one limb exactly
    let a = Int1::from(u64::MAX);
    assert!(a.is_static());
    // one past the limb boundary promotes
    let b = &a + 1u64;
    assert!(b.is_dynamic());
    assert_eq!(b.to_string(), "18446744073709551616");
    // and coming back under the boundary repacks
    let c = &b - 1u64;
    assert!(c.is_static());
    assert_eq!(a, c);
}

#[test]
fn mixed_representation_arithmetic() {
    let small = Int2::from(7);
    let mut promoted = Int2::from(7);
    assert!(promoted.promote());
    assert!(promoted.is_dynamic());
    // value semantics are identical regardless of representation
    assert_eq!(&small + &promoted, Int2::from(14));
    assert_eq!(&small * &promoted, Int2::from(49));
    assert_eq!(&promoted - &small, Int2::zero());
    // results of mixed operations repack when they fit
    assert!((&small + &promoted).is_static());
}

#[test]
fn failed_operations_preserve_operands() {
    let a = Int2::from(10);
    let zero = Int2::zero();
    assert!(a.checked_div(&zero).is_err());
    assert!(a.checked_rem(&zero).is_err());
    assert!(a.div_rem(&zero).is_err());
    assert_eq!(a, Int2::from(10));
    assert!(zero.is_zero());

    let neg = Int2::from(-9);
    assert!(neg.sqrt().is_err());
    assert_eq!(neg, Int2::from(-9));
}

#[test]
fn capacity_is_a_tuning_knob_not_a_limit() {
    // the same computation agrees across inline capacities
    let big = "340282366920938463463374607431768211456"; // 2^128
    let x1: Int1 = big.parse().unwrap();
    let x2: Int2 = big.parse().unwrap();
    let x3: Int3 = big.parse().unwrap();
    assert!(x1.is_dynamic() && x2.is_dynamic());
    // 2^128 needs 129 bits, which fits three limbs
    assert!(x3.is_static());
    assert_eq!(x1.to_string(), big);
    assert_eq!(x2.to_string(), big);
    assert_eq!(x3.to_string(), big);
    assert_eq!((&x1 * &x1).to_string(), (&x3 * &x3).to_string());
}

#[test]
fn value_queries() {
    let x = Int2::from(-6);
    assert_eq!(x.sign(), -1);
    assert_eq!(x.signum(), Int2::from(-1));
    assert!(x.is_even() && !x.is_odd());
    assert!(x.is_negative());
    assert_eq!(x.abs(), Int2::from(6));
    assert_eq!(x.nbits(), 3);
    assert_eq!(x.count_ones(), 2);

    let z = Int2::default();
    assert!(z.is_zero());
    assert_eq!(z.signum(), Int2::zero());
    assert_eq!(z.nbits(), 0);

    assert!(Int2::one().is_one());
    let mut one = Int2::one();
    one.promote();
    assert!(one.is_one());
}

#[test]
fn cache_drain_is_transparent() {
    // churn the promotion cache, drain it, and keep computing
    for i in 0..100u64 {
        let x = Int1::from(i) + Int1::from(u64::MAX);
        assert!(x.is_dynamic());
        drop(x);
    }
    free_integer_caches();
    let x = Int1::from(5) + Int1::from(u64::MAX);
    assert_eq!(x.to_string(), "18446744073709551620");
    free_integer_caches();
}

#[test]
fn trait_based_primitive_extraction() {
    use num_traits::ToPrimitive;

    let x = Int2::from(-42);
    assert_eq!(x.to_i64(), Some(-42));
    assert_eq!(x.to_i8(), Some(-42i8));
    assert_eq!(x.to_u64(), None);
    assert_eq!(Int2::from(i64::MIN).to_i64(), Some(i64::MIN));
    // extraction goes by value, not by representation
    let mut promoted = Int2::from(300);
    promoted.promote();
    assert_eq!(promoted.to_u64(), Some(300));
    assert_eq!(promoted.to_u8(), None);
    let wide = Int2::from(u128::MAX) + Int2::one();
    assert_eq!(wide.to_u128(), None);
    assert_eq!(ToPrimitive::to_f64(&wide), Some(2f64.powi(128)));
}

#[test]
fn hashing_is_representation_independent() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    let mut x = Int2::from(1234);
    set.insert(x.clone());
    x.promote();
    // the same value in dynamic form is not a distinct key
    assert!(!set.insert(x));
    assert_eq!(set.len(), 1);
}
