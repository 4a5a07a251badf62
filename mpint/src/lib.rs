//! Multiprecision integers with small-value optimization.
//!
//! The [Int] value type stores integers fitting within `N` inline limbs
//! without any heap allocation, and transparently promotes to an
//! arbitrary-precision backend (`num-bigint`) when a value outgrows the
//! inline capacity. Every operation picks the fastest valid path for the
//! representations of its operands, and a result whose true magnitude fits
//! the inline capacity is always stored inline again, even when it was
//! computed through the backend. The representation never leaks into the
//! observable value semantics; it is only visible through the
//! [is_static](Int::is_static)/[is_dynamic](Int::is_dynamic) introspection
//! functions.
//!
//! ```
//! use mpint::Int1;
//!
//! let a = Int1::from(u64::MAX);
//! let b = &a * &a;
//! assert!(a.is_static() && b.is_dynamic());
//! // a quotient that fits inline is repacked inline
//! assert!((&b / &a).is_static());
//! ```
//!
//! Fallible operations return a handleable [Error]; the only panicking
//! surfaces are the `core::ops` division operators on a zero divisor, which
//! follow the conventions of the built-in integer types.

// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

mod cache;
mod cmp;
mod convert;
mod dynamic;
mod error;
mod int;
mod ops;
mod strings;

pub use cache::free_integer_caches;
pub use convert::checked_cast;
pub use error::Error;
pub use int::{Int, Int1, Int2, Int3};
pub use mpint_core::{Digit, StaticInt, BITS};

pub mod prelude {
    pub use crate::{checked_cast, free_integer_caches, Error, Int, Int1, Int2, Int3};
}
