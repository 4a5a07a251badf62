//! Inline sign/magnitude integer representation.
//!
//! This is the allocation-free half of the `mpint` system. This crate is
//! strictly `no-std` and `no-alloc`, not even requiring an allocator to be
//! compiled. It supplies the [StaticInt] storage type: a fixed capacity of
//! `N` little-endian limbs plus a signed size field, with arithmetic
//! primitives that report capacity overflow through `Option` instead of
//! unwinding. The promotion decision on overflow belongs to the dispatch
//! engine in the `mpint` crate, not to this one.

#![no_std]
// There are many guaranteed nonzero lengths
#![allow(clippy::len_without_is_empty)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

pub use mpint_internals::{Digit, IDigit, BITS, DIGIT_BYTES, MAX};

mod arith;
mod bitwise;
mod static_int;

pub use static_int::StaticInt;
