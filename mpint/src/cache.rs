//! Thread-local recycling of backend magnitude allocations.
//!
//! Promoting a static value to the backend representation needs a heap
//! buffer for the magnitude. Typical workloads promote and drop in tight
//! cycles, so instead of round-tripping through the allocator every time,
//! each thread keeps a small pool of magnitude buffers that promotion takes
//! from and `DynInt::drop` returns to. The pool is lazily created on first
//! promotion in a thread and destroyed at thread exit.

use std::cell::RefCell;

use num_bigint::BigUint;
use num_traits::Zero;

/// Maximum number of buffers retained per thread
const MAX_CACHE_ENTRIES: usize = 16;

/// Buffers holding values wider than this are returned to the allocator
/// instead of being retained
const MAX_CACHED_BITS: u64 = 4096;

thread_local! {
    static POOL: RefCell<Vec<BigUint>> = const { RefCell::new(Vec::new()) };
}

/// Takes a recycled magnitude buffer, or a fresh zero if the pool is empty.
/// The returned value is unspecified; callers must overwrite it.
pub(crate) fn take_magnitude() -> BigUint {
    POOL.with(|pool| pool.borrow_mut().pop())
        .unwrap_or_else(BigUint::zero)
}

/// Offers a magnitude buffer back to the calling thread's pool.
pub(crate) fn recycle_magnitude(mag: BigUint) {
    POOL.with(|pool| {
        let mut pool = pool.borrow_mut();
        if pool.len() < MAX_CACHE_ENTRIES && mag.bits() <= MAX_CACHED_BITS {
            pool.push(mag);
        }
    });
}

/// Drains the calling thread's pool of recycled backend allocations.
///
/// This is a diagnostic aid, primarily for use with leak-checking tools
/// that would otherwise report the pooled buffers still reachable at
/// program exit. It is safe to call at any time: only buffers currently
/// *pooled* are released, never buffers owned by live integers. Values
/// promoted after the call simply allocate fresh buffers.
pub fn free_integer_caches() {
    POOL.with(|pool| pool.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_cycle() {
        free_integer_caches();
        recycle_magnitude(BigUint::from(123u32));
        let mag = take_magnitude();
        assert_eq!(mag, BigUint::from(123u32));
        assert!(take_magnitude().is_zero());
        free_integer_caches();
    }

    #[test]
    fn oversized_buffers_not_retained() {
        free_integer_caches();
        recycle_magnitude(BigUint::from(1u32) << 8192);
        assert!(take_magnitude().is_zero());
    }
}
