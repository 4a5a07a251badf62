use core::fmt;

use thiserror::Error;

/// Errors produced by fallible `mpint` operations.
///
/// Static-path capacity overflow is *not* represented here: it is an
/// internal signal consumed by the dispatch engine to trigger promotion and
/// never escapes to callers. Every failed operation leaves its operands in
/// their previous valid state.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A character in an integer string is not a valid digit for the
    /// requested base
    #[error("invalid character {c:?} in integer string for base {base}")]
    InvalidDigit { c: char, base: u32 },

    /// An integer string with a sign or prefix but no digits, or an empty
    /// string
    #[error("integer string contains no digits")]
    NoDigits,

    /// A base outside `2..=62` (or 0 for prefix auto-detection where that is
    /// allowed)
    #[error("base {0} is outside the supported range 2..=62")]
    UnsupportedBase(u32),

    /// Construction from a floating-point value that is NaN or infinite
    #[error("cannot construct an integer from the non-finite value {0}")]
    NonFinite(f64),

    /// Square root of a negative value
    #[error("cannot compute the square root of the negative value {value}")]
    SqrtOfNegative { value: String },

    /// Division or modulo by zero
    #[error("integer division or modulo by zero")]
    DivisionByZero,

    /// A conversion target too narrow for the value, naming the attempted
    /// target type and the offending value
    #[error("value {value} overflows the range of the target type {target}")]
    Overflow {
        target: &'static str,
        value: String,
    },
}

impl Error {
    pub(crate) fn overflow<T>(value: impl fmt::Display) -> Self {
        Error::Overflow {
            target: core::any::type_name::<T>(),
            value: value.to_string(),
        }
    }
}
