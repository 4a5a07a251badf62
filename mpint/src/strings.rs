//! String conversions for [Int].
//!
//! Bases 2 through 62 are supported in both directions, plus base 0 on
//! input for prefix auto-detection (`0x`/`0X` hexadecimal, `0b`/`0B`
//! binary, a leading `0` octal, decimal otherwise). For bases up to 36
//! digits are case-insensitive on input and lowercase on output; for bases
//! 37 through 62 the digit alphabet is case-sensitive: `0-9`, then `A-Z`
//! for 10 through 35, then `a-z` for 36 through 61.

use core::{fmt, str::FromStr};

use mpint_core::{Digit, StaticInt};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{int::Repr, Error, Int};

const LOWER_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn digit_value(c: char, base: u32) -> Option<u32> {
    let v = if base <= 36 {
        match c {
            '0'..='9' => (c as u32) - ('0' as u32),
            'a'..='z' => (c as u32) - ('a' as u32) + 10,
            'A'..='Z' => (c as u32) - ('A' as u32) + 10,
            _ => return None,
        }
    } else {
        match c {
            '0'..='9' => (c as u32) - ('0' as u32),
            'A'..='Z' => (c as u32) - ('A' as u32) + 10,
            'a'..='z' => (c as u32) - ('a' as u32) + 36,
            _ => return None,
        }
    };
    if v < base {
        Some(v)
    } else {
        None
    }
}

fn digit_char(v: Digit, base: u32) -> u8 {
    let v = v as u32;
    debug_assert!(v < base);
    if base <= 36 {
        LOWER_DIGITS[v as usize]
    } else if v < 10 {
        b'0' + (v as u8)
    } else if v < 36 {
        b'A' + ((v - 10) as u8)
    } else {
        b'a' + ((v - 36) as u8)
    }
}

/// The largest power of `base` that fits one limb, and its exponent.
/// Parsing and formatting move one such chunk per big-integer step.
fn chunk_params(base: u32) -> (Digit, u32) {
    let mut chunk_base = base as Digit;
    let mut chunk_len = 1;
    while let Some(next) = chunk_base.checked_mul(base as Digit) {
        chunk_base = next;
        chunk_len += 1;
    }
    (chunk_base, chunk_len)
}

impl<const N: usize> Int<N> {
    /// `self * mul + add` in place, promoting on static capacity overflow.
    /// Used by chunked parsing, so `self` is never negative here.
    fn mul_add_digit(&mut self, mul: Digit, add: Digit) {
        if let Repr::Static(s) = &self.repr {
            let res = StaticInt::mul_digit(s, mul).and_then(|t| StaticInt::add_digit(&t, add));
            if let Some(res) = res {
                self.repr = Repr::Static(res);
                return;
            }
        }
        self.promote();
        if let Repr::Dynamic(d) = &mut self.repr {
            let big = d.get_mut();
            *big *= mul;
            *big += add;
        }
    }

    /// Parses an integer from a string in the given base.
    ///
    /// `base` is either in `2..=62`, or 0 to auto-detect the base from a
    /// prefix after the optional sign: `0x`/`0X` for 16, `0b`/`0B` for 2, a
    /// leading `0` for 8, decimal otherwise. No whitespace is accepted.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, Error> {
        if base != 0 && (base < 2 || base > 62) {
            return Err(Error::UnsupportedBase(base));
        }
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (base, digits) = if base != 0 {
            (base, rest)
        } else if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            (16, hex)
        } else if let Some(bin) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
            (2, bin)
        } else if rest.len() > 1 && rest.starts_with('0') {
            (8, &rest[1..])
        } else {
            (10, rest)
        };
        if digits.is_empty() {
            return Err(Error::NoDigits);
        }
        let (chunk_base, chunk_len) = chunk_params(base);
        let mut res = Self::zero();
        let mut acc: Digit = 0;
        let mut count = 0;
        for c in digits.chars() {
            let v = digit_value(c, base).ok_or(Error::InvalidDigit { c, base })?;
            // `acc < chunk_base` holds throughout, so this cannot overflow
            acc = acc * (base as Digit) + (v as Digit);
            count += 1;
            if count == chunk_len {
                res.mul_add_digit(chunk_base, acc);
                acc = 0;
                count = 0;
            }
        }
        if count > 0 {
            res.mul_add_digit((base as Digit).pow(count), acc);
        }
        if negative {
            res = -res;
        }
        Ok(res)
    }

    /// Formats the value in the given base, which must be in `2..=62`
    pub fn to_str_radix(&self, base: u32) -> Result<String, Error> {
        if base < 2 || base > 62 {
            return Err(Error::UnsupportedBase(base));
        }
        let mut res = String::new();
        if self.is_negative() {
            res.push('-');
        }
        res.push_str(&self.magnitude_radix(base));
        Ok(res)
    }

    /// The magnitude formatted in `base`, without a sign
    fn magnitude_radix(&self, base: u32) -> String {
        debug_assert!(base >= 2 && base <= 62);
        if self.is_zero() {
            return "0".to_owned();
        }
        let (chunk_base, chunk_len) = chunk_params(base);
        // digit characters accumulate least significant first
        let mut out = Vec::new();
        let push_chunk = |out: &mut Vec<u8>, mut chunk: Digit| {
            for _ in 0..chunk_len {
                out.push(digit_char(chunk % (base as Digit), base));
                chunk /= base as Digit;
            }
        };
        match &self.repr {
            Repr::Static(s) => {
                let mut cur = s.abs();
                while !cur.is_zero() {
                    let (q, r) = StaticInt::div_rem_digit(&cur, chunk_base);
                    cur = q;
                    push_chunk(&mut out, r);
                }
            }
            Repr::Dynamic(d) => {
                if base <= 36 {
                    return d.get().magnitude().to_str_radix(base);
                }
                let mut mag = d.get().magnitude().clone();
                let big_chunk = num_bigint::BigUint::from(chunk_base);
                while !mag.is_zero() {
                    let (q, r) = mag.div_rem(&big_chunk);
                    mag = q;
                    let r = r.to_u64().expect("remainder below a one-limb chunk base");
                    push_chunk(&mut out, r);
                }
            }
        }
        // drop leading zeros from the padded top chunk; the value is
        // nonzero, so at least one digit survives
        while out.len() > 1 && out.last() == Some(&b'0') {
            out.pop();
        }
        out.iter().rev().map(|&b| b as char).collect()
    }
}

impl<const N: usize> FromStr for Int<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_str_radix(s, 10)
    }
}

impl<const N: usize> fmt::Display for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_radix(10))
    }
}

impl<const N: usize> fmt::LowerHex for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_radix(16))
    }
}

impl<const N: usize> fmt::UpperHex for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mag = self.magnitude_radix(16).to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &mag)
    }
}

impl<const N: usize> fmt::Octal for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_radix(8))
    }
}

impl<const N: usize> fmt::Binary for Int<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_radix(2))
    }
}
