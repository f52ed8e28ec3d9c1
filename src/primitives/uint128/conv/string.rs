//! Decimal text parsing for `Uint128`
//!
//! The accepted grammar is plain unsigned decimal: one or more ASCII
//! digits, no sign, no separators. This is the exact inverse of the
//! type's `Display` output.

use crate::primitives::uint128::{Uint128, Uint128Error};

use std::str::FromStr;

impl FromStr for Uint128 {
    type Err = Uint128Error;

    /// Parses canonical decimal text into a `Uint128`.
    ///
    /// Digits accumulate left to right as `value * 10 + digit`. Before
    /// each step the running value is checked against `(MAX - digit) / 10`
    /// so the accumulation itself can never wrap.
    ///
    /// # Errors
    /// - `ParseError` for empty input or any non-digit character
    /// - `NegativeValue` for a leading `-` (the type is unsigned)
    /// - `Overflow` once the value would reach 2¹²⁸
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Uint128Error::ParseError);
        }
        if s.starts_with('-') {
            return Err(Uint128Error::NegativeValue);
        }

        let mut value = Self::ZERO;

        for byte in s.bytes() {
            if !byte.is_ascii_digit() {
                return Err(Uint128Error::ParseError);
            }
            let digit = (byte - b'0') as u64;

            if value > (Self::MAX - digit) / 10u64 {
                return Err(Uint128Error::Overflow);
            }

            value = value * 10u64 + digit;
        }

        Ok(value)
    }
}
