//! Conversions between `Uint128` and the native `u128`
//!
//! Both directions are lossless: the types have the same width, so the
//! conversion is a pure word split or join.

use crate::primitives::uint128::Uint128;

/// Splits a native `u128` into the two-word representation.
impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Self::new(value as u64, (value >> 64) as u64)
    }
}

/// Joins the two words back into a native `u128`.
impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        ((value.hi as u128) << 64) | value.lo as u128
    }
}
