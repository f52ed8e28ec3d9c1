//! Conversions between `Uint128` and 64-bit integers
//!
//! Promotion from `u64` is lossless and infallible; narrowing back is
//! fallible and refuses values whose high word is occupied.

use crate::primitives::uint128::{Uint128, Uint128Error};

/// Promotes a `u64` into the least significant word, with the high word
/// set to zero.
impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

/// Attempts to narrow a `Uint128` into a `u64`.
///
/// The conversion succeeds only if the high word is zero.
impl TryFrom<Uint128> for u64 {
    type Error = Uint128Error;

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.hi != 0 {
            return Err(Uint128Error::Overflow);
        }

        Ok(value.lo)
    }
}
