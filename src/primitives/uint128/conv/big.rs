//! Conversions between `Uint128` and arbitrary-precision integers
//!
//! The big-integer bridge exists mainly as a lossless interop point and a
//! correctness oracle for tests; production arithmetic never routes
//! through it.

use crate::primitives::uint128::{Uint128, Uint128Error};

use num_bigint::{BigInt, Sign};
use num_traits::Signed;

/// Attempts to build a `Uint128` from an arbitrary-precision integer.
///
/// Fails with `NegativeValue` for negative sources and with `Overflow`
/// for values of 2¹²⁸ or more; anything in range splits exactly into the
/// two words.
impl TryFrom<&BigInt> for Uint128 {
    type Error = Uint128Error;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(Uint128Error::NegativeValue);
        }
        if value.bits() > 128 {
            return Err(Uint128Error::Overflow);
        }

        let mut words = [0u64; 2];
        for (word, digit) in words.iter_mut().zip(value.iter_u64_digits()) {
            *word = digit;
        }

        Ok(Self::new(words[0], words[1]))
    }
}

/// Losslessly exports a `Uint128` into an arbitrary-precision integer.
impl From<Uint128> for BigInt {
    fn from(value: Uint128) -> Self {
        BigInt::from_bytes_le(Sign::Plus, &value.to_bytes())
    }
}
