//! Division engine for `Uint128`
//!
//! This module implements unsigned division with remainder for the
//! `Uint128` type, covering the 128-by-64 and 128-by-128 divisor shapes.
//!
//! Three cases are distinguished, cheapest first:
//! 1. Both operands fit in one word: native 64/64 division.
//! 2. A 64-bit divisor against a wide dividend: two native divisions, the
//!    second through a wide-divide primitive whose quotient is guaranteed
//!    to fit in one word.
//! 3. A full 128-bit divisor: bit-serial restoring long division over the
//!    dividend's significant bits.
//!
//! On every path the results satisfy `quotient * divisor + remainder ==
//! dividend` with `remainder < divisor`.

use crate::primitives::uint128::Uint128;

/// Divides the double word `(hi, lo)` by `divisor`, returning the quotient
/// and remainder.
///
/// The quotient must fit in a single word, which the caller guarantees by
/// passing `hi < divisor`. The native 128-by-64 division lowers to the
/// hardware (or compiler runtime) wide-divide path.
fn divide_wide(hi: u64, lo: u64, divisor: u64) -> (u64, u64) {
    debug_assert!(hi < divisor);

    let wide = ((hi as u128) << 64) | lo as u128;
    let divisor = divisor as u128;

    ((wide / divisor) as u64, (wide % divisor) as u64)
}

impl Uint128 {
    /// Computes the truncating quotient and remainder of `self / rhs`.
    ///
    /// # Panics
    /// Panics with `"division by zero"` when `rhs` is zero.
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        if rhs.hi == 0 {
            let (quotient, remainder) = self.div_rem64(rhs.lo);
            return (quotient, Self::new(remainder, 0));
        }

        self.div_rem_binary(rhs)
    }

    /// Computes the truncating quotient and the single-word remainder of
    /// division by a 64-bit divisor.
    ///
    /// When the dividend's high word is non-zero the division runs in two
    /// steps: the high word is divided first, and its remainder is carried
    /// into a wide division against the low word. The carried remainder is
    /// smaller than the divisor, so the second quotient always fits in one
    /// word.
    ///
    /// # Panics
    /// Panics with `"division by zero"` when `rhs` is zero.
    pub fn div_rem64(self, rhs: u64) -> (Self, u64) {
        assert!(rhs != 0, "division by zero");

        if self.hi == 0 {
            return (Self::new(self.lo / rhs, 0), self.lo % rhs);
        }

        let q_hi = self.hi / rhs;
        let carried = self.hi % rhs;
        let (q_lo, remainder) = divide_wide(carried, self.lo, rhs);

        (Self::new(q_lo, q_hi), remainder)
    }

    /// Bit-serial restoring long division for full 128-bit divisors.
    ///
    /// Dividend bits are consumed most-significant first: the running
    /// remainder is shifted left by one, the next bit appended, and the
    /// divisor subtracted whenever the remainder reaches it, setting the
    /// corresponding quotient bit. Iterations ahead of the dividend's
    /// first set bit only shift zeros, so the loop starts past them; the
    /// output is identical to the full 128-round loop.
    fn div_rem_binary(self, rhs: Self) -> (Self, Self) {
        if rhs > self {
            return (Self::ZERO, self);
        }

        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;

        // rhs <= self here, so self is non-zero and the range is non-empty.
        for bit in self.leading_zeros()..128 {
            let incoming = if bit < 64 {
                (self.hi >> (63 - bit)) & 1
            } else {
                (self.lo >> (127 - bit)) & 1
            };

            remainder = (remainder << 1) | incoming;

            if remainder >= rhs {
                remainder = remainder - rhs;
                if bit < 64 {
                    quotient.hi |= 1 << (63 - bit);
                } else {
                    quotient.lo |= 1 << (127 - bit);
                }
            }
        }

        (quotient, remainder)
    }
}
