//! Arithmetic and bitwise operations for `Uint128`
//!
//! This module implements the arithmetic and bitwise operator traits for
//! the `Uint128` type.
//!
//! All arithmetic is **wraparound**: results are taken modulo 2¹²⁸,
//! matching fixed-width unsigned hardware semantics. Addition, subtraction
//! and multiplication therefore never fail. Division panics on a zero
//! divisor, as native integer division does.
//!
//! Every operator also exists in a mixed form with a `u64` right operand,
//! treated as zero-extended to 128 bits. The mixed forms are shortcuts for
//! promoting with `Uint128::from` and are observationally identical to the
//! full-width operators.
//!
//! All operations are implemented explicitly on the two-word
//! representation, with:
//! - no heap allocation
//! - predictable behavior
//! - wrapping semantics where appropriate

use crate::primitives::uint128::Uint128;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Shl, Shr, Sub};

/// Full 64×64→128 product of two words, split into a `(high, low)` pair.
fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let wide = a as u128 * b as u128;
    ((wide >> 64) as u64, wide as u64)
}

/// Bitwise XOR between two 128-bit values.
impl BitXor<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitxor(self, rhs: Uint128) -> Self::Output {
        Uint128::new(self.lo ^ rhs.lo, self.hi ^ rhs.hi)
    }
}

/// Bitwise XOR with a zero-extended 64-bit operand; the high word passes
/// through unchanged.
impl BitXor<u64> for Uint128 {
    type Output = Uint128;

    fn bitxor(self, rhs: u64) -> Self::Output {
        Uint128::new(self.lo ^ rhs, self.hi)
    }
}

/// Bitwise AND between two 128-bit values.
impl BitAnd<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Self::Output {
        Uint128::new(self.lo & rhs.lo, self.hi & rhs.hi)
    }
}

/// Bitwise AND with a zero-extended 64-bit operand; the high word of the
/// result is always zero.
impl BitAnd<u64> for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: u64) -> Self::Output {
        Uint128::new(self.lo & rhs, 0)
    }
}

/// Bitwise OR between two 128-bit values.
impl BitOr<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Self::Output {
        Uint128::new(self.lo | rhs.lo, self.hi | rhs.hi)
    }
}

/// Bitwise OR with a zero-extended 64-bit operand; the high word passes
/// through unchanged.
impl BitOr<u64> for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: u64) -> Self::Output {
        Uint128::new(self.lo | rhs, self.hi)
    }
}

/// Logical left shift.
///
/// Shifts of 128 bits or more yield zero. For counts below 64 the low
/// word's top bits cross into the high word; the zero count returns the
/// value unchanged, which also keeps the cross shift (`64 - rhs`) in range.
impl Shl<u32> for Uint128 {
    type Output = Uint128;

    fn shl(self, rhs: u32) -> Self::Output {
        if rhs == 0 {
            return self;
        }
        if rhs >= 128 {
            return Uint128::ZERO;
        }
        if rhs >= 64 {
            return Uint128::new(0, self.lo << (rhs - 64));
        }

        Uint128::new(self.lo << rhs, (self.hi << rhs) | (self.lo >> (64 - rhs)))
    }
}

/// Logical right shift, the structural mirror of `Shl`.
///
/// Shifts of 128 bits or more yield zero.
impl Shr<u32> for Uint128 {
    type Output = Uint128;

    fn shr(self, rhs: u32) -> Self::Output {
        if rhs == 0 {
            return self;
        }
        if rhs >= 128 {
            return Uint128::ZERO;
        }
        if rhs >= 64 {
            return Uint128::new(self.hi >> (rhs - 64), 0);
        }

        Uint128::new((self.lo >> rhs) | (self.hi << (64 - rhs)), self.hi >> rhs)
    }
}

/// Addition modulo 2¹²⁸.
impl Add for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: Uint128) -> Self::Output {
        let (lo, carry) = self.lo.overflowing_add(rhs.lo);
        let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry as u64);

        Uint128::new(lo, hi)
    }
}

/// Addition of a zero-extended 64-bit operand, modulo 2¹²⁸.
impl Add<u64> for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: u64) -> Self::Output {
        let (lo, carry) = self.lo.overflowing_add(rhs);

        Uint128::new(lo, self.hi.wrapping_add(carry as u64))
    }
}

/// Subtraction modulo 2¹²⁸.
impl Sub for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: Uint128) -> Self::Output {
        let (lo, borrow) = self.lo.overflowing_sub(rhs.lo);
        let hi = self.hi.wrapping_sub(rhs.hi).wrapping_sub(borrow as u64);

        Uint128::new(lo, hi)
    }
}

/// Subtraction of a zero-extended 64-bit operand, modulo 2¹²⁸.
impl Sub<u64> for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: u64) -> Self::Output {
        let (lo, borrow) = self.lo.overflowing_sub(rhs);

        Uint128::new(lo, self.hi.wrapping_sub(borrow as u64))
    }
}

/// Multiplication modulo 2¹²⁸.
///
/// The full 128×128→256 product is formed from the widening `lo×lo`
/// product plus the two cross terms truncated to 64 bits; the `hi×hi`
/// term lies entirely outside the 128-bit window and is discarded.
impl Mul<Uint128> for Uint128 {
    type Output = Uint128;

    fn mul(self, rhs: Uint128) -> Self::Output {
        let (hi, lo) = mul_wide(self.lo, rhs.lo);
        let hi = hi
            .wrapping_add(self.lo.wrapping_mul(rhs.hi))
            .wrapping_add(self.hi.wrapping_mul(rhs.lo));

        Uint128::new(lo, hi)
    }
}

/// Multiplication by a zero-extended 64-bit operand, modulo 2¹²⁸.
impl Mul<u64> for Uint128 {
    type Output = Uint128;

    fn mul(self, rhs: u64) -> Self::Output {
        let (hi, lo) = mul_wide(self.lo, rhs);

        Uint128::new(lo, hi.wrapping_add(self.hi.wrapping_mul(rhs)))
    }
}

/// Integer division (`/`) producing the truncating quotient.
///
/// # Panics
/// Panics with `"division by zero"` when the divisor is zero.
impl Div<Uint128> for Uint128 {
    type Output = Uint128;

    fn div(self, rhs: Uint128) -> Self::Output {
        self.div_rem(rhs).0
    }
}

/// Integer division by a zero-extended 64-bit divisor.
///
/// # Panics
/// Panics with `"division by zero"` when the divisor is zero.
impl Div<u64> for Uint128 {
    type Output = Uint128;

    fn div(self, rhs: u64) -> Self::Output {
        self.div_rem64(rhs).0
    }
}

/// Remainder (`%`) of truncating division.
///
/// # Panics
/// Panics with `"division by zero"` when the divisor is zero.
impl Rem<Uint128> for Uint128 {
    type Output = Uint128;

    fn rem(self, rhs: Uint128) -> Self::Output {
        self.div_rem(rhs).1
    }
}

/// Remainder of division by a zero-extended 64-bit divisor.
///
/// The remainder is strictly smaller than the divisor and therefore fits
/// in a single word.
///
/// # Panics
/// Panics with `"division by zero"` when the divisor is zero.
impl Rem<u64> for Uint128 {
    type Output = u64;

    fn rem(self, rhs: u64) -> Self::Output {
        self.div_rem64(rhs).1
    }
}
