//! 128-bit unsigned integer primitive
//!
//! This module defines the `Uint128` type, a fixed-size 128-bit unsigned
//! integer used throughout the Nebula ecosystem.
//!
//! `Uint128` is designed as a low-level value type rather than a full
//! big-integer abstraction. It provides native-speed arithmetic over two
//! 64-bit words, with explicit semantics and predictable behavior.
//!
//! Typical use cases include:
//! - hashes and identifiers
//! - counters and sequence numbers
//! - high-precision scalar arithmetic
//!
//! Arithmetic wraps modulo 2¹²⁸, matching fixed-width hardware semantics.
//! Construction from external sources (bytes, text, big integers) is
//! fallible and never truncates silently.

mod conv;
mod core;
mod div;
mod ops;

/// Fixed-size 128-bit unsigned integer.
///
/// This type is re-exported as the primary 128-bit integer primitive.
pub use self::core::{Uint128, Uint128Error};
