//! Primitive types
//!
//! This module defines low-level primitive types used throughout the
//! Nebula ecosystem.
//!
//! Primitives are simple, fixed-size building blocks that provide
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate full standard library
//! abstractions or full-featured big-integer libraries.
//!
//! Current primitives include:
//! - `Uint128`: a fixed-size 128-bit unsigned integer held as two 64-bit
//!   words, with wraparound arithmetic and a complete division engine
//!
//! Additional primitives and conversion utilities may be added as the
//! ecosystem evolves.

mod uint128;

/// Fixed-size unsigned integer primitives.
///
/// These types are re-exported as the primary primitive integers used
/// across the Nebula codebase.
pub use uint128::{Uint128, Uint128Error};
