//! Extended-precision integer primitives for Nebula
//!
//! This crate provides fixed-size unsigned integer types used throughout
//! the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a general arbitrary-precision arithmetic library. All
//! types are simple value types with explicit semantics, no heap
//! allocation, and no shared state, which makes every operation safe to
//! call concurrently without synchronization.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size, low-level integer primitives such as `Uint128`, a
//!   two-word 128-bit unsigned integer with native-speed arithmetic,
//!   bitwise and shift operations, a full division engine, and stable
//!   byte/decimal conversions. These types are intended for hashing,
//!   identifiers, counters, and high-precision scalar math where a full
//!   big-integer library would be overkill.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Wraparound (modulo 2¹²⁸) arithmetic matching fixed-width hardware
//!   behavior, with fallible constructors for every external source
//!
//! This crate is not intended to replace full-featured big-integer
//! libraries such as `num-bigint` (which it uses as a conversion target and
//! test oracle), but to serve as a small, controlled foundation for
//! Nebula's internal numeric needs.

pub mod primitives;
