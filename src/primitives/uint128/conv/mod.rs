//! Conversion utilities for `Uint128`
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `Uint128` primitive and external representations.
//!
//! Each submodule is responsible for one representation, following these
//! principles:
//! - explicit little-endian byte semantics
//! - no implicit truncation
//! - fallible conversions whenever the source may not fit
//! - simple, auditable implementations
//!
//! The conversions are intentionally split by representation to keep each
//! file small, focused, and easy to reason about.

mod big;
mod bytes;
mod string;
mod u128;
mod u64;
