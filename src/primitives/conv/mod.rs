//! Conversion utilities
//!
//! This module groups explicit conversions between `Uint` and other
//! representations:
//! - `native`: Rust's built-in integers, in both directions
//! - `bytes`: big- and little-endian byte strings
//!
//! Conversions that may lose information are fallible. The exceptions are
//! [`Uint::resize`](crate::primitives::Uint::resize), which has to be
//! requested explicitly, and `u128` into the single-limb width, which keeps
//! the low 64 bits.

mod bytes;
mod native;
