//! Primitive types
//!
//! This module defines the fixed-width unsigned integer `Uint<LIMBS>` and
//! everything that operates on it directly.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics: every value lives in `[0, 2^BITS - 1]` and every arithmetic
//! operation wraps exactly like a native unsigned integer. They are
//! intentionally not a growable big-integer library.
//!
//! The module is split by concern:
//! - `core`: representation, constants and bit queries
//! - `arith`, `ops`: arithmetic methods and the operator traits on top
//! - `widening`: full-precision products into the double-width type
//! - `cmp`: ordering and mixed comparisons
//! - `conv`: native integer and byte-string conversions
//! - `text`: decimal and hexadecimal literals
//! - `modpow`: modular multiplication and exponentiation
//!
//! All of them share the allocation-free limb kernels in `limb`.

mod arith;
mod cmp;
mod conv;
mod core;
mod limb;
mod modpow;
mod ops;
mod text;
mod widening;

/// Fixed-width unsigned integers.
///
/// These aliases are the widths used across the crate; any other limb
/// count can be named directly as `Uint<N>`.
pub use self::core::{U64, U128, U256, U512, U1024, U2048, U4096, Uint};
pub use self::limb::LIMB_BITS;
pub use self::text::Radix;
pub use self::widening::Widening;
