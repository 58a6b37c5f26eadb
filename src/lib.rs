//! Fixed-width wide unsigned integers
//!
//! This crate provides exact unsigned arithmetic at widths far beyond the
//! native machine words: 128, 256, 512 bits and up to 4096 bits, with the
//! width fixed at compile time by the type.
//!
//! The focus is on **predictability and exactness** rather than on a large
//! API. Values never grow: every operation wraps modulo 2^BITS, and the
//! conditions that can genuinely fail (division by zero, malformed literals,
//! lossy conversions) are reported through [`WideIntError`].
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Uint<LIMBS>` type and its width aliases (`U128` … `U4096`),
//!   with the full operator set, long division, literal parsing and
//!   formatting, byte and native conversions, and modular exponentiation.
//!
//! - `rng`
//!   A deterministic ChaCha20-based random engine and a uniform
//!   distribution over arbitrary `[low, high]` ranges of wide values.
//!   The engine implements the `rand_core` traits, and the same seed
//!   yields the same sequence on every platform.
//!
//! - `algorithms`
//!   Numeric algorithms built purely on the public API above: a
//!   Miller–Rabin probable-prime test and a digit spigot for π.
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Widths checked by the type system; no silent mixing
//! - Defined wraparound instead of overflow states
//! - Reproducible randomness from an explicit seed
//!
//! The crate only emits diagnostics through the `log` facade and never
//! installs a logger.

mod error;

pub mod algorithms;
pub mod primitives;
pub mod rng;

pub use error::WideIntError;
pub use primitives::{U64, U128, U256, U512, U1024, U2048, U4096, Uint};
