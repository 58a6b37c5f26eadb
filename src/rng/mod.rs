//! Random number generation module
//!
//! This module provides reproducible randomness for wide integers.
//!
//! It is built around a ChaCha20-based deterministic engine and a uniform
//! distribution that turns the engine's words into values of any
//! `[low, high]` range of a given width.
//!
//! Design goals:
//! - Identical sequences for identical seeds on every platform
//! - Exactly uniform sampling, with rejection instead of modular reduction
//! - No heap allocation
//! - Interoperability through the `rand_core` traits
pub(crate) mod chacha20;
mod engine;
mod uniform;

/// Deterministic ChaCha20 engine and its default seed.
pub use engine::{DEFAULT_SEED, RandomEngine};
/// Uniform distribution over a range of wide integers.
pub use uniform::UniformDistribution;

pub use rand_core::{RngCore, SeedableRng};
