//! Numeric algorithms on wide integers
//!
//! These algorithms are consumers of the crate, not part of the arithmetic
//! engine: they only use the public API of `primitives` and `rng`.
//!
//! - `miller_rabin`: probabilistic primality test with random witnesses
//! - `pi_spigot`: decimal digits of π from a mixed-radix spigot

mod miller_rabin;
mod pi_spigot;

pub use miller_rabin::{DEFAULT_TRIALS, MillerRabin, SMALL_PRIMES};
pub use pi_spigot::{MAX_RESULT_DIGITS, PiSpigot, SpigotError};
