//! Error types
//!
//! Every fallible operation of the crate reports one of the variants below.
//! Conditions that are defined behaviour for fixed-width arithmetic
//! (wraparound on overflow, truncation of oversized literals, zero-fill on
//! oversized shifts) are never reported as errors.

use thiserror::Error;

/// Errors raised by wide-integer construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WideIntError {
    /// A division, remainder, or modular operation received a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A literal was empty or contained a character outside its digit alphabet.
    #[error("invalid integer literal {0:?}")]
    InvalidLiteral(String),

    /// Only radix 10 and radix 16 are supported.
    #[error("unsupported radix {0}, expected 10 or 16")]
    UnsupportedRadix(u32),

    /// A negative native integer cannot be converted to an unsigned value.
    #[error("negative value {0} cannot be represented as an unsigned integer")]
    NegativeValue(i128),

    /// The value does not fit into the requested narrower type.
    #[error("value does not fit into the target type")]
    Overflow,

    /// A byte slice did not have the exact length of the target width.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A range whose lower bound exceeds its upper bound.
    #[error("empty range: lower bound exceeds upper bound")]
    EmptyRange,
}
