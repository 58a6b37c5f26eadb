//! Digit spigot for π
//!
//! A Rabinowitz–Wagon style spigot producing the decimal digits of π in
//! groups of `loop_digits` digits. Each group runs one pass over a mixed
//! radix scratch buffer, carrying a value in the large width from the
//! highest index down and leaving the remainders behind for the next pass.
//! The large width must be exactly twice the small one so that the carried
//! value never overflows; the small width holds one group of digits plus
//! the carry between groups.
//!
//! The scratch buffer is owned by the spigot, allocated on the first call
//! to [`PiSpigot::calculate`] and reused by later calls.

use crate::error::WideIntError;
use crate::primitives::Uint;

use thiserror::Error;

/// Largest supported number of result digits.
pub const MAX_RESULT_DIGITS: u32 = 10_011;

/// Errors raised by the π spigot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpigotError {
    /// The output buffer cannot hold every result digit.
    #[error("output buffer holds {actual} digits, {needed} are required")]
    OutputTooSmall { needed: usize, actual: usize },

    /// Digits per group must be between one and the small width's `DIGITS10`.
    #[error("loop digits {digits} out of range 1..={max}")]
    LoopDigitsOutOfRange { digits: u32, max: u32 },

    /// Result digits must be between one and [`MAX_RESULT_DIGITS`].
    #[error("result digits {0} out of range 1..={MAX_RESULT_DIGITS}")]
    ResultDigitsOutOfRange(u32),

    /// An arithmetic step of the spigot failed.
    #[error(transparent)]
    Arithmetic(#[from] WideIntError),
}

/// Spigot over the width pair `Uint<SMALL>` / `Uint<LARGE>`.
///
/// `LARGE` must equal `2 * SMALL`; any other pair fails to compile.
pub struct PiSpigot<const SMALL: usize, const LARGE: usize> {
    result_digits: u32,
    loop_digits: u32,
    scratch: Vec<u32>,
    operation_count: u64,
    output_count: u32,
}

impl<const SMALL: usize, const LARGE: usize> PiSpigot<SMALL, LARGE> {
    /// Creates a spigot producing `result_digits` digits, `loop_digits`
    /// at a time.
    ///
    /// # Errors
    /// Returns [`SpigotError::ResultDigitsOutOfRange`] or
    /// [`SpigotError::LoopDigitsOutOfRange`] if a parameter is out of range.
    pub fn new(result_digits: u32, loop_digits: u32) -> Result<Self, SpigotError> {
        const { assert!(LARGE == 2 * SMALL, "the large width must be twice the small one") };

        if result_digits == 0 || result_digits > MAX_RESULT_DIGITS {
            return Err(SpigotError::ResultDigitsOutOfRange(result_digits));
        }

        let max = Uint::<SMALL>::DIGITS10;
        if loop_digits == 0 || loop_digits > max {
            return Err(SpigotError::LoopDigitsOutOfRange {
                digits: loop_digits,
                max,
            });
        }

        Ok(Self {
            result_digits,
            loop_digits,
            scratch: Vec::new(),
            operation_count: 0,
            output_count: 0,
        })
    }

    /// Number of digits written by [`calculate`](Self::calculate).
    pub fn result_digits(&self) -> u32 {
        self.result_digits
    }

    /// Number of digits produced per pass.
    pub fn loop_digits(&self) -> u32 {
        self.loop_digits
    }

    /// Length of the scratch buffer for `digits` result digits.
    pub fn input_scale(&self, digits: u32) -> usize {
        let loop_digits = self.loop_digits as u64;
        let per_group = (10 * loop_digits) / 3 + 1;

        (digits as u64 * per_group / loop_digits) as usize
    }

    /// Inner-loop iterations performed by the last calculation.
    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    /// Digits written by the last calculation.
    pub fn output_count(&self) -> u32 {
        self.output_count
    }

    /// Writes the first `result_digits` decimal digits of π into `out`,
    /// one digit value (`0..=9`) per byte, starting with `3`.
    ///
    /// # Errors
    /// Returns [`SpigotError::OutputTooSmall`] if `out` is shorter than
    /// `result_digits`.
    pub fn calculate(&mut self, out: &mut [u8]) -> Result<(), SpigotError> {
        let result_digits = self.result_digits as usize;

        if out.len() < result_digits {
            return Err(SpigotError::OutputTooSmall {
                needed: result_digits,
                actual: out.len(),
            });
        }

        if self.scratch.is_empty() {
            self.scratch = vec![0u32; self.input_scale(self.result_digits)];
        }

        self.operation_count = 0;
        self.output_count = 0;

        let pow10_small = Uint::<SMALL>::from_u64(10).pow(self.loop_digits);
        let pow10: Uint<LARGE> = pow10_small.resize();
        let initial_term = pow10_small.checked_div(&Uint::from_u64(5))?.resize::<LARGE>() * pow10;
        let top_scale = Uint::<SMALL>::from_u64(10).pow(self.loop_digits - 1);

        let mut carry = Uint::<SMALL>::ZERO;

        for j in (0..self.result_digits).step_by(self.loop_digits as usize) {
            let mut value = Uint::<LARGE>::ZERO;
            let len = self.input_scale(self.result_digits - j);

            for index in (0..len).rev() {
                value += match j {
                    0 => initial_term,
                    _ => pow10 * self.scratch[index] as u64,
                };

                let (quotient, remainder) = value.div_rem_limb(2 * index as u64 + 1)?;
                self.scratch[index] = remainder as u32;
                value = quotient;

                if index > 1 {
                    value *= index as u64;
                }

                self.operation_count += 1;
            }

            let (high, low) = value.div_rem(&pow10)?;
            let group = carry + high.resize::<SMALL>();
            carry = low.resize();

            let count = self.loop_digits.min(self.result_digits - j);
            let mut scale = top_scale;

            for slot in out[j as usize..(j + count) as usize].iter_mut() {
                let (digits, _) = group.div_rem(&scale)?;
                *slot = digits.div_rem_limb(10)?.1 as u8;
                scale = scale.div_rem_limb(10)?.0;
            }

            self.output_count += count;

            log::trace!(
                "pi spigot produced {} of {} digits after {} operations",
                self.output_count,
                self.result_digits,
                self.operation_count
            );
        }

        Ok(())
    }
}
