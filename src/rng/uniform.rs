//! Uniform distribution over wide integers
//!
//! Sampling draws just enough random limbs to cover the span of the range,
//! masks the top limb down to the bit length of the span, and rejects
//! every candidate that falls outside it. Rejecting instead of reducing
//! keeps every value of the range exactly equally likely; since the mask
//! keeps candidates below twice the span, at most half of the draws are
//! rejected on average.

use crate::error::WideIntError;
use crate::primitives::{LIMB_BITS, Uint};

use rand_core::RngCore;

/// Uniform distribution over the inclusive range `[low, high]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformDistribution<const LIMBS: usize> {
    low: Uint<LIMBS>,
    high: Uint<LIMBS>,
}

impl<const LIMBS: usize> UniformDistribution<LIMBS> {
    /// Creates a distribution over `[low, high]`.
    ///
    /// # Errors
    /// Returns [`WideIntError::EmptyRange`] if `low > high`.
    pub fn new(low: Uint<LIMBS>, high: Uint<LIMBS>) -> Result<Self, WideIntError> {
        if low > high {
            return Err(WideIntError::EmptyRange);
        }

        Ok(Self { low, high })
    }

    /// Distribution over `[low, high]` for bounds already known to be ordered.
    pub(crate) fn between(low: Uint<LIMBS>, high: Uint<LIMBS>) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    /// Distribution over every value of the width.
    pub fn full() -> Self {
        Self {
            low: Uint::ZERO,
            high: Uint::MAX,
        }
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> Uint<LIMBS> {
        self.low
    }

    /// Inclusive upper bound.
    pub fn high(&self) -> Uint<LIMBS> {
        self.high
    }

    /// Draws one value from `rng`.
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> Uint<LIMBS> {
        let span = self.high.wrapping_sub(&self.low);
        let bits = span.bits();

        if bits == 0 {
            return self.low;
        }

        let limbs = bits.div_ceil(LIMB_BITS) as usize;
        let top_bits = bits - (limbs as u32 - 1) * LIMB_BITS;
        let mask = u64::MAX >> (LIMB_BITS - top_bits);

        loop {
            let mut candidate = Uint::<LIMBS>::ZERO;
            let words = candidate.as_limbs_mut();

            for word in words[..limbs].iter_mut() {
                *word = rng.next_u64();
            }
            words[limbs - 1] &= mask;

            if candidate <= span {
                return self.low.wrapping_add(&candidate);
            }
        }
    }
}

impl<const LIMBS: usize> Default for UniformDistribution<LIMBS> {
    fn default() -> Self {
        Self::full()
    }
}
