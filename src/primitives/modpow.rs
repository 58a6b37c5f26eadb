//! Modular arithmetic for `Uint`
//!
//! Products are formed at double width on the stack and reduced with the
//! long-division kernel, so `a * b mod m` is exact for every modulus of the
//! same width. Nothing here is constant time.

use crate::error::WideIntError;
use crate::primitives::core::Uint;
use crate::primitives::limb::mul_into;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self * rhs mod modulus` without losing the high half of the
    /// product.
    ///
    /// # Errors
    /// Returns [`WideIntError::DivisionByZero`] if `modulus` is zero.
    pub fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Result<Self, WideIntError> {
        if modulus.is_zero() {
            return Err(WideIntError::DivisionByZero);
        }

        Ok(self.mul_mod_nonzero(rhs, modulus))
    }

    /// Computes `self^exponent mod modulus` by square-and-multiply, scanning
    /// the exponent from its most significant bit.
    ///
    /// `exponent == 0` yields `1 mod modulus`, so a modulus of one always
    /// yields zero.
    ///
    /// # Errors
    /// Returns [`WideIntError::DivisionByZero`] if `modulus` is zero.
    pub fn modpow(&self, exponent: &Self, modulus: &Self) -> Result<Self, WideIntError> {
        if modulus.is_zero() {
            return Err(WideIntError::DivisionByZero);
        }

        Ok(self.modpow_nonzero(exponent, modulus))
    }

    pub(crate) fn modpow_nonzero(&self, exponent: &Self, modulus: &Self) -> Self {
        let base = self.div_rem_nonzero(modulus).1;
        let mut acc = Self::ONE.div_rem_nonzero(modulus).1;

        for i in (0..exponent.bits()).rev() {
            acc = acc.mul_mod_nonzero(&acc, modulus);

            if exponent.bit(i) {
                acc = acc.mul_mod_nonzero(&base, modulus);
            }
        }

        acc
    }

    pub(crate) fn mul_mod_nonzero(&self, rhs: &Self, modulus: &Self) -> Self {
        let mut product = [[0u64; LIMBS]; 2];
        mul_into(&self.0, &rhs.0, product.as_flattened_mut());

        Self::reduce_wide(product.as_flattened(), modulus)
    }
}
