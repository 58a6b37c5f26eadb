//! Fixed-width unsigned integer primitive
//!
//! This module defines `Uint<LIMBS>`, an unsigned integer made of `LIMBS`
//! 64-bit limbs. The width is part of the type: a `Uint<4>` is always 256
//! bits wide and can never grow, shrink, or silently mix with a `Uint<8>`.
//!
//! The representation is little-endian at the limb level: `limbs[0]` holds
//! the least significant 64 bits. Every operation producing a `Uint<LIMBS>`
//! yields a value in `[0, 2^BITS - 1]`; overflow wraps around exactly like
//! native unsigned integers do.

use crate::primitives::limb::{LIMB_BITS, significant_len};

/// Fixed-width unsigned integer made of `LIMBS` 64-bit limbs.
///
/// The limbs are stored least significant first. `LIMBS` must be at least
/// one; constructing a zero-limb value fails to compile:
///
/// ```compile_fail
/// let empty = wideint::primitives::Uint::<0>::ZERO;
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Uint<const LIMBS: usize>(pub(crate) [u64; LIMBS]);

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Number of limbs.
    pub const LIMBS: usize = LIMBS;

    /// Width of the integer in bits.
    pub const BITS: u32 = LIMBS as u32 * LIMB_BITS;

    /// Number of decimal digits that always fit, i.e. `floor(BITS * log10(2))`.
    pub const DIGITS10: u32 = ((Self::BITS as u64 * 30_103) / 100_000) as u32;

    /// The value zero.
    pub const ZERO: Self = Self::from_limbs([0u64; LIMBS]);

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// The maximum representable value (2^BITS − 1).
    pub const MAX: Self = Self::from_limbs([u64::MAX; LIMBS]);

    /// Builds a value from its limbs, least significant first.
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        const { assert!(LIMBS > 0, "Uint needs at least one limb") };
        Self(limbs)
    }

    /// Builds a value from a single 64-bit word.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value;
        Self::from_limbs(limbs)
    }

    /// Builds a value from a 128-bit word.
    ///
    /// For the single-limb width the upper 64 bits are discarded.
    pub const fn from_u128(value: u128) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = value as u64;
        if LIMBS > 1 {
            limbs[1] = (value >> LIMB_BITS) as u64;
        }
        Self::from_limbs(limbs)
    }

    /// Borrows the limbs, least significant first.
    pub const fn as_limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    /// Mutably borrows the limbs, least significant first.
    pub fn as_limbs_mut(&mut self) -> &mut [u64; LIMBS] {
        &mut self.0
    }

    /// Consumes the value and returns its limbs.
    pub const fn into_limbs(self) -> [u64; LIMBS] {
        self.0
    }

    /// Returns `true` if every limb is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Returns `true` if the lowest bit is set.
    pub const fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Number of significant bits: the index of the highest set bit plus
    /// one, or zero for the value zero.
    pub fn bits(&self) -> u32 {
        match significant_len(&self.0) {
            0 => 0,
            len => len as u32 * LIMB_BITS - self.0[len - 1].leading_zeros(),
        }
    }

    /// Counts the number of leading zero bits.
    ///
    /// # Returns
    /// A value in the range `0..=BITS`.
    pub fn leading_zeros(&self) -> u32 {
        Self::BITS - self.bits()
    }

    /// Counts the number of trailing zero bits; `BITS` for zero.
    pub fn trailing_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter() {
            if limb != 0 {
                return count + limb.trailing_zeros();
            }
            count += LIMB_BITS;
        }

        count
    }

    /// Counts the set bits.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|limb| limb.count_ones()).sum()
    }

    /// Returns bit `index`; indices at or beyond `BITS` read as zero.
    pub fn bit(&self, index: u32) -> bool {
        if index >= Self::BITS {
            return false;
        }

        let limb = self.0[(index / LIMB_BITS) as usize];
        (limb >> (index % LIMB_BITS)) & 1 == 1
    }

    /// Sets or clears bit `index`; indices at or beyond `BITS` are ignored.
    pub fn set_bit(&mut self, index: u32, value: bool) {
        if index >= Self::BITS {
            return;
        }

        let mask = 1u64 << (index % LIMB_BITS);
        let limb = &mut self.0[(index / LIMB_BITS) as usize];

        if value {
            *limb |= mask;
        } else {
            *limb &= !mask;
        }
    }

    /// Converts to another width.
    ///
    /// Widening zero-extends. Narrowing keeps the low `64 * M` bits and
    /// discards the rest, so the conversion is lossy and explicit.
    pub fn resize<const M: usize>(&self) -> Uint<M> {
        let mut out = [0u64; M];
        let len = LIMBS.min(M);

        out[..len].copy_from_slice(&self.0[..len]);

        Uint::from_limbs(out)
    }

    /// Index one past the highest non-zero limb.
    pub(crate) fn limb_len(&self) -> usize {
        significant_len(&self.0)
    }
}

/// Provides a manual `Default` implementation for `Uint`.
///
/// The standard library only implements `Default` for arrays of up to 32
/// elements, so `#[derive(Default)]` cannot be used for arbitrary `LIMBS`.
/// The default value is zero, consistent with `Uint::ZERO`.
impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// 64-bit unsigned integer (a single limb).
pub type U64 = Uint<1>;
/// 128-bit unsigned integer.
pub type U128 = Uint<2>;
/// 256-bit unsigned integer.
pub type U256 = Uint<4>;
/// 512-bit unsigned integer.
pub type U512 = Uint<8>;
/// 1024-bit unsigned integer.
pub type U1024 = Uint<16>;
/// 2048-bit unsigned integer.
pub type U2048 = Uint<32>;
/// 4096-bit unsigned integer.
pub type U4096 = Uint<64>;
