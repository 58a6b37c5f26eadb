//! Conversions between `Uint` and byte strings
//!
//! Byte strings have exactly `8 * LIMBS` bytes. Big-endian output places
//! the most significant byte first, which matches the hexadecimal text form.

use crate::error::WideIntError;
use crate::primitives::core::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Number of bytes in the byte-string form.
    pub const BYTES: usize = LIMBS * 8;

    /// Serializes the value as big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.iter().rev().flat_map(|limb| limb.to_be_bytes()).collect()
    }

    /// Serializes the value as little-endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|limb| limb.to_le_bytes()).collect()
    }

    /// Parses big-endian bytes.
    ///
    /// # Errors
    /// Returns [`WideIntError::InvalidLength`] unless `bytes` has exactly
    /// [`Self::BYTES`] bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, WideIntError> {
        Self::check_len(bytes)?;

        let mut out = [0u64; LIMBS];
        for (limb, chunk) in out.iter_mut().rev().zip(bytes.chunks_exact(8)) {
            *limb = u64::from_be_bytes(word(chunk));
        }

        Ok(Uint::from_limbs(out))
    }

    /// Parses little-endian bytes.
    ///
    /// # Errors
    /// Returns [`WideIntError::InvalidLength`] unless `bytes` has exactly
    /// [`Self::BYTES`] bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, WideIntError> {
        Self::check_len(bytes)?;

        let mut out = [0u64; LIMBS];
        for (limb, chunk) in out.iter_mut().zip(bytes.chunks_exact(8)) {
            *limb = u64::from_le_bytes(word(chunk));
        }

        Ok(Uint::from_limbs(out))
    }

    fn check_len(bytes: &[u8]) -> Result<(), WideIntError> {
        if bytes.len() != Self::BYTES {
            return Err(WideIntError::InvalidLength {
                expected: Self::BYTES,
                actual: bytes.len(),
            });
        }

        Ok(())
    }
}

fn word(chunk: &[u8]) -> [u8; 8] {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(chunk);
    buf
}
