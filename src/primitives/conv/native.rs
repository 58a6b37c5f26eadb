//! Conversions between `Uint` and native integers
//!
//! Unsigned natives always convert into a `Uint` (zero-extended). Signed
//! natives convert only when non-negative: a negative value is rejected with
//! [`WideIntError::NegativeValue`] rather than reinterpreted as a
//! two's-complement bit pattern.
//!
//! Converting back to a native integer succeeds only if the value fits.

use crate::error::WideIntError;
use crate::primitives::core::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Returns the value as a `u128` if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.limb_len() > 2 {
            return None;
        }

        let low = self.0[0] as u128;
        let high = if LIMBS > 1 { self.0[1] as u128 } else { 0 };

        Some((high << 64) | low)
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            /// Zero-extends the native value to the full width; a `u128` going
            /// into `Uint<1>` keeps its low 64 bits.
            impl<const LIMBS: usize> From<$t> for Uint<LIMBS> {
                fn from(value: $t) -> Self {
                    Uint::from_u128(value as u128)
                }
            }

            /// Succeeds only if every bit above the native width is zero.
            impl<const LIMBS: usize> TryFrom<Uint<LIMBS>> for $t {
                type Error = WideIntError;

                fn try_from(value: Uint<LIMBS>) -> Result<Self, Self::Error> {
                    let wide = value.to_u128().ok_or(WideIntError::Overflow)?;
                    <$t>::try_from(wide).map_err(|_| WideIntError::Overflow)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            /// Converts a non-negative native value; negative values are rejected.
            impl<const LIMBS: usize> TryFrom<$t> for Uint<LIMBS> {
                type Error = WideIntError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    if value < 0 {
                        return Err(WideIntError::NegativeValue(value as i128));
                    }

                    Ok(Uint::from_u128(value as u128))
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);
