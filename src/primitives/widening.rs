//! Double-width companions
//!
//! Some algorithms need the exact product of two `N`-bit values before
//! dividing it down again. [`Widening`] pairs every width alias with the
//! alias exactly twice as wide and returns that product without truncation.
//!
//! The same pairs get a lossless widening `From` and a checked narrowing
//! `TryFrom`, so values cross between the two widths only explicitly.

use crate::error::WideIntError;
use crate::primitives::core::Uint;
use crate::primitives::limb::mul_into;

/// Full-precision multiplication into the double-width type.
pub trait Widening {
    /// The type exactly twice as wide as `Self`.
    type Wide;

    /// Returns the untruncated product `self * rhs`.
    fn widening_mul(&self, rhs: &Self) -> Self::Wide;
}

macro_rules! impl_widening {
    ($($narrow:literal => $wide:literal),*) => {
        $(
            impl Widening for Uint<$narrow> {
                type Wide = Uint<$wide>;

                fn widening_mul(&self, rhs: &Self) -> Self::Wide {
                    let mut out = [0u64; $wide];
                    mul_into(&self.0, &rhs.0, &mut out);
                    Uint(out)
                }
            }

            /// Zero-extends into the double-width type.
            impl From<Uint<$narrow>> for Uint<$wide> {
                fn from(value: Uint<$narrow>) -> Self {
                    value.resize()
                }
            }

            /// Succeeds only if the upper half is zero.
            impl TryFrom<Uint<$wide>> for Uint<$narrow> {
                type Error = WideIntError;

                fn try_from(value: Uint<$wide>) -> Result<Self, Self::Error> {
                    if value.bits() > Uint::<$narrow>::BITS {
                        return Err(WideIntError::Overflow);
                    }

                    Ok(value.resize())
                }
            }
        )*
    };
}

impl_widening!(1 => 2, 2 => 4, 4 => 8, 8 => 16, 16 => 32, 32 => 64);
