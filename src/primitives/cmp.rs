//! Ordering and comparisons for `Uint`
//!
//! Values are ordered by comparing limbs from the most significant one
//! down. Comparisons against native integers and text literals convert
//! the operand to the same width first.

use crate::primitives::core::Uint;

use std::cmp::Ordering;

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl<const LIMBS: usize> PartialOrd for Uint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_native_cmp {
    ($($t:ty),*) => {
        $(
            impl<const LIMBS: usize> PartialEq<$t> for Uint<LIMBS> {
                fn eq(&self, other: &$t) -> bool {
                    *self == Uint::from(*other)
                }
            }

            impl<const LIMBS: usize> PartialOrd<$t> for Uint<LIMBS> {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp(&Uint::from(*other)))
                }
            }
        )*
    };
}

// A `u128` compared against `Uint<1>` is truncated to its low 64 bits, the
// same way `From<u128>` converts it.
impl_native_cmp!(u8, u16, u32, u64, u128, usize);

/// Compares against a decimal or `0x`-prefixed hexadecimal literal.
///
/// The literal is parsed at this width, so it is truncated the same way
/// [`Uint::parse`] truncates. A malformed literal never compares equal.
impl<const LIMBS: usize> PartialEq<str> for Uint<LIMBS> {
    fn eq(&self, other: &str) -> bool {
        Uint::<LIMBS>::parse(other).is_ok_and(|value| value == *self)
    }
}

impl<const LIMBS: usize> PartialEq<&str> for Uint<LIMBS> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

/// Orders against a literal parsed at this width; a malformed literal is
/// unordered with every value.
impl<const LIMBS: usize> PartialOrd<str> for Uint<LIMBS> {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        let value = Uint::<LIMBS>::parse(other).ok()?;
        Some(self.cmp(&value))
    }
}

impl<const LIMBS: usize> PartialOrd<&str> for Uint<LIMBS> {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        self.partial_cmp(*other)
    }
}
