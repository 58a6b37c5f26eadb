//! Operator traits for `Uint`
//!
//! Every arithmetic operator wraps modulo 2^BITS, mirroring the native
//! unsigned integers at a larger width:
//! - `+`, `-`, `*` wrap silently
//! - `/` and `%` panic on a zero divisor, exactly like `u64` does; use
//!   [`Uint::div_rem`], [`Uint::checked_div`] or [`Uint::checked_rem`] for a
//!   recoverable [`WideIntError::DivisionByZero`](crate::WideIntError)
//! - `<<` and `>>` are logical and yield zero once the count reaches `BITS`
//!
//! Each binary operator also accepts a `u64` right-hand side, which is
//! widened to the full width first.

use crate::primitives::core::Uint;

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

const DIVIDE_BY_ZERO: &str = "attempt to divide by zero";

impl<const LIMBS: usize> Uint<LIMBS> {
    fn div_or_panic(&self, rhs: &Self) -> Self {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("{DIVIDE_BY_ZERO}"),
        }
    }

    fn rem_or_panic(&self, rhs: &Self) -> Self {
        match self.checked_rem(rhs) {
            Ok(r) => r,
            Err(_) => panic!("{DIVIDE_BY_ZERO}"),
        }
    }

    fn div_limb_or_panic(&self, rhs: u64) -> (Self, u64) {
        match self.div_rem_limb(rhs) {
            Ok(qr) => qr,
            Err(_) => panic!("{DIVIDE_BY_ZERO}"),
        }
    }

    fn bitwise(&self, rhs: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let mut out = [0u64; LIMBS];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (&l, &r))| *o = op(l, r));

        Self(out)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, |$l:ident, $r:ident| $body:expr) => {
        impl<const LIMBS: usize> $trait for Uint<LIMBS> {
            type Output = Uint<LIMBS>;

            fn $method(self, rhs: Uint<LIMBS>) -> Self::Output {
                let ($l, $r) = (&self, &rhs);
                $body
            }
        }

        impl<const LIMBS: usize> $trait<u64> for Uint<LIMBS> {
            type Output = Uint<LIMBS>;

            fn $method(self, rhs: u64) -> Self::Output {
                let rhs = Uint::<LIMBS>::from_u64(rhs);
                let ($l, $r) = (&self, &rhs);
                $body
            }
        }

        impl<const LIMBS: usize> $assign_trait for Uint<LIMBS> {
            fn $assign_method(&mut self, rhs: Uint<LIMBS>) {
                *self = $trait::$method(*self, rhs);
            }
        }

        impl<const LIMBS: usize> $assign_trait<u64> for Uint<LIMBS> {
            fn $assign_method(&mut self, rhs: u64) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, |l, r| l.wrapping_add(r));
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |l, r| l.wrapping_sub(r));
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |l, r| l.bitwise(r, |a, b| a & b));
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |l, r| l.bitwise(r, |a, b| a | b));
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |l, r| l.bitwise(r, |a, b| a ^ b));

/// Multiplication modulo 2^BITS.
impl<const LIMBS: usize> Mul for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn mul(self, rhs: Uint<LIMBS>) -> Self::Output {
        self.wrapping_mul(&rhs)
    }
}

/// Multiplication by a single limb, modulo 2^BITS.
impl<const LIMBS: usize> Mul<u64> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn mul(self, rhs: u64) -> Self::Output {
        self.wrapping_mul_add_limb(rhs, 0)
    }
}

impl<const LIMBS: usize> MulAssign for Uint<LIMBS> {
    fn mul_assign(&mut self, rhs: Uint<LIMBS>) {
        *self = self.wrapping_mul(&rhs);
    }
}

impl<const LIMBS: usize> MulAssign<u64> for Uint<LIMBS> {
    fn mul_assign(&mut self, rhs: u64) {
        *self = self.wrapping_mul_add_limb(rhs, 0);
    }
}

/// Integer division.
///
/// # Panics
/// Panics if `rhs` is zero.
impl<const LIMBS: usize> Div for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn div(self, rhs: Uint<LIMBS>) -> Self::Output {
        self.div_or_panic(&rhs)
    }
}

/// Integer division by a single limb.
///
/// # Panics
/// Panics if `rhs` is zero.
impl<const LIMBS: usize> Div<u64> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn div(self, rhs: u64) -> Self::Output {
        self.div_limb_or_panic(rhs).0
    }
}

impl<const LIMBS: usize> DivAssign for Uint<LIMBS> {
    fn div_assign(&mut self, rhs: Uint<LIMBS>) {
        *self = self.div_or_panic(&rhs);
    }
}

impl<const LIMBS: usize> DivAssign<u64> for Uint<LIMBS> {
    fn div_assign(&mut self, rhs: u64) {
        *self = self.div_limb_or_panic(rhs).0;
    }
}

/// Remainder of integer division.
///
/// # Panics
/// Panics if `rhs` is zero.
impl<const LIMBS: usize> Rem for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn rem(self, rhs: Uint<LIMBS>) -> Self::Output {
        self.rem_or_panic(&rhs)
    }
}

/// Remainder of integer division by a single limb.
///
/// # Panics
/// Panics if `rhs` is zero.
impl<const LIMBS: usize> Rem<u64> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn rem(self, rhs: u64) -> Self::Output {
        Uint::from_u64(self.div_limb_or_panic(rhs).1)
    }
}

impl<const LIMBS: usize> RemAssign for Uint<LIMBS> {
    fn rem_assign(&mut self, rhs: Uint<LIMBS>) {
        *self = self.rem_or_panic(&rhs);
    }
}

impl<const LIMBS: usize> RemAssign<u64> for Uint<LIMBS> {
    fn rem_assign(&mut self, rhs: u64) {
        *self = Uint::from_u64(self.div_limb_or_panic(rhs).1);
    }
}

/// Bitwise complement.
impl<const LIMBS: usize> Not for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn not(self) -> Self::Output {
        let mut out = self.0;
        out.iter_mut().for_each(|limb| *limb = !*limb);
        Uint(out)
    }
}

macro_rules! impl_shift {
    ($($count:ty),*) => {
        $(
            /// Logical left shift; counts of `BITS` or more yield zero.
            impl<const LIMBS: usize> Shl<$count> for Uint<LIMBS> {
                type Output = Uint<LIMBS>;

                fn shl(self, rhs: $count) -> Self::Output {
                    match u32::try_from(rhs) {
                        Ok(shift) => self.wrapping_shl(shift),
                        Err(_) => Uint::ZERO,
                    }
                }
            }

            /// Logical right shift; counts of `BITS` or more yield zero.
            impl<const LIMBS: usize> Shr<$count> for Uint<LIMBS> {
                type Output = Uint<LIMBS>;

                fn shr(self, rhs: $count) -> Self::Output {
                    match u32::try_from(rhs) {
                        Ok(shift) => self.wrapping_shr(shift),
                        Err(_) => Uint::ZERO,
                    }
                }
            }

            impl<const LIMBS: usize> ShlAssign<$count> for Uint<LIMBS> {
                fn shl_assign(&mut self, rhs: $count) {
                    *self = *self << rhs;
                }
            }

            impl<const LIMBS: usize> ShrAssign<$count> for Uint<LIMBS> {
                fn shr_assign(&mut self, rhs: $count) {
                    *self = *self >> rhs;
                }
            }
        )*
    };
}

impl_shift!(u32, usize);
