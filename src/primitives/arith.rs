//! Core arithmetic for `Uint`
//!
//! Addition and subtraction ripple a carry/borrow across the limbs and drop
//! the one leaving the top limb. Multiplication is schoolbook, truncated to
//! the width. Division is Knuth's long division with a short-division fast
//! path for single-limb divisors.
//!
//! The operator traits in `ops` are thin wrappers around the methods here.

use crate::error::WideIntError;
use crate::primitives::core::Uint;
use crate::primitives::limb::{
    LIMB_BITS, adc, div_rem_knuth, div_rem_limb, mac, mul_into, sbb, significant_len,
};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Adds `rhs`, returning the wrapped sum and whether a carry left the top limb.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut carry = 0u64;

        for ((o, &a), &b) in out.iter_mut().zip(self.0.iter()).zip(rhs.0.iter()) {
            let (sum, c) = adc(a, b, carry);
            *o = sum;
            carry = c;
        }

        (Self(out), carry != 0)
    }

    /// Subtracts `rhs`, returning the wrapped difference and whether a borrow
    /// left the top limb.
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut borrow = 0u64;

        for ((o, &a), &b) in out.iter_mut().zip(self.0.iter()).zip(rhs.0.iter()) {
            let (diff, br) = sbb(a, b, borrow);
            *o = diff;
            borrow = br;
        }

        (Self(out), borrow != 0)
    }

    /// Addition modulo 2^BITS.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Subtraction modulo 2^BITS.
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Multiplication modulo 2^BITS.
    ///
    /// Only the low `BITS` bits of the true product are kept.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut out = [0u64; LIMBS];
        mul_into(&self.0, &rhs.0, &mut out);
        Self(out)
    }

    /// Full-precision product returned as `(low, high)` halves.
    ///
    /// Available for every width; the [`Widening`](crate::primitives::Widening)
    /// trait returns the same product as a single double-width value.
    pub fn widening_mul_split(&self, rhs: &Self) -> (Self, Self) {
        let mut product = [[0u64; LIMBS]; 2];
        mul_into(&self.0, &rhs.0, product.as_flattened_mut());
        (Self(product[0]), Self(product[1]))
    }

    /// Computes `self * factor + addend` modulo 2^BITS for single-limb operands.
    pub fn wrapping_mul_add_limb(&self, factor: u64, addend: u64) -> Self {
        let mut out = [0u64; LIMBS];
        let mut carry = addend;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()) {
            let (low, high) = mac(0, limb, factor, carry);
            *o = low;
            carry = high;
        }

        Self(out)
    }

    /// Logical left shift modulo 2^BITS.
    ///
    /// Shifting by `BITS` or more yields zero instead of panicking.
    pub fn wrapping_shl(&self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (shift / LIMB_BITS) as usize;
        let bit_shift = shift % LIMB_BITS;
        let mut out = [0u64; LIMBS];

        for i in (limb_shift..LIMBS).rev() {
            let src = i - limb_shift;
            out[i] = self.0[src] << bit_shift;

            if bit_shift != 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (LIMB_BITS - bit_shift);
            }
        }

        Self(out)
    }

    /// Logical right shift.
    ///
    /// Shifting by `BITS` or more yields zero instead of panicking.
    pub fn wrapping_shr(&self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (shift / LIMB_BITS) as usize;
        let bit_shift = shift % LIMB_BITS;
        let mut out = [0u64; LIMBS];

        for i in 0..LIMBS - limb_shift {
            let src = i + limb_shift;
            out[i] = self.0[src] >> bit_shift;

            if bit_shift != 0 && src + 1 < LIMBS {
                out[i] |= self.0[src + 1] << (LIMB_BITS - bit_shift);
            }
        }

        Self(out)
    }

    /// Computes quotient and remainder.
    ///
    /// The result satisfies `q * divisor + r == self` and `r < divisor`.
    ///
    /// # Errors
    /// Returns [`WideIntError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), WideIntError> {
        if divisor.is_zero() {
            return Err(WideIntError::DivisionByZero);
        }

        Ok(self.div_rem_nonzero(divisor))
    }

    /// Quotient of `self / divisor`.
    ///
    /// # Errors
    /// Returns [`WideIntError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, WideIntError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of `self / divisor`.
    ///
    /// # Errors
    /// Returns [`WideIntError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, WideIntError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Short division by a single limb, returning the quotient and the
    /// remainder as a native word.
    ///
    /// # Errors
    /// Returns [`WideIntError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem_limb(&self, divisor: u64) -> Result<(Self, u64), WideIntError> {
        if divisor == 0 {
            return Err(WideIntError::DivisionByZero);
        }

        Ok(self.div_rem_limb_nonzero(divisor))
    }

    /// Short division for a divisor already known to be non-zero.
    pub(crate) fn div_rem_limb_nonzero(&self, divisor: u64) -> (Self, u64) {
        let len = self.limb_len();
        let mut q = [0u64; LIMBS];
        let r = div_rem_limb(&self.0[..len], divisor, &mut q[..len]);

        (Self(q), r)
    }

    /// Long division for a divisor already known to be non-zero.
    pub(crate) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.is_zero());

        if self < divisor {
            return (Self::ZERO, *self);
        }

        let mut q = [0u64; LIMBS];
        let mut r = [0u64; LIMBS];
        divide_into::<LIMBS>(&self.0, &divisor.0, &mut q, &mut r);

        (Self(q), Self(r))
    }

    /// Reduces a dividend of up to `2 * LIMBS` limbs modulo `modulus`.
    pub(crate) fn reduce_wide(dividend: &[u64], modulus: &Self) -> Self {
        debug_assert!(dividend.len() <= 2 * LIMBS);

        let mut q = [[0u64; LIMBS]; 2];
        let mut r = [0u64; LIMBS];
        divide_into::<LIMBS>(dividend, &modulus.0, q.as_flattened_mut(), &mut r);

        Self(r)
    }

    /// Wrapping exponentiation by square-and-multiply.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut acc = Self::ONE;

        for i in (0..u32::BITS - exponent.leading_zeros()).rev() {
            acc = acc.wrapping_mul(&acc);

            if (exponent >> i) & 1 == 1 {
                acc = acc.wrapping_mul(self);
            }
        }

        acc
    }

    /// Integer square root, the largest `x` with `x * x <= self`.
    pub fn isqrt(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        // Newton iteration from a power of two not below the root.
        let mut x = Self::ONE.wrapping_shl(self.bits().div_ceil(2));

        loop {
            let (q, _) = self.div_rem_nonzero(&x);
            let y = x.wrapping_add(&q).wrapping_shr(1);

            if y >= x {
                return x;
            }

            x = y;
        }
    }

    /// Greatest common divisor; `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = *self;
        let mut b = *other;

        while !b.is_zero() {
            let (_, r) = a.div_rem_nonzero(&b);
            a = b;
            b = r;
        }

        a
    }
}

/// Divides the limb slice `u` by the non-zero limb slice `v`.
///
/// `u` may be up to `2 * LIMBS` limbs and `v` up to `LIMBS` limbs. The
/// quotient is written to `q` (at least as long as `u`) and the remainder to
/// `r` (at least as long as the trimmed `v`); both must be zeroed.
fn divide_into<const LIMBS: usize>(u: &[u64], v: &[u64], q: &mut [u64], r: &mut [u64]) {
    let u_len = significant_len(u);
    let v_len = significant_len(v);

    if u_len < v_len {
        r[..u_len].copy_from_slice(&u[..u_len]);
        return;
    }

    if v_len == 1 {
        r[0] = div_rem_limb(&u[..u_len], v[0], &mut q[..u_len]);
        return;
    }

    let mut un = [[0u64; LIMBS]; 3];
    let mut vn = [0u64; LIMBS];

    div_rem_knuth(
        &u[..u_len],
        &v[..v_len],
        &mut q[..u_len - v_len + 1],
        &mut r[..v_len],
        &mut un.as_flattened_mut()[..u_len + 1],
        &mut vn[..v_len],
    );
}
