//! Limb-level kernels
//!
//! These routines operate on little-endian slices of 64-bit limbs and are
//! shared by every width. They never allocate: callers provide the output
//! and scratch storage, usually as fixed-size arrays on the stack.
//!
//! Intermediate products and carries are computed in `u128`, which is wide
//! enough to hold `a * b + c + d` for any three 64-bit limbs.

/// Number of bits in a single limb.
pub const LIMB_BITS: u32 = u64::BITS;

/// Adds two limbs and an incoming carry, returning `(sum, carry)`.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let wide = a as u128 + b as u128 + carry as u128;
    (wide as u64, (wide >> LIMB_BITS) as u64)
}

/// Subtracts `b` and an incoming borrow from `a`, returning `(difference, borrow)`.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let (partial, under1) = a.overflowing_sub(b);
    let (diff, under2) = partial.overflowing_sub(borrow);
    (diff, (under1 | under2) as u64)
}

/// Computes `acc + a * b + carry`, returning `(low, high)`.
#[inline(always)]
pub(crate) const fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let wide = acc as u128 + (a as u128) * (b as u128) + carry as u128;
    (wide as u64, (wide >> LIMB_BITS) as u64)
}

/// Returns the number of significant limbs (the index of the highest
/// non-zero limb plus one).
#[inline]
pub(crate) fn significant_len(limbs: &[u64]) -> usize {
    limbs.iter().rposition(|&limb| limb != 0).map_or(0, |top| top + 1)
}

/// Schoolbook multiplication of `a` by `b` into `out`.
///
/// `out` must be zeroed by the caller. The product is truncated to
/// `out.len()` limbs, so passing an output as long as the operands yields
/// the wrapping product and passing one twice as long yields the full one.
pub(crate) fn mul_into(a: &[u64], b: &[u64], out: &mut [u64]) {
    let width = out.len();

    for (i, &x) in a.iter().enumerate() {
        if i >= width {
            break;
        }
        if x == 0 {
            continue;
        }

        let mut carry = 0u64;

        for (j, &y) in b.iter().enumerate() {
            let k = i + j;
            if k >= width {
                break;
            }

            let (low, high) = mac(out[k], x, y, carry);
            out[k] = low;
            carry = high;
        }

        if i + b.len() < width {
            out[i + b.len()] = carry;
        }
    }
}

/// Shifts `src` left by `shift` bits (`shift < 64`) into `dst`, returning
/// the bits shifted out of the top limb.
pub(crate) fn shl_into(src: &[u64], shift: u32, dst: &mut [u64]) -> u64 {
    if shift == 0 {
        dst[..src.len()].copy_from_slice(src);
        return 0;
    }

    let mut carry = 0u64;

    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s << shift) | carry;
        carry = s >> (LIMB_BITS - shift);
    }

    carry
}

/// Shifts `src` right by `shift` bits (`shift < 64`) into `dst`, pulling
/// in zeros at the top.
pub(crate) fn shr_into(src: &[u64], shift: u32, dst: &mut [u64]) {
    if shift == 0 {
        dst[..src.len()].copy_from_slice(src);
        return;
    }

    let len = src.len();

    for i in 0..len {
        let upper = if i + 1 < len {
            src[i + 1] << (LIMB_BITS - shift)
        } else {
            0
        };

        dst[i] = (src[i] >> shift) | upper;
    }
}

/// Divides `u` by the single non-zero limb `divisor`.
///
/// The quotient is written into `q` (same length as `u`) and the remainder
/// is returned.
pub(crate) fn div_rem_limb(u: &[u64], divisor: u64, q: &mut [u64]) -> u64 {
    debug_assert!(divisor != 0);

    let d = divisor as u128;
    let mut rem = 0u128;

    for i in (0..u.len()).rev() {
        let num = (rem << LIMB_BITS) | u[i] as u128;
        q[i] = (num / d) as u64;
        rem = num % d;
    }

    rem as u64
}

/// Multi-limb long division (Knuth, TAOCP vol. 2, algorithm D).
///
/// Preconditions:
/// - `v` is trimmed (its top limb is non-zero) and has at least two limbs
/// - `u.len() >= v.len()`
/// - `q` holds at least `u.len() - v.len() + 1` zeroed limbs
/// - `r` holds at least `v.len()` limbs
/// - `un` holds at least `u.len() + 1` limbs of scratch, `vn` at least `v.len()`
pub(crate) fn div_rem_knuth(
    u: &[u64],
    v: &[u64],
    q: &mut [u64],
    r: &mut [u64],
    un: &mut [u64],
    vn: &mut [u64],
) {
    let n = v.len();
    let m = u.len() - n;

    debug_assert!(n >= 2 && v[n - 1] != 0);

    // D1: normalize so that the top bit of the divisor is set.
    let shift = v[n - 1].leading_zeros();
    shl_into(v, shift, &mut vn[..n]);
    un[u.len()] = shl_into(u, shift, &mut un[..u.len()]);

    let v_top = vn[n - 1] as u128;
    let v_next = vn[n - 2] as u128;
    let base = 1u128 << LIMB_BITS;

    for j in (0..=m).rev() {
        // D3: estimate the quotient limb from the two leading limbs.
        let num = ((un[j + n] as u128) << LIMB_BITS) | un[j + n - 1] as u128;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;

        while qhat >= base || qhat * v_next > ((rhat << LIMB_BITS) | un[j + n - 2] as u128) {
            qhat -= 1;
            rhat += v_top;

            if rhat >= base {
                break;
            }
        }

        // D4: multiply and subtract.
        let mut carry = 0u64;
        let mut borrow = 0u64;

        for i in 0..n {
            let product = qhat * vn[i] as u128 + carry as u128;
            carry = (product >> LIMB_BITS) as u64;

            let (diff, b) = sbb(un[i + j], product as u64, borrow);
            un[i + j] = diff;
            borrow = b;
        }

        let (top, negative) = sbb(un[j + n], carry, borrow);
        un[j + n] = top;

        // D5/D6: the estimate was one too large, add the divisor back.
        if negative != 0 {
            qhat -= 1;

            let mut c = 0u64;
            for i in 0..n {
                let (sum, next) = adc(un[i + j], vn[i], c);
                un[i + j] = sum;
                c = next;
            }
            un[j + n] = un[j + n].wrapping_add(c);
        }

        q[j] = qhat as u64;
    }

    // D8: unnormalize the remainder.
    shr_into(&un[..n], shift, &mut r[..n]);
}
