use wideint::WideIntError;
use wideint::primitives::{U64, U128, U256, U512, U1024, U2048, U4096, Uint, Widening};

#[test]
fn u512_max_const() {
    assert_eq!(U512::MAX, U512::from_be_bytes(&[255u8; 64]).unwrap());
    assert_eq!(U512::MAX.count_ones(), 512);
}

#[test]
fn width_constants() {
    assert_eq!(U64::BITS, 64);
    assert_eq!(U128::BITS, 128);
    assert_eq!(U1024::BITS, 1024);
    assert_eq!(U2048::LIMBS, 32);
    assert_eq!(U4096::BITS, 4096);
    assert_eq!(Uint::<3>::BITS, 192);

    assert_eq!(U64::DIGITS10, 19);
    assert_eq!(U128::DIGITS10, 38);
    assert_eq!(U512::DIGITS10, 154);
}

#[test]
fn u512_widening_and_narrowing() {
    let v = U256::MAX;
    let wide = U512::from(v);

    assert_eq!(wide.bits(), 256);
    assert_eq!(U256::try_from(wide).unwrap(), v);
    assert_eq!(U256::try_from(wide + 1u64), Err(WideIntError::Overflow));

    let from_u128 = U256::from(U128::MAX);
    assert_eq!(from_u128, (U256::ONE << 128u32) - 1u64);
}

#[test]
fn widening_chain_reaches_4096_bits() {
    let a = U2048::MAX;
    let square: U4096 = a.widening_mul(&a);

    assert_eq!(square.bits(), 4096);
    assert_eq!(square.trailing_zeros(), 0);
    assert_eq!(square, U4096::ONE - (U4096::ONE << 2049u32));

    let small: U128 = U64::from(u64::MAX).widening_mul(&U64::from(u64::MAX));
    assert_eq!(small, U128::from(u64::MAX as u128 * u64::MAX as u128));
}

#[test]
fn u64_wraps_like_native() {
    let a = U64::from(u64::MAX);

    assert_eq!(a + 1u64, U64::ZERO);
    assert_eq!(a * a, U64::ONE);
    assert_eq!(U64::from(0xFFFF_FFFF_FFFF_FFFF_1234u128), U64::from(0xFFFF_FFFF_FFFF_1234u64));
}

#[test]
fn u1024_arithmetic() {
    let a = U1024::ONE << 1000u32;
    let b = (U1024::ONE << 500u32) + 3u64;

    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q * b + r, a);
    assert!(r < b);

    assert_eq!(a.isqrt(), U1024::ONE << 500u32);
    assert_eq!(a.trailing_zeros(), 1000);
}

#[test]
fn u512_ordering() {
    let small = U512::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX, 0, 0, 0, 0]);
    let large = U512::from_limbs([0, 0, 0, 0, 1, 0, 0, 0]);

    assert!(small < large);
    assert!(large > small);
    assert_eq!(small.max(large), large);

    let mut values = vec![large, U512::ZERO, small, U512::MAX];
    values.sort();
    assert_eq!(values, vec![U512::ZERO, small, large, U512::MAX]);
}
