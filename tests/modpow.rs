use wideint::WideIntError;
use wideint::primitives::{U64, U256, U512, Widening};

#[test]
fn modpow_small_values() {
    let m = U256::from(1_000_000_007u64);

    assert_eq!(
        U256::from(2u8).modpow(&U256::from(1000u16), &m).unwrap(),
        U256::from(688_423_210u64)
    );
    assert_eq!(U256::from(4u8).modpow(&U256::from(13u8), &U256::from(497u16)).unwrap(), U256::from(445u16));
}

#[test]
fn modpow_wide_modulus() {
    let p = (U256::ONE << 255u32) - 19u64;
    let base = U256::parse("0x1234567890ABCDEF1234567890ABCDEF1234567890ABCDEF1234567890ABCDEF").unwrap();
    let exponent = U256::parse("0xFEDCBA0987654321FEDCBA0987654321").unwrap();

    assert_eq!(
        base.modpow(&exponent, &p).unwrap(),
        "0xFEB1375CB9CD3A6FEA25CDCB9DC2EB5AE38A66BD63DAF5B5BAFAEAD275E5E30"
    );
}

#[test]
fn modpow_full_width_modulus_does_not_lose_precision() {
    let m = U256::MAX;

    assert_eq!(
        U256::from(3u8).modpow(&m, &m).unwrap(),
        "0xA886052028F019A27AEB451744280D7DA527514F1480A0C0F6AE48F04D593736"
    );
}

#[test]
fn modpow_fermat_little_theorem() {
    // 2^255 - 19 is prime.
    let p = (U256::ONE << 255u32) - 19u64;
    let exponent = p - 1u64;

    for base in [2u64, 3, 5, 0xDEAD_BEEF] {
        assert_eq!(U256::from(base).modpow(&exponent, &p).unwrap(), U256::ONE);
    }
}

#[test]
fn modpow_edge_cases() {
    let m = U256::from(97u8);
    let base = U256::from(1234u16);

    assert_eq!(base.modpow(&U256::ZERO, &m).unwrap(), U256::ONE);
    assert_eq!(base.modpow(&U256::ZERO, &U256::ONE).unwrap(), U256::ZERO);
    assert_eq!(base.modpow(&U256::from(5u8), &U256::ONE).unwrap(), U256::ZERO);
    assert_eq!(U256::ZERO.modpow(&U256::from(5u8), &m).unwrap(), U256::ZERO);
    assert_eq!(base.modpow(&U256::ONE, &m).unwrap(), base % m);

    assert_eq!(
        base.modpow(&U256::from(5u8), &U256::ZERO),
        Err(WideIntError::DivisionByZero)
    );
}

#[test]
fn mul_mod_keeps_high_half() {
    let m = U256::MAX - 188u64;
    let a = m - 1u64;
    let b = m - 2u64;

    // (-1) * (-2) = 2 (mod m)
    assert_eq!(a.mul_mod(&b, &m).unwrap(), U256::from(2u8));
    assert_eq!(a.mul_mod(&b, &U256::ZERO), Err(WideIntError::DivisionByZero));
}

#[test]
fn u64_width_modpow() {
    let m = U64::from(u64::MAX - 58);

    // 2^64 - 59 is prime.
    assert_eq!(
        U64::from(12345u16).modpow(&(m - 1u64), &m).unwrap(),
        U64::ONE
    );
}

#[test]
fn widening_mul_matches_split_halves() {
    let a = U256::MAX;
    let b = U256::from_limbs([3, 0, 0, 7]);

    let wide: U512 = a.widening_mul(&b);
    let (low, high) = a.widening_mul_split(&b);

    assert_eq!(wide, U512::from(low) + (U512::from(high) << 256u32));
    assert_eq!(U256::try_from(wide >> 256u32).unwrap(), high);
    assert_eq!(U256::try_from(wide), Err(WideIntError::Overflow));

    let max_square = U256::MAX.widening_mul(&U256::MAX);
    // (2^256 - 1)^2 = 2^512 - 2^257 + 1
    assert_eq!(max_square, U512::ONE - (U512::ONE << 257u32));
}
