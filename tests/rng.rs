use wideint::WideIntError;
use wideint::primitives::{U64, U256};
use wideint::rng::{DEFAULT_SEED, RandomEngine, RngCore, SeedableRng, UniformDistribution};

/// RFC 8439, appendix A.1, test vector #1: all-zero key, nonce and counter.
const ZERO_KEY_BLOCK: [u8; 64] = [
    0x76, 0xb8, 0xe0, 0xad, 0xa0, 0xf1, 0x3d, 0x90, 0x40, 0x5d, 0x6a, 0xe5, 0x53, 0x86, 0xbd, 0x28,
    0xbd, 0xd2, 0x19, 0xb8, 0xa0, 0x8d, 0xed, 0x1a, 0xa8, 0x36, 0xef, 0xcc, 0x8b, 0x77, 0x0d, 0xc7,
    0xda, 0x41, 0x59, 0x7c, 0x51, 0x57, 0x48, 0x8d, 0x77, 0x24, 0xe0, 0x3f, 0xb8, 0xd8, 0x4a, 0x37,
    0x6a, 0x43, 0xb8, 0xf4, 0x15, 0x18, 0xa1, 0x1c, 0xc3, 0x87, 0xb6, 0x69, 0xb2, 0xee, 0x65, 0x86,
];

/// RFC 8439, appendix A.1, test vector #2: all-zero key and nonce, counter 1.
const ZERO_KEY_SECOND_BLOCK: [u8; 64] = [
    0x9f, 0x07, 0xe7, 0xbe, 0x55, 0x51, 0x38, 0x7a, 0x98, 0xba, 0x97, 0x7c, 0x73, 0x2d, 0x08, 0x0d,
    0xcb, 0x0f, 0x29, 0xa0, 0x48, 0xe3, 0x65, 0x69, 0x12, 0xc6, 0x53, 0x3e, 0x32, 0xee, 0x7a, 0xed,
    0x29, 0xb7, 0x21, 0x76, 0x9c, 0xe6, 0x4e, 0x43, 0xd5, 0x71, 0x33, 0xb0, 0x74, 0xd8, 0x39, 0xd5,
    0x31, 0xed, 0x1f, 0x28, 0x51, 0x0a, 0xfb, 0x45, 0xac, 0xe1, 0x0a, 0x1f, 0x4b, 0x79, 0x4d, 0x6f,
];

/// RFC 8439, appendix A.1, test vector #3: key ending in 0x01, counter 1.
const ONE_KEY_SECOND_BLOCK: [u8; 64] = [
    0x3a, 0xeb, 0x52, 0x24, 0xec, 0xf8, 0x49, 0x92, 0x9b, 0x9d, 0x82, 0x8d, 0xb1, 0xce, 0xd4, 0xdd,
    0x83, 0x20, 0x25, 0xe8, 0x01, 0x8b, 0x81, 0x60, 0xb8, 0x22, 0x84, 0xf3, 0xc9, 0x49, 0xaa, 0x5a,
    0x8e, 0xca, 0x00, 0xbb, 0xb4, 0xa7, 0x3b, 0xda, 0xd1, 0x92, 0xb5, 0xc4, 0x2f, 0x73, 0xf2, 0xfd,
    0x4e, 0x27, 0x36, 0x44, 0xc8, 0xb3, 0x61, 0x25, 0xa6, 0x4a, 0xdd, 0xeb, 0x00, 0x6c, 0x13, 0xa0,
];

/// Replays a fixed list of words.
struct Scripted {
    words: Vec<u64>,
    next: usize,
}

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.next];
        self.next += 1;
        word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            *byte = self.next_u32() as u8;
        }
    }
}

#[test]
fn engine_matches_chacha20_test_vector() {
    let mut rng = RandomEngine::new(0);
    let mut out = [0u8; 64];

    rng.fill_bytes(&mut out);

    assert_eq!(out, ZERO_KEY_BLOCK);
    assert_eq!(rng.block_counter(), 1);
}

#[test]
fn engine_matches_chacha20_vectors_past_first_block() {
    let mut out = [0u8; 64];

    let mut rng = RandomEngine::new(0);
    rng.seek(1);
    rng.fill_bytes(&mut out);
    assert_eq!(out, ZERO_KEY_SECOND_BLOCK);

    let mut key = [0u8; 32];
    key[31] = 1;

    let mut rng = RandomEngine::from_key(key);
    rng.seek(1);
    rng.fill_bytes(&mut out);
    assert_eq!(out, ONE_KEY_SECOND_BLOCK);
    assert_eq!(rng.block_counter(), 2);
}

#[test]
fn engine_words_are_little_endian() {
    let mut rng = RandomEngine::new(0);
    assert_eq!(rng.next_u32(), 0xade0_b876);

    let mut rng = RandomEngine::new(0);
    assert_eq!(rng.next_u64(), 0x903d_f1a0_ade0_b876);
}

#[test]
fn engine_deterministic_from_seed() {
    let mut rng1 = RandomEngine::new(65_658_281_052);
    let mut rng2 = RandomEngine::new(65_658_281_052);

    for _ in 0..1_000 {
        assert_eq!(rng1.next_u64(), rng2.next_u64());
    }

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn engine_different_seeds_differ() {
    let mut rng1 = RandomEngine::new(1);
    let mut rng2 = RandomEngine::new(2);

    let a: Vec<u64> = (0..8).map(|_| rng1.next_u64()).collect();
    let b: Vec<u64> = (0..8).map(|_| rng2.next_u64()).collect();

    assert_ne!(a, b);
}

#[test]
fn engine_seeding_paths_agree() {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&65_658_281_052u64.to_le_bytes());

    let mut by_new = RandomEngine::new(65_658_281_052);
    let mut by_u64 = RandomEngine::seed_from_u64(65_658_281_052);
    let mut by_seed = RandomEngine::from_seed(key);
    let mut by_key = RandomEngine::from_key(key);

    for _ in 0..64 {
        let expected = by_new.next_u64();
        assert_eq!(by_u64.next_u64(), expected);
        assert_eq!(by_seed.next_u64(), expected);
        assert_eq!(by_key.next_u64(), expected);
    }

    let mut default = RandomEngine::default();
    let mut seeded = RandomEngine::new(DEFAULT_SEED);
    assert_eq!(default.next_u64(), seeded.next_u64());
}

#[test]
fn engine_fill_bytes_consumes_whole_words() {
    let mut partial = RandomEngine::new(7);
    let mut words = RandomEngine::new(7);

    let mut out = [0u8; 6];
    partial.fill_bytes(&mut out);

    let first = words.next_u32().to_le_bytes();
    let second = words.next_u32().to_le_bytes();

    assert_eq!(&out[..4], &first);
    assert_eq!(&out[4..], &second[..2]);
    assert_eq!(partial.next_u32(), words.next_u32());
}

#[test]
fn engine_seek_skips_blocks() {
    let mut sequential = RandomEngine::new(9);
    let mut skipped = RandomEngine::new(9);

    let mut both = [0u8; 128];
    sequential.fill_bytes(&mut both);

    skipped.seek(1);
    let mut second = [0u8; 64];
    skipped.fill_bytes(&mut second);

    assert_eq!(&both[64..], &second);
}

#[test]
fn engine_rekeys_when_counter_is_exhausted() {
    let mut fresh = RandomEngine::new(11);
    let first_block: Vec<u32> = (0..16).map(|_| fresh.next_u32()).collect();

    let mut rng = RandomEngine::new(11);
    rng.seek(u32::MAX - 1);

    for _ in 0..16 {
        rng.next_u32();
    }
    assert_eq!(rng.block_counter(), u32::MAX);

    let after: Vec<u32> = (0..16).map(|_| rng.next_u32()).collect();

    assert_eq!(rng.block_counter(), 1);
    assert_ne!(after, first_block);
}

#[test]
fn uniform_rejects_empty_range() {
    assert_eq!(
        UniformDistribution::new(U256::from(5u8), U256::from(4u8)),
        Err(WideIntError::EmptyRange)
    );
}

#[test]
fn uniform_single_value_range() {
    let mut rng = RandomEngine::new(3);
    let dist = UniformDistribution::new(U256::from(42u8), U256::from(42u8)).unwrap();

    for _ in 0..10 {
        assert_eq!(dist.sample(&mut rng), U256::from(42u8));
    }
}

#[test]
fn uniform_samples_stay_in_range() {
    let mut rng = RandomEngine::new(65_658_281_052);
    let low = U256::ONE << 100u32;
    let high = (U256::ONE << 130u32) + 12_345u64;
    let dist = UniformDistribution::new(low, high).unwrap();

    for _ in 0..1_000 {
        let v = dist.sample(&mut rng);
        assert!(v >= low && v <= high);
    }
}

#[test]
fn uniform_small_range_hits_every_value() {
    let mut rng = RandomEngine::new(5);
    let dist = UniformDistribution::new(U64::from(10u8), U64::from(13u8)).unwrap();
    let mut seen = [false; 4];

    for _ in 0..1_000 {
        let v = u64::try_from(dist.sample(&mut rng)).unwrap();
        assert!((10..=13).contains(&v));
        seen[(v - 10) as usize] = true;
    }

    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn uniform_rejects_out_of_span_candidates() {
    // span = 5 needs three bits, so candidates 6 and 7 must be redrawn.
    let mut rng = Scripted {
        words: vec![0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFE, 0xF3],
        next: 0,
    };
    let dist = UniformDistribution::new(U256::from(100u8), U256::from(105u8)).unwrap();

    assert_eq!(dist.sample(&mut rng), U256::from(103u8));
    assert_eq!(rng.next, 3);
}

#[test]
fn uniform_full_range_uses_every_limb() {
    let mut rng = Scripted {
        words: vec![1, 2, 3, 4],
        next: 0,
    };

    assert_eq!(UniformDistribution::<4>::full().sample(&mut rng), U256::from_limbs([1, 2, 3, 4]));
    assert_eq!(UniformDistribution::<4>::default(), UniformDistribution::full());
}

#[test]
fn uniform_full_range_reaches_top_bit() {
    let mut rng = RandomEngine::new(13);
    let dist = UniformDistribution::<4>::full();

    assert!((0..64).any(|_| dist.sample(&mut rng).bit(255)));
}
