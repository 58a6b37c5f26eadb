//! Deterministic ChaCha20 random engine
//!
//! `RandomEngine` expands a seed into a stream of words with the ChaCha20
//! block function. The key is the seed, the nonce is fixed to zero and the
//! block counter advances by one per 64-byte block. Keystream words are
//! consumed in order and read little-endian, so a given seed produces the
//! same sequence on every platform.
//!
//! When the block counter is exhausted the engine rekeys itself from the
//! next keystream block and restarts the counter, so the stream never
//! repeats a `(key, counter)` pair.
//!
//! The engine is a reproducible source of uniform bits for numeric
//! algorithms. It is not reseeded from the operating system and must not be
//! used to derive secrets.

use crate::rng::chacha20::{BLOCK_WORDS, block, key_words};

use rand_core::{RngCore, SeedableRng};

/// Seed used by [`RandomEngine::default`].
pub const DEFAULT_SEED: u64 = 0xF00D_CAFE;

/// Fixed nonce of the engine.
const NONCE: [u32; 3] = [0; 3];

/// Deterministic random engine built on the ChaCha20 block function.
///
/// Every draw mutates the engine, which is neither `Clone` nor `Copy`.
/// Independent streams come from independently seeded engines.
pub struct RandomEngine {
    /// ChaCha20 key (256-bit, little-endian words)
    key: [u32; 8],

    /// Counter of the next block to generate
    counter: u32,

    /// Current keystream block
    buffer: [u32; BLOCK_WORDS],

    /// Index of the next unread word in `buffer`
    cursor: usize,
}

impl RandomEngine {
    /// Creates an engine from a 64-bit seed.
    ///
    /// The seed's little-endian bytes fill the first eight key bytes; the
    /// rest of the key is zero.
    pub fn new(seed: u64) -> Self {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&seed.to_le_bytes());

        Self::from_key(key)
    }

    /// Creates an engine from a full 256-bit key.
    pub fn from_key(key: [u8; 32]) -> Self {
        Self {
            key: key_words(&key),
            counter: 0,
            buffer: [0u32; BLOCK_WORDS],
            cursor: BLOCK_WORDS,
        }
    }

    /// Positions the engine at the start of keystream block `block`.
    ///
    /// The buffered words of the current block are discarded.
    pub fn seek(&mut self, block: u32) {
        self.counter = block;
        self.cursor = BLOCK_WORDS;
    }

    /// Counter of the next keystream block to be generated.
    pub fn block_counter(&self) -> u32 {
        self.counter
    }

    /// Generates the next keystream block into the buffer.
    fn refill(&mut self) {
        if self.counter == u32::MAX {
            self.rekey();
        }

        self.buffer = block(&self.key, self.counter, &NONCE);
        self.counter += 1;
        self.cursor = 0;
    }

    /// Replaces the key with the first eight words of the final block
    /// under the current key and restarts the counter.
    fn rekey(&mut self) {
        let next = block(&self.key, self.counter, &NONCE);

        self.key.copy_from_slice(&next[..8]);
        self.counter = 0;

        log::trace!("random engine rekeyed after block counter exhaustion");
    }
}

impl Default for RandomEngine {
    /// Creates an engine seeded with [`DEFAULT_SEED`].
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for RandomEngine {
    fn next_u32(&mut self) -> u32 {
        if self.cursor == BLOCK_WORDS {
            self.refill();
        }

        let word = self.buffer[self.cursor];
        self.cursor += 1;
        word
    }

    /// Two consecutive words, the first one in the low half.
    fn next_u64(&mut self) -> u64 {
        let low = self.next_u32() as u64;
        let high = self.next_u32() as u64;

        (high << 32) | low
    }

    /// Fills `dst` with keystream bytes in order.
    ///
    /// Whole words are consumed; the unused bytes of a final partial word
    /// are dropped.
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for RandomEngine {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_key(seed)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
