//! ChaCha20 block function
//!
//! This module provides the ChaCha20 block function as specified in
//! RFC 8439. It is the only source of randomness for the engine in this
//! crate, so it works on 32-bit words directly: the key and nonce are
//! given as little-endian words and the keystream block is returned as
//! sixteen words.
//!
//! Serializing the returned words little-endian gives exactly the 64-byte
//! keystream block of the RFC.

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string:
/// `"expand 32-byte k"` encoded as little-endian `u32` words.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of 32-bit words in one keystream block.
pub(crate) const BLOCK_WORDS: usize = 16;

/// Word indices of the quarter rounds making up one double round: the
/// four columns of the 4x4 state followed by its four diagonals.
const DOUBLE_ROUND: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// Mixes the words at `[a, b, c, d]` with add, xor and rotate.
#[inline(always)]
fn quarter_round(state: &mut [u32; BLOCK_WORDS], [a, b, c, d]: [usize; 4]) {
    for (x, y, z, rotation) in [(a, b, d, 16), (c, d, b, 12), (a, b, d, 8), (c, d, b, 7)] {
        state[x] = state[x].wrapping_add(state[y]);
        state[z] = (state[z] ^ state[x]).rotate_left(rotation);
    }
}

/// Generates one keystream block: twenty rounds over the initial state,
/// then the initial state added back word by word.
///
/// # Parameters
/// - `key`: 256-bit key as eight little-endian words
/// - `counter`: 32-bit block counter
/// - `nonce`: 96-bit nonce as three little-endian words
pub(crate) fn block(key: &[u32; 8], counter: u32, nonce: &[u32; 3]) -> [u32; BLOCK_WORDS] {
    let mut input = [0u32; BLOCK_WORDS];

    input[0..4].copy_from_slice(&CHACHA20_CONSTANTS);
    input[4..12].copy_from_slice(key);
    input[12] = counter;
    input[13..16].copy_from_slice(nonce);

    let mut state = input;

    for _ in 0..10 {
        DOUBLE_ROUND
            .iter()
            .for_each(|&words| quarter_round(&mut state, words));
    }

    state.iter_mut().zip(&input).for_each(|(s, i)| {
        *s = s.wrapping_add(*i);
    });

    state
}

/// Reads a 32-byte key as little-endian words.
pub(crate) fn key_words(key: &[u8; 32]) -> [u32; 8] {
    let mut words = [0u32; 8];

    words.iter_mut().zip(key.chunks_exact(4)).for_each(|(w, chunk)| {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(chunk);
        *w = u32::from_le_bytes(bytes);
    });

    words
}
