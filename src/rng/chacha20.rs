//! ChaCha20 block function (RFC 8439).
//!
//! Only the keystream block is needed: [`Csprng`](super::Csprng) expands a
//! 256-bit key into random bytes block by block. No encryption API is
//! exposed.

/// `"expand 32-byte k"` as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Column rounds followed by diagonal rounds.
const ROUND_PATTERN: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// A keyed ChaCha20 instance with a fixed 96-bit nonce.
#[derive(Clone)]
pub(crate) struct ChaCha20 {
    key: [u32; 8],
    nonce: [u32; 3],
}

impl ChaCha20 {
    pub(crate) fn new(key: &[u8; 32], nonce: &[u8; 12]) -> Self {
        let mut k = [0u32; 8];
        let mut n = [0u32; 3];

        for (word, chunk) in k.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for (word, chunk) in n.iter_mut().zip(nonce.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        ChaCha20 { key: k, nonce: n }
    }

    /// Produces the 64-byte keystream block for `counter`.
    pub(crate) fn block(&self, counter: u32) -> [u8; 64] {
        let mut input = [0u32; 16];
        input[..4].copy_from_slice(&SIGMA);
        input[4..12].copy_from_slice(&self.key);
        input[12] = counter;
        input[13..].copy_from_slice(&self.nonce);

        let mut state = input;
        for _ in 0..10 {
            for &[a, b, c, d] in ROUND_PATTERN.iter() {
                quarter_round(&mut state, a, b, c, d);
            }
        }

        let mut out = [0u8; 64];
        for ((chunk, s), i) in out.chunks_exact_mut(4).zip(state.iter()).zip(input.iter()) {
            chunk.copy_from_slice(&s.wrapping_add(*i).to_le_bytes());
        }

        out
    }
}

#[inline(always)]
fn quarter_round(s: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(16);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(12);
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(8);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(7);
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439, section 2.3.2
    #[test]
    fn rfc8439_block_test_vector() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let nonce = [0, 0, 0, 0x09, 0, 0, 0, 0x4a, 0, 0, 0, 0];

        let block = ChaCha20::new(&key, &nonce).block(1);

        assert_eq!(
            &block[..16],
            &[
                0x10, 0xf1, 0xe7, 0xe4, 0xd1, 0x3b, 0x59, 0x15, 0x50, 0x0f, 0xdd, 0x1f, 0xa3, 0x20,
                0x71, 0xc4
            ]
        );
    }
}
