//! ChaCha20-based CSPRNG
//!
//! The generator:
//! - takes its initial key from the operating system or from a caller seed
//! - expands randomness with the ChaCha20 block function
//! - rekeys itself after every request, so a captured state does not
//!   reveal earlier output

use crate::error::{ParamError, ParamResult};
use crate::os::sys_random;
use crate::rng::chacha20::ChaCha20;

/// Cryptographically secure pseudorandom number generator.
///
/// Two generators created with the same seed produce the same stream, which
/// is how callers obtain reproducible parameter sets.
pub struct Csprng {
    core: ChaCha20,
    counter: u32,
}

impl Csprng {
    /// Creates a generator seeded with operating-system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Entropy`] if the OS refuses to provide
    /// randomness.
    pub fn from_os() -> ParamResult<Self> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed).map_err(|e| ParamError::Entropy(e.to_string()))?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed buffer is wiped once it has been absorbed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let core = ChaCha20::new(&seed, &[0u8; 12]);
        seed.fill(0);

        Self { core, counter: 0 }
    }

    /// Fills `out` with random bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let block = self.core.block(self.counter);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);

        u64::from_le_bytes(buf)
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }

    /// Replaces the key with fresh keystream output.
    fn rekey(&mut self) {
        let block = self.core.block(self.counter);

        let mut key = [0u8; 32];
        key.copy_from_slice(&block[..32]);

        self.core = ChaCha20::new(&key, &[0u8; 12]);
        self.counter = 0;
    }
}
