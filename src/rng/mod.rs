//! Random number generation
//!
//! Parameter generation needs randomness in exactly one place: choosing
//! the offset point `R` of the table. The generator below is a ChaCha20
//! DRBG that is either seeded from the operating system or from an
//! explicit 32-byte seed; the latter makes a whole generation run
//! reproducible.

mod chacha20;
mod csprng;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::Csprng;
