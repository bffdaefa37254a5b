//! Conversions between `U256` and native representations
//!
//! - limb arrays (the serializer's view of a value)
//! - little-endian byte arrays (the random sampler's view)
//! - `u64`
//! - decimal and `0x`-prefixed hexadecimal strings (configuration input)
//!
//! String parsing rejects empty input, stray characters and values that do
//! not fit in 256 bits.

use crate::primitives::U256;

use std::str::FromStr;

/// Error returned when a string does not describe a 256-bit unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseU256Error {
    #[error("empty string")]
    Empty,

    #[error("invalid digit {0:?}")]
    InvalidDigit(char),

    #[error("value does not fit in 256 bits")]
    Overflow,
}

impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        U256(value)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256([value, 0, 0, 0])
    }
}

impl U256 {
    /// Interprets 32 bytes as a little-endian integer.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *o = u64::from_le_bytes(word);
        }

        U256(out)
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }

        out
    }

    /// Parses a string of decimal digits.
    pub fn from_dec_str(s: &str) -> Result<Self, ParseU256Error> {
        Self::from_radix_str(s, 10)
    }

    /// Parses a string of hexadecimal digits (without prefix).
    pub fn from_hex_str(s: &str) -> Result<Self, ParseU256Error> {
        Self::from_radix_str(s, 16)
    }

    fn from_radix_str(s: &str, radix: u32) -> Result<Self, ParseU256Error> {
        if s.is_empty() {
            return Err(ParseU256Error::Empty);
        }

        let mut acc = U256::ZERO;

        for c in s.chars() {
            if c == '_' {
                continue;
            }

            let digit = c.to_digit(radix).ok_or(ParseU256Error::InvalidDigit(c))?;
            let (shifted, carry) = acc.mul_small(radix as u64);
            if carry != 0 {
                return Err(ParseU256Error::Overflow);
            }

            let (sum, overflow) = shifted.overflowing_add(&U256::from(digit as u64));
            if overflow {
                return Err(ParseU256Error::Overflow);
            }

            acc = sum;
        }

        Ok(acc)
    }
}

/// Accepts decimal, or hexadecimal with a `0x` / `0X` prefix.
impl FromStr for U256 {
    type Err = ParseU256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => U256::from_hex_str(hex),
            None => U256::from_dec_str(s),
        }
    }
}
