//! Text and binary encodings of limb streams.

use crate::error::{ParamError, ParamResult};

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// How a limb stream is laid out on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LimbFormat {
    /// One decimal integer per line, lines joined by `\n`, no trailing
    /// newline.
    #[default]
    Decimal,

    /// Eight little-endian bytes per limb, no separators.
    Binary,
}

impl fmt::Display for LimbFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimbFormat::Decimal => f.write_str("decimal"),
            LimbFormat::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for LimbFormat {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(LimbFormat::Decimal),
            "binary" | "bin" => Ok(LimbFormat::Binary),
            _ => Err(ParamError::InvalidParameter {
                name: "limb format",
                reason: format!("unknown format {s:?}"),
            }),
        }
    }
}

pub fn write_limbs<W: Write>(writer: &mut W, limbs: &[u64], format: LimbFormat) -> ParamResult<()> {
    match format {
        LimbFormat::Decimal => {
            for (i, limb) in limbs.iter().enumerate() {
                if i > 0 {
                    writer.write_all(b"\n")?;
                }
                write!(writer, "{limb}")?;
            }
        }
        LimbFormat::Binary => {
            for limb in limbs {
                writer.write_all(&limb.to_le_bytes())?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Reads a whole limb stream.
///
/// The decimal reader tolerates a trailing newline and surrounding
/// whitespace on each line.
///
/// # Errors
///
/// Returns [`ParamError::Decode`] for a line that is not a `u64` or a
/// binary stream whose length is not a multiple of eight.
pub fn read_limbs<R: Read>(reader: &mut R, format: LimbFormat) -> ParamResult<Vec<u64>> {
    match format {
        LimbFormat::Decimal => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;

            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| {
                    line.parse::<u64>()
                        .map_err(|e| ParamError::Decode(format!("bad limb {line:?}: {e}")))
                })
                .collect()
        }
        LimbFormat::Binary => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;

            if bytes.len() % 8 != 0 {
                return Err(ParamError::Decode(format!(
                    "{} bytes do not form whole 64-bit limbs",
                    bytes.len()
                )));
            }

            Ok(bytes
                .chunks_exact(8)
                .map(|chunk| {
                    let mut word = [0u8; 8];
                    word.copy_from_slice(chunk);
                    u64::from_le_bytes(word)
                })
                .collect())
        }
    }
}
