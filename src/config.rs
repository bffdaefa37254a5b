//! Generator configuration.
//!
//! The modulus and curve coefficients are an explicit value that callers
//! build once and thread through every component; nothing in the crate
//! reads global state. [`Parameters::bn254`] is the instance the crate
//! exists for. Other parameter sets are accepted so the same code path can
//! be exercised on small primes.

use crate::curve::Curve;
use crate::error::{ParamError, ParamResult};
use crate::field::PrimeField;
use crate::primitives::U256;
use crate::rng::Csprng;
use crate::serialize::LimbFormat;

/// BN254 base-field modulus
/// `21888242871839275222246405745257275088696311157297823662689037894645226208583`.
const BN254_MODULUS: U256 = U256::from_limbs([
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// `5612291247948481584627780310922020304781354847659642188369727566000581075360`.
const BN254_ECFFT_B: U256 = U256::from_limbs([
    0x5dcdee14b5ed61a0,
    0x35df7da06ba32982,
    0x3bfb29b83daa1fd1,
    0x0c6871bc29d46163,
]);

/// Field modulus and curve coefficients `y² = x³ + a·x + b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Parameters {
    pub modulus: U256,
    pub a: U256,
    pub b: U256,
}

impl Parameters {
    /// The curve over the BN254 base field whose 2-Sylow subgroup has
    /// order `2¹⁴`.
    pub const fn bn254() -> Self {
        Parameters {
            modulus: BN254_MODULUS,
            a: U256::ONE,
            b: BN254_ECFFT_B,
        }
    }

    /// Parses decimal or `0x`-prefixed hexadecimal strings.
    pub fn from_strs(modulus: &str, a: &str, b: &str) -> ParamResult<Self> {
        let parse = |name: &'static str, s: &str| -> ParamResult<U256> {
            s.trim()
                .parse()
                .map_err(|source| ParamError::Parse { name, source })
        };

        Ok(Parameters {
            modulus: parse("modulus", modulus)?,
            a: parse("a", a)?,
            b: parse("b", b)?,
        })
    }

    /// Builds the base field.
    pub fn field(&self) -> ParamResult<PrimeField> {
        PrimeField::new(self.modulus)
    }

    /// Builds the curve over `field`.
    ///
    /// # Errors
    ///
    /// - [`ParamError::InvalidParameter`] if `field` has a different modulus
    ///   or a coefficient is not below it
    /// - [`ParamError::SingularCurve`] for a singular curve
    pub fn curve<'f>(&self, field: &'f PrimeField) -> ParamResult<Curve<'f>> {
        if *field.modulus() != self.modulus {
            return Err(ParamError::InvalidParameter {
                name: "field",
                reason: format!(
                    "modulus {} does not match the configured {}",
                    field.modulus(),
                    self.modulus
                ),
            });
        }

        let coefficient = |name: &'static str, value: &U256| {
            field
                .from_canonical(value)
                .ok_or_else(|| ParamError::InvalidParameter {
                    name,
                    reason: format!("{value} is not below the modulus"),
                })
        };

        Curve::new(coefficient("a", &self.a)?, coefficient("b", &self.b)?)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::bn254()
    }
}

/// Everything [`generate`](crate::generator::generate) needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub parameters: Parameters,
    pub format: LimbFormat,
    /// Seed for the offset sampler; `None` draws from the OS.
    pub seed: Option<[u8; 32]>,
}

impl Config {
    pub fn new(parameters: Parameters) -> Self {
        Config {
            parameters,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: [u8; 32]) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format(mut self, format: LimbFormat) -> Self {
        self.format = format;
        self
    }

    /// The random source for this run.
    pub fn rng(&self) -> ParamResult<Csprng> {
        match self.seed {
            Some(seed) => Ok(Csprng::from_seed(seed)),
            None => Csprng::from_os(),
        }
    }
}
