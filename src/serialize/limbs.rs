//! Field elements to and from 64-bit limbs.

use crate::error::{ParamError, ParamResult};
use crate::field::{FieldElement, PrimeField};
use crate::isogeny::IsogenyStep;
use crate::primitives::U256;

/// Limbs per field element.
pub const LIMBS: usize = 4;

/// Little-endian limbs of the canonical value of `x`.
pub fn to_limbs(x: &FieldElement<'_>) -> [u64; LIMBS] {
    x.to_canonical().limbs()
}

/// Rebuilds a field element from its limbs.
///
/// # Errors
///
/// Returns [`ParamError::Decode`] if the value is not below the modulus.
pub fn from_limbs(field: &PrimeField, limbs: [u64; LIMBS]) -> ParamResult<FieldElement<'_>> {
    let value = U256::from(limbs);

    field.from_canonical(&value).ok_or_else(|| {
        ParamError::Decode(format!(
            "{value} is not below the modulus {}",
            field.modulus()
        ))
    })
}

/// The table stream: every entry's limbs, in table order.
pub fn table_limbs(entries: &[FieldElement<'_>]) -> Vec<u64> {
    entries.iter().flat_map(to_limbs).collect()
}

/// The isogeny stream: for each step, the limbs of its numerator
/// coefficients followed by those of its denominator coefficients.
pub fn isogeny_limbs(steps: &[IsogenyStep<'_>]) -> Vec<u64> {
    steps
        .iter()
        .flat_map(|step| step.isogeny().map().coefficients())
        .flat_map(to_limbs)
        .collect()
}

/// Splits a flat limb stream back into field elements.
///
/// # Errors
///
/// Returns [`ParamError::Decode`] if the stream length is not a multiple
/// of [`LIMBS`] or a value is not below the modulus.
pub fn decode_elements<'f>(field: &'f PrimeField, limbs: &[u64]) -> ParamResult<Vec<FieldElement<'f>>> {
    if limbs.len() % LIMBS != 0 {
        return Err(ParamError::Decode(format!(
            "{} limbs do not form whole elements of {LIMBS} limbs",
            limbs.len()
        )));
    }

    limbs
        .chunks_exact(LIMBS)
        .map(|chunk| {
            let mut words = [0u64; LIMBS];
            words.copy_from_slice(chunk);
            from_limbs(field, words)
        })
        .collect()
}
