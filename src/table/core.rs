//! Coset table over the 2-Sylow subgroup.

use crate::curve::{Curve, Point, Subgroup};
use crate::error::{ParamError, ParamResult};
use crate::field::FieldElement;
use crate::rng::Csprng;

use log::{info, warn};

/// Random offsets drawn before giving up.
///
/// A random point lies in the 2-Sylow subgroup with probability
/// `2ᵏ / #E`, which is negligible for the configured curve; the bound only
/// matters for toy curves whose whole group has 2-power order.
const OFFSET_ATTEMPTS: usize = 64;

/// The ordered list `x(R + i·G)` for `i ∈ [0, 2ᵏ)`.
#[derive(Clone, Debug)]
pub struct Table<'f> {
    entries: Vec<FieldElement<'f>>,
    offset: Point<'f>,
    exponent: u32,
}

impl<'f> Table<'f> {
    /// Builds the table for an explicit offset.
    ///
    /// # Errors
    ///
    /// - [`ParamError::NotOnCurve`] if `offset` is not a point of `curve`
    /// - [`ParamError::DegenerateOffset`] if `offset` lies in the subgroup
    /// - [`ParamError::InvalidParameter`] if `2ᵏ` entries cannot be
    ///   addressed on this platform
    pub fn generate(
        curve: &Curve<'f>,
        subgroup: &Subgroup<'f>,
        offset: Point<'f>,
    ) -> ParamResult<Self> {
        let exponent = subgroup.exponent();
        if exponent >= usize::BITS - 1 {
            return Err(ParamError::InvalidParameter {
                name: "subgroup exponent",
                reason: format!("a table of 2^{exponent} entries is not addressable"),
            });
        }

        if let Point::Affine { x, y } = offset {
            curve.point(x, y)?;
        }
        if subgroup.contains(curve, &offset)? {
            return Err(ParamError::DegenerateOffset { attempts: 1 });
        }

        let n = 1usize << exponent;
        let g = subgroup.generator();
        let mut entries = Vec::with_capacity(n);
        let mut current = offset;

        for _ in 0..n {
            let x = current.x().ok_or(ParamError::DegenerateOffset { attempts: 1 })?;
            entries.push(x);
            current = curve.add(&current, &g)?;
        }

        info!("generated table of {n} entries over {curve}");

        Ok(Table {
            entries,
            offset,
            exponent,
        })
    }

    /// Builds the table for a random offset, resampling offsets that fall
    /// inside the subgroup.
    pub fn with_random_offset(
        curve: &Curve<'f>,
        subgroup: &Subgroup<'f>,
        rng: &mut Csprng,
    ) -> ParamResult<Self> {
        for attempt in 1..=OFFSET_ATTEMPTS {
            let offset = curve.random_point(rng);

            if subgroup.contains(curve, &offset)? {
                warn!("offset {offset} lies in the 2-Sylow subgroup (attempt {attempt}); resampling");
                continue;
            }

            return Self::generate(curve, subgroup, offset);
        }

        Err(ParamError::DegenerateOffset {
            attempts: OFFSET_ATTEMPTS,
        })
    }

    pub fn entries(&self) -> &[FieldElement<'f>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a table holds at least `2⁰ = 1` entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `k` with `len() == 2ᵏ`.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The offset point `R`.
    pub fn offset(&self) -> Point<'f> {
        self.offset
    }

    /// Splits the table into `(S, S′)`: entries at even and at odd indices.
    ///
    /// A single-entry table has no interleaving and yields two empty
    /// halves.
    pub fn split(&self) -> (Vec<FieldElement<'f>>, Vec<FieldElement<'f>>) {
        if self.entries.len() < 2 {
            return (Vec::new(), Vec::new());
        }

        let s = self.entries.iter().step_by(2).copied().collect();
        let s_prime = self.entries.iter().skip(1).step_by(2).copied().collect();

        (s, s_prime)
    }
}
