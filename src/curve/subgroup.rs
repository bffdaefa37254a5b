//! The 2-primary subgroup of a curve.
//!
//! The table is a coset of the 2-Sylow subgroup of `E(𝔽ₚ)`, which must be
//! cyclic so that a single generator `G` of order `2ᵏ` exists. Instead of
//! counting points and factoring the group order, the subgroup is found
//! by 2-descent:
//!
//! 1. The rational 2-torsion points are the roots of `x³ + a·x + b`.
//!    - none: the group order is odd, `k = 0`, `G = O`;
//!    - three: the 2-Sylow subgroup contains `ℤ/2 × ℤ/2` and is not cyclic;
//!    - one, `T`: the 2-Sylow subgroup is cyclic and `T` is its unique
//!      element of order two.
//! 2. Starting from `T`, points are halved while a rational half exists.
//!    In a cyclic group of order `2ᵏ` an element of order `2ʲ` has a half
//!    exactly when `j < k`, so the chain stops at a generator.
//! 3. The candidate is re-checked: `2^(k−1)·G ≠ O` and `2ᵏ·G = O`.
//!
//! Halving uses the doubling formula. `x(2P) = x_Q` rearranges to
//!
//! ```text
//! x⁴ − 4x_Q·x³ − 2a·x² − (8b + 4a·x_Q)·x + (a² − 4b·x_Q) = 0
//! ```
//!
//! whose rational roots with square `x³ + a·x + b` give the candidate
//! halves `±P`; the sign is fixed by recomputing `2P`.

use crate::curve::{Curve, Point};
use crate::error::{ParamError, ParamResult, SubgroupFault};
use crate::field::Polynomial;
use crate::primitives::U256;

use log::{debug, trace};

/// A cyclic subgroup of 2-power order, described by its generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subgroup<'f> {
    generator: Point<'f>,
    exponent: u32,
}

impl<'f> Subgroup<'f> {
    /// Checks that `generator` lies on `curve` and has exact order
    /// `2^exponent`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::SubgroupStructure`] with
    /// [`SubgroupFault::OrderMismatch`] if the order is wrong, and
    /// [`ParamError::NotOnCurve`] for a point off the curve.
    pub fn verify(curve: &Curve<'f>, generator: Point<'f>, exponent: u32) -> ParamResult<Self> {
        if let Point::Affine { x, y } = generator {
            curve.point(x, y)?;
        }

        let exact = match exponent {
            0 => generator.is_identity(),
            _ => {
                let below = curve.double_n(&generator, exponent - 1)?;
                !below.is_identity() && curve.double(&below)?.is_identity()
            }
        };

        if !exact {
            let (a, b) = curve.coefficients();
            return Err(ParamError::SubgroupStructure {
                a,
                b,
                fault: SubgroupFault::OrderMismatch { claimed: exponent },
            });
        }

        Ok(Subgroup {
            generator,
            exponent,
        })
    }

    pub fn generator(&self) -> Point<'f> {
        self.generator
    }

    /// `k` such that the subgroup has order `2ᵏ`.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// `2ᵏ` as a 256-bit integer.
    pub fn order(&self) -> U256 {
        U256::ONE << self.exponent
    }

    /// Whether `p` lies in this subgroup.
    ///
    /// Valid for the full 2-Sylow subgroup returned by
    /// [`Curve::order_2_primary`]: every point of 2-power order lies in it,
    /// so membership is `2ᵏ·P = O`.
    pub fn contains(&self, curve: &Curve<'f>, p: &Point<'f>) -> ParamResult<bool> {
        Ok(curve.double_n(p, self.exponent)?.is_identity())
    }
}

impl<'f> Curve<'f> {
    /// Finds a generator of the (cyclic) 2-Sylow subgroup of `E(𝔽ₚ)`.
    ///
    /// `k = 0` is a legitimate outcome (odd group order), returned with the
    /// identity as generator.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::SubgroupStructure`] if the 2-Sylow subgroup is
    /// not cyclic, if halving fails to terminate, or if the final candidate
    /// fails its order check.
    pub fn order_2_primary(&self) -> ParamResult<Subgroup<'f>> {
        let torsion = self.two_torsion()?;
        let (a, b) = self.coefficients();

        let t = match torsion.as_slice() {
            [] => {
                debug!("no rational 2-torsion on {self}; 2-primary part is trivial");
                return Subgroup::verify(self, Point::Identity, 0);
            }
            [t] => *t,
            _ => {
                return Err(ParamError::SubgroupStructure {
                    a,
                    b,
                    fault: SubgroupFault::NonCyclic,
                });
            }
        };

        // Hasse: #E(F_p) <= p + 1 + 2*sqrt(p) < 2^(bits + 1)
        let limit = self.field().bits() + 1;
        let mut generator = Point::Affine {
            x: t,
            y: self.field().zero(),
        };
        let mut exponent = 1u32;

        while let Some(half) = self.halve(&generator)? {
            exponent += 1;
            if exponent > limit {
                return Err(ParamError::SubgroupStructure {
                    a,
                    b,
                    fault: SubgroupFault::ExponentTooLarge,
                });
            }

            trace!("halved to a point of order 2^{exponent}");
            generator = half;
        }

        debug!("2-Sylow subgroup of {self} is cyclic of order 2^{exponent}");
        Subgroup::verify(self, generator, exponent)
    }

    /// Returns a rational point `P` with `2P = Q`, if one exists.
    ///
    /// When several halves are rational the one with the smallest
    /// x-coordinate is returned. The identity is never halved (its halves
    /// are the 2-torsion points, see [`Curve::two_torsion`]).
    pub fn halve(&self, q: &Point<'f>) -> ParamResult<Option<Point<'f>>> {
        let xq = match q {
            Point::Identity => return Ok(None),
            Point::Affine { x, .. } => *x,
        };

        let field = self.field();
        let (a, b) = (self.a(), self.b());
        let four = field.from_u64(4);
        let quartic = Polynomial::new(
            field,
            vec![
                a.square() - four * b * xq,
                -(field.from_u64(8) * b + four * a * xq),
                -a.double(),
                -(four * xq),
                field.one(),
            ],
        );

        for x in quartic.roots()? {
            let Some(y) = self.rhs(&x).sqrt() else {
                continue;
            };
            if y.is_zero() {
                continue;
            }

            let p = Point::Affine { x, y };
            if self.double(&p)? == *q {
                return Ok(Some(p));
            }

            let neg = self.negate(&p);
            if self.double(&neg)? == *q {
                return Ok(Some(neg));
            }
        }

        Ok(None)
    }
}
