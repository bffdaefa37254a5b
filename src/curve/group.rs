//! Group law of a short Weierstrass curve.
//!
//! The curve is
//!
//! ```text
//! E : y² = x³ + a·x + b    over 𝔽ₚ
//! ```
//!
//! with `4a³ + 27b² ≠ 0`. Points are kept in affine coordinates, one
//! inversion per addition; the table stores affine x-coordinates.
//!
//! ## Implemented operations
//!
//! - membership, validated construction, lifting an x-coordinate
//! - negation, addition, doubling
//! - scalar multiplication (double-and-add over a fixed 256-bit scan)
//! - rational 2-torsion (roots of `x³ + a·x + b`)
//! - uniformly random points
//! - j-invariant, for diagnostics
//!
//! Operations that invert field elements return [`ParamResult`]; for valid
//! points the inverted values are never zero, so an error here means an
//! internal invariant was broken.

use crate::curve::Point;
use crate::error::{ParamError, ParamResult};
use crate::field::{FieldElement, Polynomial, PrimeField};
use crate::primitives::U256;
use crate::rng::Csprng;

use std::fmt;

/// The curve `y² = x³ + a·x + b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve<'f> {
    a: FieldElement<'f>,
    b: FieldElement<'f>,
}

impl<'f> Curve<'f> {
    /// Builds the curve, rejecting singular coefficient pairs.
    pub fn new(a: FieldElement<'f>, b: FieldElement<'f>) -> ParamResult<Self> {
        let field = a.field();
        let disc = field.from_u64(4) * a.square() * a + field.from_u64(27) * b.square();

        if disc.is_zero() {
            return Err(ParamError::SingularCurve {
                a: a.to_canonical(),
                b: b.to_canonical(),
            });
        }

        Ok(Curve { a, b })
    }

    pub fn field(&self) -> &'f PrimeField {
        self.a.field()
    }

    pub fn a(&self) -> FieldElement<'f> {
        self.a
    }

    pub fn b(&self) -> FieldElement<'f> {
        self.b
    }

    /// Canonical `(a, b)`, as carried by error values.
    pub fn coefficients(&self) -> (U256, U256) {
        (self.a.to_canonical(), self.b.to_canonical())
    }

    /// `x³ + a·x + b`.
    pub fn rhs(&self, x: &FieldElement<'f>) -> FieldElement<'f> {
        (x.square() + self.a) * *x + self.b
    }

    pub fn contains(&self, p: &Point<'f>) -> bool {
        match p {
            Point::Identity => true,
            Point::Affine { x, y } => y.square() == self.rhs(x),
        }
    }

    /// Builds an affine point, checking the curve equation.
    pub fn point(&self, x: FieldElement<'f>, y: FieldElement<'f>) -> ParamResult<Point<'f>> {
        let p = Point::Affine { x, y };

        if !self.contains(&p) {
            let (a, b) = self.coefficients();
            return Err(ParamError::NotOnCurve {
                x: x.to_canonical(),
                y: y.to_canonical(),
                a,
                b,
            });
        }

        Ok(p)
    }

    /// The point with x-coordinate `x` and the smaller canonical `y`, if
    /// `x³ + a·x + b` is a square.
    pub fn lift_x(&self, x: FieldElement<'f>) -> Option<Point<'f>> {
        self.rhs(&x).sqrt().map(|y| Point::Affine { x, y })
    }

    pub fn negate(&self, p: &Point<'f>) -> Point<'f> {
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine { x: *x, y: -*y },
        }
    }

    /// Chord-and-tangent addition.
    pub fn add(&self, p: &Point<'f>, q: &Point<'f>) -> ParamResult<Point<'f>> {
        let ((x1, y1), (x2, y2)) = match (p, q) {
            (Point::Identity, _) => return Ok(*q),
            (_, Point::Identity) => return Ok(*p),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((*x1, *y1), (*x2, *y2))
            }
        };

        if x1 == x2 {
            if y1 + y2 == self.field().zero() {
                return Ok(Point::Identity);
            }
            return self.double(p);
        }

        let lambda = (y2 - y1).div(&(x2 - x1))?;
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Tangent doubling; points of order two double to the identity.
    pub fn double(&self, p: &Point<'f>) -> ParamResult<Point<'f>> {
        let (x, y) = match p {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (*x, *y),
        };

        if y.is_zero() {
            return Ok(Point::Identity);
        }

        let three = self.field().from_u64(3);
        let lambda = (three * x.square() + self.a).div(&y.double())?;
        let x3 = lambda.square() - x.double();
        let y3 = lambda * (x - x3) - y;

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// `k·P` by left-to-right double-and-add.
    ///
    /// All 256 bits of `k` are scanned and the addition is computed on
    /// every step, so the sequence of group operations does not depend on
    /// the scalar. `0·P` is the identity.
    pub fn mul(&self, p: &Point<'f>, k: &U256) -> ParamResult<Point<'f>> {
        let mut acc = Point::Identity;

        for i in (0..256).rev() {
            acc = self.double(&acc)?;
            let sum = self.add(&acc, p)?;
            if k.bit(i) {
                acc = sum;
            }
        }

        Ok(acc)
    }

    pub fn mul_u64(&self, p: &Point<'f>, k: u64) -> ParamResult<Point<'f>> {
        self.mul(p, &U256::from(k))
    }

    /// `2ᵉ·P` by repeated doubling.
    pub fn double_n(&self, p: &Point<'f>, e: u32) -> ParamResult<Point<'f>> {
        let mut acc = *p;

        for _ in 0..e {
            if acc.is_identity() {
                break;
            }
            acc = self.double(&acc)?;
        }

        Ok(acc)
    }

    /// x-coordinates of the rational points of order two, ascending by
    /// canonical value.
    ///
    /// These are the roots of `x³ + a·x + b`, i.e. of the 2-division
    /// polynomial `ψ₂² = 4(x³ + a·x + b)`. There are 0, 1 or 3 of them.
    pub fn two_torsion(&self) -> ParamResult<Vec<FieldElement<'f>>> {
        let field = self.field();
        let cubic = Polynomial::new(field, vec![self.b, self.a, field.zero(), field.one()]);

        cubic.roots()
    }

    /// A uniformly random affine point.
    ///
    /// x-coordinates are sampled until the right-hand side is a square; the
    /// sign of `y` is then chosen with a fair coin. A point with `y = 0` is
    /// the only point over its x-coordinate, so it is kept on one side of
    /// the coin only.
    pub fn random_point(&self, rng: &mut Csprng) -> Point<'f> {
        loop {
            let x = self.field().random(rng);

            let Some(y) = self.rhs(&x).sqrt() else {
                continue;
            };

            let flip = rng.next_bool();
            if y.is_zero() && flip {
                continue;
            }

            let y = if flip { -y } else { y };
            return Point::Affine { x, y };
        }
    }

    /// `j = 1728 · 4a³ / (4a³ + 27b²)`.
    pub fn j_invariant(&self) -> ParamResult<FieldElement<'f>> {
        let field = self.field();
        let four_a3 = field.from_u64(4) * self.a.square() * self.a;
        let disc = four_a3 + field.from_u64(27) * self.b.square();

        (field.from_u64(1728) * four_a3).div(&disc)
    }
}

impl fmt::Display for Curve<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}*x + {}", self.a, self.b)
    }
}
