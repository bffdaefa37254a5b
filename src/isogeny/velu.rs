//! Vélu's formulas for 2-isogenies.
//!
//! For a rational 2-torsion point `T = (x₀, 0)` on `E : y² = x³ + a·x + b`
//! put
//!
//! ```text
//! v = 3x₀² + a        w = x₀·v
//! ```
//!
//! The isogeny with kernel `{O, T}` lands on
//!
//! ```text
//! E′ : y² = x³ + (a − 5v)·x + (b − 7w)
//! ```
//!
//! and acts on points as
//!
//! ```text
//! X = x + v / (x − x₀) = (x² − x₀·x + v) / (x − x₀)
//! Y = y · (1 − v / (x − x₀)²)
//! ```
//!
//! with `T ↦ O`. Only the x-map is serialized; the full point map is kept
//! for checking that images land on the codomain.

use crate::curve::{Curve, Point};
use crate::error::{ParamError, ParamResult};
use crate::field::{FieldElement, Polynomial};
use crate::isogeny::RationalMap;

#[derive(Clone, Debug)]
pub struct TwoIsogeny<'f> {
    kernel_x: FieldElement<'f>,
    v: FieldElement<'f>,
    domain: Curve<'f>,
    codomain: Curve<'f>,
    map: RationalMap<'f>,
}

impl<'f> TwoIsogeny<'f> {
    /// The isogeny whose kernel is generated by `(kernel_x, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NotOnCurve`] if `(kernel_x, 0)` is not a point
    /// of `domain`.
    pub fn from_kernel(domain: &Curve<'f>, kernel_x: FieldElement<'f>) -> ParamResult<Self> {
        let field = domain.field();
        domain.point(kernel_x, field.zero())?;

        let (a, b) = (domain.a(), domain.b());
        let v = field.from_u64(3) * kernel_x.square() + a;
        let w = kernel_x * v;

        let codomain = Curve::new(a - field.from_u64(5) * v, b - field.from_u64(7) * w)?;
        let map = RationalMap::new(
            Polynomial::new(field, vec![v, -kernel_x, field.one()]),
            Polynomial::new(field, vec![-kernel_x, field.one()]),
        )?;

        Ok(TwoIsogeny {
            kernel_x,
            v,
            domain: *domain,
            codomain,
            map,
        })
    }

    /// Every 2-isogeny out of `curve`, ordered by ascending canonical value
    /// of the kernel x-coordinate.
    ///
    /// The order is the tie-break of the descent: the first candidate that
    /// satisfies the selection criterion wins, so it fixes the output.
    pub fn candidates(curve: &Curve<'f>) -> ParamResult<Vec<Self>> {
        curve
            .two_torsion()?
            .into_iter()
            .map(|x0| Self::from_kernel(curve, x0))
            .collect()
    }

    pub fn kernel_x(&self) -> FieldElement<'f> {
        self.kernel_x
    }

    pub fn domain(&self) -> &Curve<'f> {
        &self.domain
    }

    pub fn codomain(&self) -> &Curve<'f> {
        &self.codomain
    }

    /// The x-coordinate map `(x² − x₀·x + v) / (x − x₀)`.
    pub fn map(&self) -> &RationalMap<'f> {
        &self.map
    }

    /// Image of a point of the domain on the codomain.
    pub fn map_point(&self, p: &Point<'f>) -> ParamResult<Point<'f>> {
        let (x, y) = match p {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (*x, *y),
        };

        if !self.domain.contains(p) {
            let (a, b) = self.domain.coefficients();
            return Err(ParamError::NotOnCurve {
                x: x.to_canonical(),
                y: y.to_canonical(),
                a,
                b,
            });
        }

        if x == self.kernel_x {
            return Ok(Point::Identity);
        }

        let t = (x - self.kernel_x).invert()?;
        let image_x = self.map.evaluate(&x)?;
        let image_y = y * (x.field().one() - self.v * t.square());

        Ok(Point::Affine {
            x: image_x,
            y: image_y,
        })
    }
}
