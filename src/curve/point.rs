//! Points of a short Weierstrass curve.

use crate::field::FieldElement;

use std::fmt;

/// A point of `y² = x³ + a·x + b`: the point at infinity or an affine
/// pair.
///
/// Points do not carry their curve; [`Curve`](super::Curve) methods check
/// membership where it matters. Every affine point the crate constructs
/// satisfies the equation of the curve it was built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point<'f> {
    /// The group identity.
    Identity,

    /// An affine point.
    Affine {
        x: FieldElement<'f>,
        y: FieldElement<'f>,
    },
}

impl<'f> Point<'f> {
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<FieldElement<'f>> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(*x),
        }
    }

    /// The y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<FieldElement<'f>> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(*y),
        }
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("O"),
            Point::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
