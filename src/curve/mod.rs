//! Elliptic curve group.
//!
//! - [`Curve`] / [`Point`]
//!   Short Weierstrass curves `y² = x³ + a·x + b` over a
//!   [`PrimeField`](crate::field::PrimeField), with the affine group law and
//!   scalar multiplication.
//!
//! - [`Subgroup`]
//!   The cyclic 2-Sylow subgroup, found by 2-torsion enumeration and
//!   repeated point halving ([`Curve::order_2_primary`]).
//!
//! A curve is an immutable value: the isogeny descent replaces the current
//! curve by the codomain of each step rather than mutating it.

mod group;
mod point;
mod subgroup;

pub use group::Curve;
pub use point::Point;
pub use subgroup::Subgroup;
