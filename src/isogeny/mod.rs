//! Degree-2 isogenies and the descent built from them.
//!
//! - [`RationalMap`]
//!   A quotient of two polynomials in `x`, evaluated pointwise or over a
//!   whole slice with a single field inversion.
//!
//! - [`TwoIsogeny`]
//!   The isogeny with kernel `{O, (x₀, 0)}` in Vélu's closed form. A curve
//!   has one candidate per rational 2-torsion point, so at most three.
//!
//! - [`descend`] / [`Descent`] / [`IsogenyStep`]
//!   The round loop: pick the first candidate (ascending `x₀`) whose
//!   x-map halves the current evaluation set `S`, push `S` and `S′`
//!   through it, move to the codomain, and repeat until `S` has a single
//!   element.
//!
//! Every step is recorded and never modified afterwards. The steps are
//! returned in application order, largest set first, which is also the
//! order in which their coefficients are serialized.

mod descent;
mod rational;
mod velu;

pub use descent::{Descent, IsogenyStep, descend};
pub use rational::RationalMap;
pub use velu::TwoIsogeny;
