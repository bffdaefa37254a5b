//! Finite field arithmetic.
//!
//! This module provides the exact arithmetic every other component is
//! built on:
//!
//! - [`PrimeField`] / [`FieldElement`]
//!   Arithmetic modulo a single odd prime `p < 2²⁵⁵`, in Montgomery form.
//!   The field is an explicit value created from the configured modulus
//!   and borrowed by every element; there is no global modulus.
//!
//! - [`Polynomial`]
//!   Dense univariate polynomials over the field, with Euclidean division,
//!   gcd, modular exponentiation and root extraction. Curve code uses it to
//!   find 2-torsion points and point halves; isogeny code uses it to carry
//!   rational-map numerators and denominators.
//!
//! ## Guarantees
//!
//! - every result is reduced into `[0, p)`; there is exactly one
//!   representation per residue
//! - inversion of zero is reported as
//!   [`ArithmeticError::DivisionByZero`](crate::error::ArithmeticError),
//!   never a panic
//! - no floating point anywhere

mod polynomial;
mod prime;

pub use polynomial::Polynomial;
pub use prime::{FieldElement, PrimeField};
