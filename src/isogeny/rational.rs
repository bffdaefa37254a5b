//! Rational maps `x ↦ N(x) / D(x)`.

use crate::error::{ArithmeticError, ParamResult};
use crate::field::{FieldElement, Polynomial};

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct RationalMap<'f> {
    numerator: Polynomial<'f>,
    denominator: Polynomial<'f>,
}

impl<'f> RationalMap<'f> {
    /// # Errors
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] for a zero
    /// denominator.
    pub fn new(numerator: Polynomial<'f>, denominator: Polynomial<'f>) -> ParamResult<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }

        Ok(RationalMap {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> &Polynomial<'f> {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial<'f> {
        &self.denominator
    }

    /// Numerator coefficients followed by denominator coefficients, each in
    /// ascending degree.
    pub fn coefficients(&self) -> impl Iterator<Item = &FieldElement<'f>> {
        self.numerator
            .coeffs()
            .iter()
            .chain(self.denominator.coeffs())
    }

    /// # Errors
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] at a pole.
    pub fn evaluate(&self, x: &FieldElement<'f>) -> ParamResult<FieldElement<'f>> {
        self.numerator.evaluate(x).div(&self.denominator.evaluate(x))
    }

    /// Evaluates the map at every point of `xs`, inverting all denominators
    /// together.
    ///
    /// Returns `Ok(None)` if any point of `xs` is a pole.
    pub fn evaluate_batch(
        &self,
        xs: &[FieldElement<'f>],
    ) -> ParamResult<Option<Vec<FieldElement<'f>>>> {
        let denominators: Vec<_> = xs.iter().map(|x| self.denominator.evaluate(x)).collect();

        if denominators.iter().any(FieldElement::is_zero) {
            return Ok(None);
        }

        let field = self.denominator.field();
        let inverses = field.batch_invert(&denominators)?;

        let images = xs
            .iter()
            .zip(inverses)
            .map(|(x, inv)| self.numerator.evaluate(x) * inv)
            .collect();

        Ok(Some(images))
    }
}

impl fmt::Debug for RationalMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RationalMap")
            .field("numerator", &self.numerator)
            .field("denominator", &self.denominator)
            .finish()
    }
}

impl fmt::Display for RationalMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) / ({})", self.numerator, self.denominator)
    }
}
