//! Dense univariate polynomials over a [`PrimeField`].
//!
//! Polynomials are stored as coefficient vectors in increasing degree
//! order:
//!
//! ```text
//! f(x) = coeffs[0] + coeffs[1]·x + coeffs[2]·x² + ...
//! ```
//!
//! with trailing zero coefficients trimmed, so the zero polynomial has an
//! empty coefficient list and `degree()` returns `None` for it.
//!
//! The operations are the ones the curve code needs to replace a
//! computer-algebra system: Euclidean division, gcd, modular
//! exponentiation and the extraction of all roots lying in 𝔽ₚ. Sizes stay
//! tiny (degree ≤ 4 for root finding, ≤ 2 for isogeny maps), so schoolbook
//! algorithms are used throughout.

use crate::error::{ArithmeticError, ParamError, ParamResult};
use crate::field::{FieldElement, PrimeField};
use crate::primitives::U256;

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Number of shifts `δ` tried before equal-degree splitting gives up.
///
/// Each attempt separates a given pair of roots with probability about
/// one half, so exhausting this bound means the modulus is not prime.
const SPLIT_ATTEMPTS: u64 = 256;

#[derive(Clone)]
pub struct Polynomial<'f> {
    field: &'f PrimeField,
    coeffs: Vec<FieldElement<'f>>,
}

impl<'f> Polynomial<'f> {
    /// Builds a polynomial from ascending coefficients, trimming trailing
    /// zeros.
    pub fn new(field: &'f PrimeField, coeffs: Vec<FieldElement<'f>>) -> Self {
        let mut poly = Polynomial { field, coeffs };
        poly.trim();
        poly
    }

    pub fn zero(field: &'f PrimeField) -> Self {
        Polynomial {
            field,
            coeffs: Vec::new(),
        }
    }

    pub fn constant(c: FieldElement<'f>) -> Self {
        Self::new(c.field(), vec![c])
    }

    /// The monomial `x`.
    pub fn x(field: &'f PrimeField) -> Self {
        Polynomial {
            field,
            coeffs: vec![field.zero(), field.one()],
        }
    }

    pub fn field(&self) -> &'f PrimeField {
        self.field
    }

    /// Ascending coefficients; empty for the zero polynomial.
    pub fn coeffs(&self) -> &[FieldElement<'f>] {
        &self.coeffs
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn leading(&self) -> Option<FieldElement<'f>> {
        self.coeffs.last().copied()
    }

    /// Horner evaluation.
    pub fn evaluate(&self, x: &FieldElement<'f>) -> FieldElement<'f> {
        let mut acc = self.field.zero();

        for &c in self.coeffs.iter().rev() {
            acc = acc * *x + c;
        }

        acc
    }

    pub fn scale(&self, c: FieldElement<'f>) -> Self {
        Self::new(self.field, self.coeffs.iter().map(|&a| a * c).collect())
    }

    /// Divides by the leading coefficient.
    pub fn monic(&self) -> ParamResult<Self> {
        match self.leading() {
            Some(lead) => Ok(self.scale(lead.invert()?)),
            None => Ok(self.clone()),
        }
    }

    /// Euclidean division: returns `(q, r)` with `self = q·divisor + r` and
    /// `deg r < deg divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> ParamResult<(Self, Self)> {
        let m = divisor.degree().ok_or(ArithmeticError::DivisionByZero)?;
        let lead_inv = divisor.coeffs[m].invert()?;

        let n = match self.degree() {
            Some(n) if n >= m => n,
            _ => return Ok((Self::zero(self.field), self.clone())),
        };

        let mut rem = self.coeffs.clone();
        let mut quot = vec![self.field.zero(); n - m + 1];

        for i in (0..=n - m).rev() {
            let c = rem[i + m] * lead_inv;
            quot[i] = c;

            for (j, &d) in divisor.coeffs.iter().enumerate() {
                rem[i + j] = rem[i + j] - c * d;
            }
        }

        rem.truncate(m);

        Ok((Self::new(self.field, quot), Self::new(self.field, rem)))
    }

    pub fn rem(&self, divisor: &Self) -> ParamResult<Self> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> ParamResult<Self> {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }

        a.monic()
    }

    /// `self^exp mod modulus` by square-and-multiply.
    pub fn pow_mod(&self, exp: &U256, modulus: &Self) -> ParamResult<Self> {
        let base = self.rem(modulus)?;
        let mut acc = Self::constant(self.field.one()).rem(modulus)?;

        for i in (0..exp.bits() as usize).rev() {
            acc = (&acc * &acc).rem(modulus)?;
            if exp.bit(i) {
                acc = (&acc * &base).rem(modulus)?;
            }
        }

        Ok(acc)
    }

    /// All distinct roots lying in 𝔽ₚ, sorted by canonical value.
    ///
    /// `gcd(x^p − x, f)` isolates the product of the linear factors of `f`;
    /// that product is then split with `gcd((x + δ)^((p−1)/2) − 1, g)` for
    /// `δ = 0, 1, 2, ...` until only linear factors remain. The sort makes
    /// the result independent of the order in which factors split off.
    ///
    /// # Errors
    ///
    /// Fails for the zero polynomial, whose root set is the whole field.
    pub fn roots(&self) -> ParamResult<Vec<FieldElement<'f>>> {
        let f = match self.degree() {
            None => {
                return Err(ParamError::InvalidParameter {
                    name: "polynomial",
                    reason: "the zero polynomial has no finite root set".into(),
                });
            }
            Some(0) => return Ok(Vec::new()),
            Some(_) => self.monic()?,
        };

        let x = Self::x(self.field);
        let frobenius = x.pow_mod(self.field.modulus(), &f)?;
        let linear_part = f.gcd(&(&frobenius - &x))?;

        let mut roots = Vec::new();
        self.split_linear(&linear_part, &mut roots)?;
        roots.sort_by_key(|r| r.to_canonical());

        Ok(roots)
    }

    /// Collects the roots of a monic, squarefree product of distinct linear
    /// factors.
    fn split_linear(&self, g: &Self, out: &mut Vec<FieldElement<'f>>) -> ParamResult<()> {
        let degree = match g.degree() {
            None | Some(0) => return Ok(()),
            Some(d) => d,
        };

        if degree == 1 {
            out.push(-g.coeffs[0].div(&g.coeffs[1])?);
            return Ok(());
        }

        let field = self.field;
        let half = (*field.modulus() - U256::ONE) >> 1;
        let one = Self::constant(field.one());

        for delta in 0..SPLIT_ATTEMPTS {
            let shifted = Self::new(field, vec![field.from_u64(delta), field.one()]);
            let h = shifted.pow_mod(&half, g)?;
            let h = g.gcd(&(&h - &one))?;

            if let Some(d) = h.degree() {
                if d > 0 && d < degree {
                    let (cofactor, _) = g.div_rem(&h)?;
                    self.split_linear(&h, out)?;
                    self.split_linear(&cofactor, out)?;
                    return Ok(());
                }
            }
        }

        Err(ParamError::InvalidParameter {
            name: "polynomial",
            reason: format!("roots did not separate after {SPLIT_ATTEMPTS} shifts"),
        })
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }
}

impl<'f> Add for &Polynomial<'f> {
    type Output = Polynomial<'f>;

    fn add(self, rhs: Self) -> Polynomial<'f> {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = self.field.zero();

        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or(zero);
                let b = rhs.coeffs.get(i).copied().unwrap_or(zero);
                a + b
            })
            .collect();

        Polynomial::new(self.field, coeffs)
    }
}

impl<'f> Sub for &Polynomial<'f> {
    type Output = Polynomial<'f>;

    fn sub(self, rhs: Self) -> Polynomial<'f> {
        self + &(-rhs)
    }
}

impl<'f> Neg for &Polynomial<'f> {
    type Output = Polynomial<'f>;

    fn neg(self) -> Polynomial<'f> {
        Polynomial::new(self.field, self.coeffs.iter().map(|&c| -c).collect())
    }
}

impl<'f> Mul for &Polynomial<'f> {
    type Output = Polynomial<'f>;

    fn mul(self, rhs: Self) -> Polynomial<'f> {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero(self.field);
        }

        let mut out = vec![self.field.zero(); self.coeffs.len() + rhs.coeffs.len() - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }

        Polynomial::new(self.field, out)
    }
}

impl PartialEq for Polynomial<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl Eq for Polynomial<'_> {}

impl fmt::Debug for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.coeffs.iter()).finish()
    }
}

impl fmt::Display for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{i}")?,
            }
        }

        Ok(())
    }
}
