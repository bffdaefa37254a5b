//! Prime field arithmetic in Montgomery form.
//!
//! This module implements arithmetic in
//!
//! ```text
//! 𝔽ₚ  for an odd prime 3 < p < 2²⁵⁵
//! ```
//!
//! The modulus is not baked into the type: a [`PrimeField`] value holds the
//! modulus together with its precomputed Montgomery constants, and every
//! [`FieldElement`] borrows the field it belongs to. The generator threads a
//! single field through all components; tests build small fields over toy
//! primes to exercise the very same code.
//!
//! ## Representation
//!
//! Elements are stored as `x·R mod p` with `R = 2²⁵⁶`, in four little-endian
//! 64-bit limbs. Multiplication uses word-by-word (CIOS) Montgomery
//! reduction; every operation returns a fully reduced value in `[0, p)`, so
//! equality and hashing work directly on the stored limbs.
//!
//! ## Implemented operations
//!
//! - addition, subtraction, negation, doubling
//! - multiplication, squaring, exponentiation
//! - inversion (Fermat), batch inversion
//! - quadratic-residue test and Tonelli–Shanks square root
//! - uniform sampling from a [`Csprng`]

use crate::error::{ArithmeticError, ParamError, ParamResult};
use crate::primitives::U256;
use crate::rng::Csprng;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// Smallest candidates tried when looking for a quadratic non-residue.
const NONRESIDUE_SEARCH_LIMIT: u64 = 1 << 16;

/// `acc + a·b + carry`, split into (low, high) words.
#[inline(always)]
fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = acc as u128 + a as u128 * b as u128 + carry as u128;
    (t as u64, (t >> 64) as u64)
}

/// `a + b + carry`, split into (sum, carry).
#[inline(always)]
fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = a as u128 + b as u128 + carry as u128;
    (t as u64, (t >> 64) as u64)
}

/// A prime field together with its Montgomery constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: U256,
    /// `−p⁻¹ mod 2⁶⁴`
    inv: u64,
    /// `R mod p`, the Montgomery form of one.
    r: U256,
    /// `R² mod p`
    r2: U256,
    /// `s` in `p − 1 = q·2ˢ`
    two_adicity: u32,
    /// `q` in `p − 1 = q·2ˢ`
    odd_part: U256,
    /// Montgomery form of the smallest quadratic non-residue.
    nonresidue: U256,
}

impl PrimeField {
    /// Builds the arithmetic context for `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidModulus`] if the modulus is even, not
    /// larger than 3, wider than 255 bits, or visibly composite (no
    /// quadratic non-residue among small integers).
    pub fn new(modulus: U256) -> ParamResult<Self> {
        if !modulus.is_odd() || modulus <= U256::from(3) {
            return Err(ParamError::InvalidModulus {
                modulus,
                reason: "must be an odd prime greater than 3",
            });
        }
        if modulus.bits() > 255 {
            return Err(ParamError::InvalidModulus {
                modulus,
                reason: "must fit in 255 bits",
            });
        }

        let mut inv = 1u64;
        for _ in 0..63 {
            inv = inv.wrapping_mul(inv);
            inv = inv.wrapping_mul(modulus.0[0]);
        }
        let inv = inv.wrapping_neg();

        let mut acc = U256::ONE;
        let mut r = U256::ZERO;
        for i in 1..=512 {
            acc = acc + acc;
            if acc >= modulus {
                acc = acc - modulus;
            }
            if i == 256 {
                r = acc;
            }
        }

        let p_minus_one = modulus - U256::ONE;
        let two_adicity = p_minus_one.trailing_zeros();

        let mut field = PrimeField {
            modulus,
            inv,
            r,
            r2: acc,
            two_adicity,
            odd_part: p_minus_one >> two_adicity,
            nonresidue: U256::ZERO,
        };

        let nonresidue = (2..NONRESIDUE_SEARCH_LIMIT)
            .map(|z| field.from_u64(z))
            .find(|z| !z.is_square())
            .map(|z| z.value)
            .ok_or(ParamError::InvalidModulus {
                modulus,
                reason: "no quadratic non-residue found; modulus is not prime",
            })?;
        field.nonresidue = nonresidue;

        Ok(field)
    }

    /// The prime modulus `p`.
    pub fn modulus(&self) -> &U256 {
        &self.modulus
    }

    /// Bit length of `p`.
    pub fn bits(&self) -> u32 {
        self.modulus.bits()
    }

    /// The largest `s` with `2ˢ | p − 1`.
    pub fn two_adicity(&self) -> u32 {
        self.two_adicity
    }

    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: U256::ZERO,
        }
    }

    pub fn one(&self) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: self.r,
        }
    }

    pub fn from_u64(&self, value: u64) -> FieldElement<'_> {
        self.reduce(&U256::from(value))
    }

    /// Maps an arbitrary 256-bit integer to its residue class.
    ///
    /// Any input is accepted: `v·R² < R·p` always holds because `R² mod p`
    /// is already reduced, so one Montgomery multiplication suffices.
    pub fn reduce(&self, value: &U256) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: self.mont_mul(value, &self.r2),
        }
    }

    /// Returns the element whose canonical value is `value`, or `None` if
    /// `value >= p`.
    pub fn from_canonical(&self, value: &U256) -> Option<FieldElement<'_>> {
        if *value >= self.modulus {
            return None;
        }

        Some(self.reduce(value))
    }

    /// Samples a uniformly distributed element.
    ///
    /// Random integers of the modulus' bit length are drawn and rejected
    /// until one falls below `p`; each attempt succeeds with probability
    /// greater than one half.
    pub fn random(&self, rng: &mut Csprng) -> FieldElement<'_> {
        let shift = 256 - self.bits();

        loop {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);

            let candidate = U256::from_le_bytes(bytes) >> shift;
            if let Some(x) = self.from_canonical(&candidate) {
                return x;
            }
        }
    }

    /// Inverts every element with a single field inversion
    /// (Montgomery's trick).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if any input is zero.
    pub fn batch_invert<'f>(&'f self, values: &[FieldElement<'f>]) -> ParamResult<Vec<FieldElement<'f>>> {
        let mut prefix = Vec::with_capacity(values.len());
        let mut acc = self.one();

        for v in values {
            if v.is_zero() {
                return Err(ArithmeticError::DivisionByZero.into());
            }
            prefix.push(acc);
            acc = acc * *v;
        }

        let mut inv = acc.invert()?;
        let mut out = vec![self.zero(); values.len()];

        for i in (0..values.len()).rev() {
            out[i] = inv * prefix[i];
            inv = inv * values[i];
        }

        Ok(out)
    }

    /// Montgomery multiplication: `a·b·R⁻¹ mod p`, fully reduced.
    ///
    /// Requires `a·b < R·p`, which holds whenever one operand is reduced.
    fn mont_mul(&self, a: &U256, b: &U256) -> U256 {
        let p = &self.modulus.0;
        let a = &a.0;
        let b = &b.0;
        let mut t = [0u64; 6];

        for &bi in b.iter() {
            let mut carry = 0u64;
            for j in 0..4 {
                let (lo, hi) = mac(t[j], a[j], bi, carry);
                t[j] = lo;
                carry = hi;
            }
            let (s, c) = adc(t[4], carry, 0);
            t[4] = s;
            t[5] = c;

            let m = t[0].wrapping_mul(self.inv);
            let (_, mut carry) = mac(t[0], m, p[0], 0);
            for j in 1..4 {
                let (lo, hi) = mac(t[j], m, p[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (s, c) = adc(t[4], carry, 0);
            t[3] = s;
            t[4] = t[5] + c;
            t[5] = 0;
        }

        let out = U256([t[0], t[1], t[2], t[3]]);
        if t[4] != 0 || out >= self.modulus {
            out - self.modulus
        } else {
            out
        }
    }
}

/// An element of a [`PrimeField`].
///
/// Field elements are small `Copy` values tied to their field by
/// reference. Mixing elements of different fields is a logic error and is
/// caught by debug assertions.
#[derive(Clone, Copy)]
pub struct FieldElement<'f> {
    field: &'f PrimeField,
    /// Montgomery form, always in `[0, p)`.
    value: U256,
}

impl<'f> FieldElement<'f> {
    /// The field this element belongs to.
    pub fn field(&self) -> &'f PrimeField {
        self.field
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value == self.field.r
    }

    /// The canonical integer representative in `[0, p)`.
    pub fn to_canonical(&self) -> U256 {
        self.field.mont_mul(&self.value, &U256::ONE)
    }

    pub fn square(&self) -> Self {
        *self * *self
    }

    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Raises the element to an arbitrary 256-bit exponent
    /// (left-to-right square-and-multiply). `x⁰ = 1` for every `x`.
    pub fn pow(&self, exp: &U256) -> Self {
        let mut acc = self.field.one();

        for i in (0..exp.bits() as usize).rev() {
            acc = acc.square();
            if exp.bit(i) {
                acc = acc * *self;
            }
        }

        acc
    }

    /// Multiplicative inverse, computed as `x^(p−2)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for zero.
    pub fn invert(&self) -> ParamResult<Self> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }

        Ok(self.pow(&(self.field.modulus - U256::from(2))))
    }

    /// `self / rhs`.
    pub fn div(&self, rhs: &Self) -> ParamResult<Self> {
        Ok(*self * rhs.invert()?)
    }

    /// Euler's criterion. Zero counts as a square.
    pub fn is_square(&self) -> bool {
        if self.is_zero() {
            return true;
        }

        let exp = (self.field.modulus - U256::ONE) >> 1;
        self.pow(&exp).is_one()
    }

    /// Square root by Tonelli–Shanks, or `None` for non-residues.
    ///
    /// Of the two roots `±r` the one with the smaller canonical value is
    /// returned, so callers never depend on which root the algorithm
    /// happens to land on.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(*self);
        }
        if !self.is_square() {
            return None;
        }

        let field = self.field;
        let q = field.odd_part;
        let one = field.one();

        let mut m = field.two_adicity;
        let mut c = FieldElement {
            field,
            value: field.nonresidue,
        }
        .pow(&q);
        let mut t = self.pow(&q);
        let mut r = self.pow(&((q + U256::ONE) >> 1));

        while t != one {
            let mut i = 0u32;
            let mut probe = t;
            while probe != one {
                probe = probe.square();
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t = t * c;
            r = r * b;
        }

        let neg = -r;
        if neg.to_canonical() < r.to_canonical() {
            Some(neg)
        } else {
            Some(r)
        }
    }
}

impl<'f> Add for FieldElement<'f> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field.modulus, rhs.field.modulus);

        let (sum, carry) = self.value.overflowing_add(&rhs.value);
        let value = if carry || sum >= self.field.modulus {
            sum - self.field.modulus
        } else {
            sum
        };

        FieldElement {
            field: self.field,
            value,
        }
    }
}

impl<'f> Sub for FieldElement<'f> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field.modulus, rhs.field.modulus);

        let (diff, borrow) = self.value.overflowing_sub(&rhs.value);
        let value = if borrow {
            diff + self.field.modulus
        } else {
            diff
        };

        FieldElement {
            field: self.field,
            value,
        }
    }
}

impl<'f> Mul for FieldElement<'f> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field.modulus, rhs.field.modulus);

        FieldElement {
            field: self.field,
            value: self.field.mont_mul(&self.value, &rhs.value),
        }
    }
}

impl<'f> Neg for FieldElement<'f> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_zero() {
            return self;
        }

        FieldElement {
            field: self.field,
            value: self.field.modulus - self.value,
        }
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field.modulus == other.field.modulus
    }
}

impl Eq for FieldElement<'_> {}

impl Hash for FieldElement<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_canonical(), f)
    }
}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.to_canonical())
    }
}
