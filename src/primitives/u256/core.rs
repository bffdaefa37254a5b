//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used for field moduli, exponents and canonical field values.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - carrying the prime modulus and curve coefficients
//! - exponents for modular exponentiation (`p − 2`, `(p − 1) / 2`, ...)
//! - canonical (non-Montgomery) field values and their limb encoding
//!
//! The internal representation is four 64-bit limbs in **little-endian**
//! order, which is exactly the limb layout emitted by the serializer.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as four `u64` limbs, least significant first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; 4]);

    /// The value one.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Builds a value from little-endian limbs.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        U256(limbs)
    }

    /// Returns the little-endian limbs.
    pub const fn limbs(&self) -> [u64; 4] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Returns bit `i` (bit 0 is the least significant).
    ///
    /// Bits at positions `>= 256` read as zero.
    pub fn bit(&self, i: usize) -> bool {
        if i >= 256 {
            return false;
        }

        (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Number of significant bits, i.e. `256 - leading_zeros()`.
    pub fn bits(&self) -> u32 {
        256 - self.leading_zeros()
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += 64;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Counts the number of trailing zero bits; zero has 256.
    pub fn trailing_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter() {
            if limb == 0 {
                count += 64;
            } else {
                count += limb.trailing_zeros();
                return count;
            }
        }

        count
    }

    /// Adds `rhs`, returning the wrapped sum and whether a carry left bit 255.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;

        for ((o, &a), &b) in out.iter_mut().zip(self.0.iter()).zip(rhs.0.iter()) {
            let (s1, c1) = a.overflowing_add(b);
            let (s2, c2) = s1.overflowing_add(carry);
            *o = s2;
            carry = (c1 | c2) as u64;
        }

        (U256(out), carry != 0)
    }

    /// Subtracts `rhs`, returning the wrapped difference and whether a
    /// borrow was needed (`self < rhs`).
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0u64;

        for ((o, &a), &b) in out.iter_mut().zip(self.0.iter()).zip(rhs.0.iter()) {
            let (d1, b1) = a.overflowing_sub(b);
            let (d2, b2) = d1.overflowing_sub(borrow);
            *o = d2;
            borrow = (b1 | b2) as u64;
        }

        (U256(out), borrow != 0)
    }

    /// Multiplies by a single limb, returning the low 256 bits and the
    /// carried-out high limb.
    pub fn mul_small(&self, rhs: u64) -> (Self, u64) {
        let mut out = [0u64; 4];
        let mut carry = 0u128;

        for (o, &a) in out.iter_mut().zip(self.0.iter()) {
            let t = a as u128 * rhs as u128 + carry;
            *o = t as u64;
            carry = t >> 64;
        }

        (U256(out), carry as u64)
    }

    /// Divides by a single non-zero limb, returning quotient and remainder.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_rem_small(&self, rhs: u64) -> (Self, u64) {
        assert!(rhs != 0, "division by zero");

        let mut out = [0u64; 4];
        let mut rem = 0u128;

        for (o, &a) in out.iter_mut().zip(self.0.iter()).rev() {
            let cur = (rem << 64) | a as u128;
            *o = (cur / rhs as u128) as u64;
            rem = cur % rhs as u128;
        }

        (U256(out), rem as u64)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()).rev() {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for U256 {
    /// Formats the value in decimal.
    ///
    /// Digits are produced nineteen at a time by repeated division by
    /// 10¹⁹, the largest power of ten that fits in a limb.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        const CHUNK: u64 = 10_000_000_000_000_000_000;

        if self.is_zero() {
            return f.pad("0");
        }

        let mut chunks = Vec::new();
        let mut rest = *self;

        while !rest.is_zero() {
            let (q, r) = rest.div_rem_small(CHUNK);
            chunks.push(r);
            rest = q;
        }

        let mut out = String::with_capacity(chunks.len() * 19);
        let mut iter = chunks.iter().rev();

        if let Some(head) = iter.next() {
            out.push_str(&head.to_string());
        }
        for chunk in iter {
            out.push_str(&format!("{:019}", chunk));
        }

        f.pad(&out)
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        let mut started = false;
        for &limb in self.0.iter().rev() {
            if started {
                write!(f, "{:016x}", limb)?;
            } else if limb != 0 {
                write!(f, "{:x}", limb)?;
                started = true;
            }
        }

        if !started {
            f.write_str("0")?;
        }

        Ok(())
    }
}
