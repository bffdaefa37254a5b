//! The isogeny descent.
//!
//! The input is a curve `E` and two evaluation sets `S`, `S′` of equal
//! size `2ᵐ`. Each round:
//!
//! 1. enumerates the 2-isogenies `ψ` of `E` ([`TwoIsogeny::candidates`]);
//! 2. accepts the first `ψ` whose images of `S` take exactly `|S| / 2`
//!    distinct values, so that `ψ` is two-to-one on `S` and one-to-one on
//!    its first half (candidates with a pole on `S` are skipped);
//! 3. replaces `S` by `ψ(S[..|S|/2])`, `S′` by `ψ(S′[..|S|/2])` and `E` by
//!    the codomain of `ψ`.
//!
//! The loop stops once `S` holds a single element, so a table of `2ᵏ`
//! entries (`|S| = 2ᵏ⁻¹`) yields `k − 1` steps, and an empty `S` yields
//! none. When no candidate qualifies the whole descent fails; there is no
//! backtracking.

use crate::curve::Curve;
use crate::error::{ArithmeticError, ParamError, ParamResult};
use crate::field::FieldElement;
use crate::isogeny::TwoIsogeny;

use log::{debug, info};
use std::collections::HashSet;

/// One round of the descent.
#[derive(Clone, Debug)]
pub struct IsogenyStep<'f> {
    round: usize,
    candidate: usize,
    isogeny: TwoIsogeny<'f>,
    s: Vec<FieldElement<'f>>,
    s_prime: Vec<FieldElement<'f>>,
}

impl<'f> IsogenyStep<'f> {
    /// Zero-based round index.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Position of the chosen isogeny among the round's candidates.
    pub fn candidate(&self) -> usize {
        self.candidate
    }

    pub fn isogeny(&self) -> &TwoIsogeny<'f> {
        &self.isogeny
    }

    /// `S` after this round.
    pub fn s(&self) -> &[FieldElement<'f>] {
        &self.s
    }

    /// `S′` after this round.
    pub fn s_prime(&self) -> &[FieldElement<'f>] {
        &self.s_prime
    }
}

/// The result of [`descend`].
#[derive(Clone, Debug)]
pub struct Descent<'f> {
    steps: Vec<IsogenyStep<'f>>,
    curve: Curve<'f>,
    s: Vec<FieldElement<'f>>,
    s_prime: Vec<FieldElement<'f>>,
}

impl<'f> Descent<'f> {
    /// Steps in application order.
    pub fn steps(&self) -> &[IsogenyStep<'f>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Codomain of the last step, or the input curve if there were none.
    pub fn curve(&self) -> &Curve<'f> {
        &self.curve
    }

    /// Final `S`: one element, or none for an empty input.
    pub fn s(&self) -> &[FieldElement<'f>] {
        &self.s
    }

    pub fn s_prime(&self) -> &[FieldElement<'f>] {
        &self.s_prime
    }

    /// Pushes `x` through every step's x-map in order.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] if an intermediate
    /// value hits a pole.
    pub fn compose(&self, x: &FieldElement<'f>) -> ParamResult<FieldElement<'f>> {
        self.steps
            .iter()
            .try_fold(*x, |acc, step| step.isogeny.map().evaluate(&acc))
    }
}

/// Runs the descent on `(curve, s, s_prime)`.
///
/// # Errors
///
/// - [`ParamError::InvalidParameter`] if `s` and `s_prime` differ in length
///   or the length is neither zero nor a power of two
/// - [`ParamError::IsogenySelection`] if some round has no acceptable
///   candidate
/// - [`ParamError::Arithmetic`] if a chosen map has a pole on `S′`
pub fn descend<'f>(
    curve: &Curve<'f>,
    s: Vec<FieldElement<'f>>,
    s_prime: Vec<FieldElement<'f>>,
) -> ParamResult<Descent<'f>> {
    if s.len() != s_prime.len() {
        return Err(ParamError::InvalidParameter {
            name: "evaluation sets",
            reason: format!("|S| = {} but |S'| = {}", s.len(), s_prime.len()),
        });
    }
    if !s.is_empty() && !s.len().is_power_of_two() {
        return Err(ParamError::InvalidParameter {
            name: "evaluation sets",
            reason: format!("|S| = {} is not a power of two", s.len()),
        });
    }

    let mut curve = *curve;
    let mut s = s;
    let mut s_prime = s_prime;
    let mut steps = Vec::with_capacity(s.len().max(1).trailing_zeros() as usize);

    while s.len() > 1 {
        let round = steps.len();
        let nn = s.len() / 2;
        let candidates = TwoIsogeny::candidates(&curve)?;

        let mut chosen = None;
        for (index, isogeny) in candidates.iter().enumerate() {
            let Some(mut images) = isogeny.map().evaluate_batch(&s)? else {
                debug!("round {round}: candidate {index} has a pole on S");
                continue;
            };

            let distinct: HashSet<_> = images.iter().collect();
            if distinct.len() == nn {
                images.truncate(nn);
                chosen = Some((index, isogeny.clone(), images));
                break;
            }

            debug!(
                "round {round}: candidate {index} gives {} distinct images, need {nn}",
                distinct.len()
            );
        }

        let Some((candidate, isogeny, next_s)) = chosen else {
            let (a, b) = curve.coefficients();
            return Err(ParamError::IsogenySelection {
                round,
                candidates: candidates.len(),
                a,
                b,
            });
        };

        let next_s_prime = isogeny
            .map()
            .evaluate_batch(&s_prime[..nn])?
            .ok_or(ArithmeticError::DivisionByZero)?;

        debug!(
            "round {round}: kernel x = {}, codomain {}",
            isogeny.kernel_x(),
            isogeny.codomain()
        );

        curve = *isogeny.codomain();
        s = next_s;
        s_prime = next_s_prime;

        steps.push(IsogenyStep {
            round,
            candidate,
            isogeny,
            s: s.clone(),
            s_prime: s_prime.clone(),
        });
    }

    info!("isogeny descent finished after {} rounds", steps.len());

    Ok(Descent {
        steps,
        curve,
        s,
        s_prime,
    })
}
