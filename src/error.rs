//! Error types
//!
//! Every fallible operation in the crate returns [`ParamResult`]. The
//! variants follow the three failure families of parameter generation
//! (arithmetic, subgroup structure, isogeny selection) plus the plumbing
//! errors of configuration, decoding and I/O.
//!
//! Errors that describe a curve carry its coefficients as canonical
//! [`U256`] values so a misconfigured parameter set can be diagnosed from
//! the message alone.

use crate::primitives::{ParseU256Error, U256};

use thiserror::Error;

/// Failures of base-field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Inversion (or division) of the zero element.
    #[error("division by zero")]
    DivisionByZero,
}

/// Ways in which the 2-primary part of a curve can fail to have the
/// structure the table construction relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubgroupFault {
    /// All three 2-torsion points are rational, so the 2-Sylow subgroup
    /// is not cyclic and no single generator exists.
    #[error("2-Sylow subgroup is not cyclic")]
    NonCyclic,

    /// The candidate generator does not have exact order `2^claimed`.
    #[error("candidate generator does not have exact order 2^{claimed}")]
    OrderMismatch { claimed: u32 },

    /// Point halving did not terminate within the size of the field.
    #[error("2-power order exceeds the field size")]
    ExponentTooLarge,
}

/// The error type of the crate.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    #[error("invalid field modulus {modulus:#x}: {reason}")]
    InvalidModulus { modulus: U256, reason: &'static str },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("could not parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: ParseU256Error,
    },

    #[error("singular curve y^2 = x^3 + {a}*x + {b}")]
    SingularCurve { a: U256, b: U256 },

    #[error("point ({x}, {y}) is not on y^2 = x^3 + {a}*x + {b}")]
    NotOnCurve { x: U256, y: U256, a: U256, b: U256 },

    #[error("subgroup structure error on y^2 = x^3 + {a}*x + {b}: {fault}")]
    SubgroupStructure {
        a: U256,
        b: U256,
        #[source]
        fault: SubgroupFault,
    },

    #[error(
        "round {round}: none of the {candidates} 2-isogenies of y^2 = x^3 + {a}*x + {b} \
         halves the evaluation set"
    )]
    IsogenySelection {
        round: usize,
        candidates: usize,
        a: U256,
        b: U256,
    },

    #[error("no usable table offset after {attempts} attempts")]
    DegenerateOffset { attempts: usize },

    #[error("malformed limb stream: {0}")]
    Decode(String),

    #[error("operating system entropy unavailable: {0}")]
    Entropy(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Results returned from parameter generation.
pub type ParamResult<T> = Result<T, ParamError>;
