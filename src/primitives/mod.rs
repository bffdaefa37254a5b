//! Primitive types
//!
//! Primitives are simple, fixed-size building blocks that provide
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate full-featured big-integer
//! libraries.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer stored as four
//!   little-endian 64-bit limbs

mod u256;

/// Fixed-size unsigned integer primitive used for moduli, exponents and
/// canonical field values.
pub use u256::{ParseU256Error, U256};
