//! 256-bit unsigned integer primitive
//!
//! `U256` is a low-level, dependency-free primitive rather than a full
//! big-integer abstraction. Modular arithmetic lives in [`crate::field`];
//! this type only carries values and provides the carry-aware building
//! blocks the field code needs.

mod conv;
mod core;
mod ops;

pub use self::conv::ParseU256Error;
pub use self::core::U256;
