//! Limb serialization.
//!
//! The consumer of the generated constants embeds them as arrays of 64-bit
//! words. Every field element becomes exactly [`LIMBS`] words, least
//! significant first:
//!
//! ```text
//! limb[i] = (value >> 64·i) & (2⁶⁴ − 1),   i = 0..3
//! ```
//!
//! Two flattened streams are produced:
//!
//! - the table stream: entry by entry, limbs innermost
//! - the isogeny stream: round by round; within a round the x-map
//!   numerator and then its denominator; within a polynomial the
//!   coefficients in ascending degree; limbs innermost
//!
//! Streams are written and read as newline-separated decimal integers or as
//! raw little-endian bytes ([`LimbFormat`]).

mod format;
mod limbs;

pub use format::{LimbFormat, read_limbs, write_limbs};
pub use limbs::{LIMBS, decode_elements, from_limbs, isogeny_limbs, table_limbs, to_limbs};
