//! Parameter generation for ECFFT over the BN254 base field
//!
//! This crate computes the static constants an ECFFT-style polynomial
//! commitment needs: a table of field elements taken from a coset of a
//! 2-power subgroup of an elliptic curve, and the chain of degree-2
//! isogenies that halves that table round after round. The output is two
//! streams of 64-bit limbs meant to be embedded as constants by the
//! protocol implementation that consumes them.
//!
//! Everything is exact arithmetic over a single prime field. There is no
//! computer-algebra system behind the scenes: big integers, the field, the
//! group law, 2-torsion, point halving and Vélu's formulas are all written
//! out in this crate.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The fixed-size `U256` integer: limbs, carries, shifts, parsing and
//!   formatting. The field is built on top of it.
//!
//! - `field`  
//!   Arithmetic modulo the configured prime in Montgomery form, square
//!   roots, batch inversion, and dense polynomials with root finding.
//!
//! - `curve`  
//!   Short Weierstrass curves: the affine group law, scalar
//!   multiplication, 2-torsion, random points, and extraction of the
//!   cyclic 2-Sylow subgroup by repeated halving.
//!
//! - `table`  
//!   The coset table `x(R + i·G)` and its split into the even-indexed set
//!   `S` and the odd-indexed set `S′`.
//!
//! - `isogeny`  
//!   Rational maps, Vélu 2-isogenies, and the descent that selects one
//!   isogeny per round by the injectivity criterion and records it.
//!
//! - `serialize`  
//!   Four little-endian limbs per field element, flattened table and
//!   isogeny streams, decimal and binary writers and readers.
//!
//! - `config` / `generator`  
//!   The explicit parameter value threaded through a run, and the
//!   pipeline that turns it into an [`Output`](generator::Output).
//!
//! - `rng`  
//!   A ChaCha20-based generator seeded from the operating system or from a
//!   caller seed; it picks the table offset.
//!
//! # Example
//!
//! ```no_run
//! use ecfft_params::config::Config;
//! use ecfft_params::generator::generate;
//!
//! # fn main() -> ecfft_params::error::ParamResult<()> {
//! let config = Config::default();
//! let field = config.parameters.field()?;
//! let output = generate(&field, &config)?;
//!
//! let mut table = Vec::new();
//! output.write_table(&mut table)?;
//! let mut isogenies = Vec::new();
//! output.write_isogenies(&mut isogenies)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Progress is reported through the `log` facade. The crate never installs
//! a logger.

mod os;

pub mod config;
pub mod curve;
pub mod error;
pub mod field;
pub mod generator;
pub mod isogeny;
pub mod primitives;
pub mod rng;
pub mod serialize;
pub mod table;
