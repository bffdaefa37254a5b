//! Table generation.
//!
//! The table is the x-coordinate image of a coset of the 2-Sylow
//! subgroup:
//!
//! ```text
//! Table[i] = x(R + i·G),   i ∈ [0, 2ᵏ)
//! ```
//!
//! where `G` generates the subgroup and `R` is an offset point outside it.
//! It is split into the even-indexed half `S` and the odd-indexed half
//! `S′`; the isogeny descent consumes both.
//!
//! ## Offsets
//!
//! If `R` lies in `⟨G⟩`, some `R + i·G` is the identity and has no
//! x-coordinate. Conversely, when `R ∉ ⟨G⟩` every entry is distinct: a
//! collision `x(R + i·G) = x(R + j·G)` would force `2R ∈ ⟨G⟩`, and since
//! `⟨G⟩` is the whole (cyclic) 2-Sylow subgroup that implies `R ∈ ⟨G⟩`.
//! Offsets are therefore checked for subgroup membership and nothing else.

mod core;

pub use self::core::Table;
