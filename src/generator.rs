//! End-to-end parameter generation.
//!
//! [`generate`] wires the components together:
//!
//! ```text
//! Parameters ─► Curve ─► 2-Sylow subgroup (G, k)
//!                              │
//!              random R ─► Table = x(R + i·G) ─► (S, S′)
//!                                                   │
//!                                      isogeny descent ─► steps
//! ```
//!
//! The resulting [`Output`] owns the table and the steps and writes both
//! limb streams in the configured [`LimbFormat`].

use crate::config::Config;
use crate::curve::{Curve, Subgroup};
use crate::error::ParamResult;
use crate::field::PrimeField;
use crate::isogeny::{Descent, descend};
use crate::serialize::{self, LimbFormat};
use crate::table::Table;

use log::info;
use std::io::Write;

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct Output<'f> {
    curve: Curve<'f>,
    subgroup: Subgroup<'f>,
    table: Table<'f>,
    descent: Descent<'f>,
    format: LimbFormat,
}

/// Runs the full pipeline over `field`, which must be built from
/// `config.parameters`.
///
/// # Errors
///
/// Propagates the first failure of any stage; nothing is retried except
/// the sampling of the table offset.
pub fn generate<'f>(field: &'f PrimeField, config: &Config) -> ParamResult<Output<'f>> {
    let curve = config.parameters.curve(field)?;
    info!("generating parameters for {curve} over a {}-bit field", field.bits());

    let subgroup = curve.order_2_primary()?;
    info!("2-Sylow subgroup has order 2^{}", subgroup.exponent());

    let mut rng = config.rng()?;
    let table = Table::with_random_offset(&curve, &subgroup, &mut rng)?;

    let (s, s_prime) = table.split();
    let descent = descend(&curve, s, s_prime)?;
    info!(
        "table of {} entries, {} isogeny steps",
        table.len(),
        descent.len()
    );

    Ok(Output {
        curve,
        subgroup,
        table,
        descent,
        format: config.format,
    })
}

impl<'f> Output<'f> {
    /// The starting curve.
    pub fn curve(&self) -> &Curve<'f> {
        &self.curve
    }

    pub fn subgroup(&self) -> &Subgroup<'f> {
        &self.subgroup
    }

    pub fn table(&self) -> &Table<'f> {
        &self.table
    }

    pub fn descent(&self) -> &Descent<'f> {
        &self.descent
    }

    pub fn table_limbs(&self) -> Vec<u64> {
        serialize::table_limbs(self.table.entries())
    }

    pub fn isogeny_limbs(&self) -> Vec<u64> {
        serialize::isogeny_limbs(self.descent.steps())
    }

    pub fn write_table<W: Write>(&self, writer: &mut W) -> ParamResult<()> {
        serialize::write_limbs(writer, &self.table_limbs(), self.format)
    }

    pub fn write_isogenies<W: Write>(&self, writer: &mut W) -> ParamResult<()> {
        serialize::write_limbs(writer, &self.isogeny_limbs(), self.format)
    }
}
