//! Closed-form physicochemical properties derived from a composition.
//!
//! Everything here is a pure weighted sum over the constant tables in
//! [`crate::core::params`]; the only iterative computation in the crate is
//! the pI solver in [`crate::engine`].

use super::models::composition::Composition;
use super::models::residue::AminoAcid;
use super::params;

/// Molar extinction coefficient at 280 nm (M⁻¹·cm⁻¹) under the two standard
/// cysteine assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtinctionCoefficient {
    /// All cysteines free (reduced).
    pub reduced: u32,
    /// Maximal pairwise disulfide formation: `reduced + ⌊C/2⌋ × 125`.
    pub cystine: u32,
}

/// Average molecular weight in daltons: the sum of free-residue masses minus
/// one water per peptide bond. A single residue has zero bonds and keeps its
/// full mass.
pub fn molecular_weight(composition: &Composition) -> f64 {
    let residue_sum: f64 = composition
        .iter_present()
        .map(|(aa, n)| params::residue_mass(aa) * n as f64)
        .sum();
    residue_sum - (composition.length() as f64 - 1.0) * params::WATER_MASS_DA
}

/// Extinction coefficient from Trp/Tyr content, with the cystine estimate
/// assuming every cysteine pair forms a disulfide bond. The pairing is
/// order-insensitive; which cysteines pair is not modeled.
pub fn extinction_coefficient(composition: &Composition) -> ExtinctionCoefficient {
    let trp = composition.count(AminoAcid::Tryptophan) as u32;
    let tyr = composition.count(AminoAcid::Tyrosine) as u32;
    let cys = composition.count(AminoAcid::Cysteine) as u32;

    let reduced = trp * params::EXT_TRP + tyr * params::EXT_TYR;
    ExtinctionCoefficient {
        reduced,
        cystine: reduced + (cys / 2) * params::EXT_CYSTINE,
    }
}

/// Number of acidic residues (D + E).
pub fn acidic_count(composition: &Composition) -> usize {
    composition.count(AminoAcid::AsparticAcid) + composition.count(AminoAcid::GlutamicAcid)
}

/// Number of basic residues (K + R + H). Histidine is counted as basic,
/// consistent with its entry in the default ionizable-group table.
pub fn basic_count(composition: &Composition) -> usize {
    composition.count(AminoAcid::Lysine)
        + composition.count(AminoAcid::Arginine)
        + composition.count(AminoAcid::Histidine)
}
