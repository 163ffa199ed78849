pub mod pk_model;

use crate::core::models::residue::AminoAcid;

/// Average residue masses in daltons, indexed by [`AminoAcid::index`].
const RESIDUE_MASS_DA: [f64; 20] = [
    89.09,  // A
    174.20, // R
    132.12, // N
    133.10, // D
    121.15, // C
    147.13, // E
    146.15, // Q
    75.07,  // G
    155.16, // H
    131.17, // I
    131.17, // L
    146.19, // K
    149.21, // M
    165.19, // F
    115.13, // P
    105.09, // S
    119.12, // T
    204.23, // W
    181.19, // Y
    117.15, // V
];

/// Mass of one water molecule in daltons, lost per peptide bond formed.
pub const WATER_MASS_DA: f64 = 18.015;

/// Molar extinction coefficients at 280 nm (M⁻¹·cm⁻¹), Pace et al. values.
pub const EXT_TRP: u32 = 5500;
pub const EXT_TYR: u32 = 1490;
/// Contribution of one cystine (disulfide-bonded cysteine pair).
pub const EXT_CYSTINE: u32 = 125;

pub fn residue_mass(aa: AminoAcid) -> f64 {
    RESIDUE_MASS_DA[aa.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_mass_matches_known_values() {
        assert_eq!(residue_mass(AminoAcid::Glycine), 75.07);
        assert_eq!(residue_mass(AminoAcid::Tryptophan), 204.23);
        assert_eq!(residue_mass(AminoAcid::Alanine), 89.09);
        assert_eq!(residue_mass(AminoAcid::Arginine), 174.20);
    }

    #[test]
    fn all_residues_have_positive_mass() {
        for &aa in AminoAcid::ALL.iter() {
            assert!(residue_mass(aa) > 0.0);
        }
    }

    #[test]
    fn glycine_is_the_lightest_residue() {
        let gly = residue_mass(AminoAcid::Glycine);
        for &aa in AminoAcid::ALL.iter() {
            assert!(residue_mass(aa) >= gly);
        }
    }
}
