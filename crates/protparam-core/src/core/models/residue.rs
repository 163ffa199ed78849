use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (A)
    Glycine,    // Glycine (G)
    Isoleucine, // Isoleucine (I)
    Leucine,    // Leucine (L)
    Proline,    // Proline (P)
    Valine,     // Valine (V)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (F)
    Tryptophan,    // Tryptophan (W)
    Tyrosine,      // Tyrosine (Y)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (N)
    Cysteine,   // Cysteine (C)
    Glutamine,  // Glutamine (Q)
    Serine,     // Serine (S)
    Threonine,  // Threonine (T)
    Methionine, // Methionine (M)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (R)
    Histidine, // Histidine (H)
    Lysine,    // Lysine (K)

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (D)
    GlutamicAcid, // Glutamic Acid (E)
}

static ONE_LETTER_CODES: Map<char, AminoAcid> = phf_map! {
    'A' => AminoAcid::Alanine,
    'R' => AminoAcid::Arginine,
    'N' => AminoAcid::Asparagine,
    'D' => AminoAcid::AsparticAcid,
    'C' => AminoAcid::Cysteine,
    'E' => AminoAcid::GlutamicAcid,
    'Q' => AminoAcid::Glutamine,
    'G' => AminoAcid::Glycine,
    'H' => AminoAcid::Histidine,
    'I' => AminoAcid::Isoleucine,
    'L' => AminoAcid::Leucine,
    'K' => AminoAcid::Lysine,
    'M' => AminoAcid::Methionine,
    'F' => AminoAcid::Phenylalanine,
    'P' => AminoAcid::Proline,
    'S' => AminoAcid::Serine,
    'T' => AminoAcid::Threonine,
    'W' => AminoAcid::Tryptophan,
    'Y' => AminoAcid::Tyrosine,
    'V' => AminoAcid::Valine,
};

impl AminoAcid {
    /// All 20 canonical amino acids, in the canonical table order used for
    /// composition indexing and report output.
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Arginine,
        AminoAcid::Asparagine,
        AminoAcid::AsparticAcid,
        AminoAcid::Cysteine,
        AminoAcid::GlutamicAcid,
        AminoAcid::Glutamine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Lysine,
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Proline,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Valine,
    ];

    /// Parses an uppercase one-letter code. Returns `None` for anything
    /// outside the 20 canonical codes.
    pub fn from_one_letter(code: char) -> Option<Self> {
        ONE_LETTER_CODES.get(&code).copied()
    }

    /// The one-letter code for this amino acid.
    pub const fn one_letter(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Arginine => 'R',
            AminoAcid::Asparagine => 'N',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::Cysteine => 'C',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Lysine => 'K',
            AminoAcid::Methionine => 'M',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
        }
    }

    /// Position of this amino acid in [`AminoAcid::ALL`], used to index the
    /// composition counts and the constant parameter tables.
    pub const fn index(self) -> usize {
        match self {
            AminoAcid::Alanine => 0,
            AminoAcid::Arginine => 1,
            AminoAcid::Asparagine => 2,
            AminoAcid::AsparticAcid => 3,
            AminoAcid::Cysteine => 4,
            AminoAcid::GlutamicAcid => 5,
            AminoAcid::Glutamine => 6,
            AminoAcid::Glycine => 7,
            AminoAcid::Histidine => 8,
            AminoAcid::Isoleucine => 9,
            AminoAcid::Leucine => 10,
            AminoAcid::Lysine => 11,
            AminoAcid::Methionine => 12,
            AminoAcid::Phenylalanine => 13,
            AminoAcid::Proline => 14,
            AminoAcid::Serine => 15,
            AminoAcid::Threonine => 16,
            AminoAcid::Tryptophan => 17,
            AminoAcid::Tyrosine => 18,
            AminoAcid::Valine => 19,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_one_letter_round_trips_all_canonical_codes() {
        for &aa in AminoAcid::ALL.iter() {
            assert_eq!(AminoAcid::from_one_letter(aa.one_letter()), Some(aa));
        }
    }

    #[test]
    fn from_one_letter_rejects_non_canonical_codes() {
        for code in ['B', 'J', 'O', 'U', 'X', 'Z', '*', '-', ' ', '1'] {
            assert_eq!(AminoAcid::from_one_letter(code), None);
        }
    }

    #[test]
    fn from_one_letter_is_case_sensitive() {
        assert_eq!(AminoAcid::from_one_letter('a'), None);
        assert_eq!(AminoAcid::from_one_letter('k'), None);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, &aa) in AminoAcid::ALL.iter().enumerate() {
            assert_eq!(aa.index(), i);
        }
    }

    #[test]
    fn all_contains_twenty_distinct_residues() {
        let set: std::collections::HashSet<_> = AminoAcid::ALL.iter().collect();
        assert_eq!(set.len(), 20);
    }
}
