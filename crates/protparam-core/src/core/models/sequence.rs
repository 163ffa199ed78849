use super::residue::AminoAcid;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("input contains no recognizable amino-acid codes")]
    Empty,
}

/// An ordered, non-empty protein sequence of canonical amino acids.
///
/// Created once per run from raw input text and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    residues: Vec<AminoAcid>,
}

impl Sequence {
    /// Normalizes raw text into a sequence: case-folds to uppercase and
    /// silently drops whitespace, punctuation, and any letter outside the 20
    /// canonical codes, preserving the order of surviving residues.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] when no valid residue survives, so an
    /// all-invalid input is never reported as a zero-length protein.
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let residues: Vec<AminoAcid> = raw
            .chars()
            .filter_map(|c| AminoAcid::from_one_letter(c.to_ascii_uppercase()))
            .collect();

        if residues.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { residues })
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always false: a parsed sequence holds at least one residue.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// The sequence rendered back as one-letter codes.
    pub fn to_letters(&self) -> String {
        self.residues.iter().map(|aa| aa.one_letter()).collect()
    }
}
