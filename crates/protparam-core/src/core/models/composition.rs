use super::residue::AminoAcid;
use super::sequence::Sequence;

/// Occurrence counts of each canonical amino acid in a sequence.
///
/// Derived once from a [`Sequence`] and immutable thereafter. Counts are
/// indexed by [`AminoAcid::index`]; residues absent from the sequence have
/// count 0, and the counts always sum to the sequence length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    counts: [usize; 20],
    length: usize,
}

impl Composition {
    pub fn of(sequence: &Sequence) -> Self {
        let mut counts = [0usize; 20];
        for &aa in sequence.residues() {
            counts[aa.index()] += 1;
        }
        Self {
            counts,
            length: sequence.len(),
        }
    }

    pub fn count(&self, aa: AminoAcid) -> usize {
        self.counts[aa.index()]
    }

    /// Total number of residues counted.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Share of the sequence made up by `aa`, scaled to 100.
    pub fn percentage(&self, aa: AminoAcid) -> f64 {
        self.count(aa) as f64 / self.length as f64 * 100.0
    }

    /// Residues present in the sequence with their counts, in canonical
    /// table order.
    pub fn iter_present(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        AminoAcid::ALL
            .iter()
            .map(|&aa| (aa, self.count(aa)))
            .filter(|&(_, n)| n > 0)
    }
}
