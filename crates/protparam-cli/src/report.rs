use protparam::workflows::analyze::ProteinAnalysis;
use std::fmt;

/// Textual report for one analyzed sequence, rendered via [`fmt::Display`].
pub struct Report<'a>(pub &'a ProteinAnalysis);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;

        writeln!(f, "========== Protein Analysis ==========")?;
        writeln!(f, "Protein Length: {} residues", analysis.sequence.len())?;
        writeln!(f, "Molecular Weight: {:.2} Da", analysis.molecular_weight)?;
        writeln!(
            f,
            "Extinction Coefficient (reduced Cys): {} M⁻¹cm⁻¹",
            analysis.extinction.reduced
        )?;
        writeln!(
            f,
            "Extinction Coefficient (disulfide/Cystine): {} M⁻¹cm⁻¹",
            analysis.extinction.cystine
        )?;
        writeln!(
            f,
            "Acidic residues (D+E): {} ({:.2}%)",
            analysis.acidic_count, analysis.acidic_percentage
        )?;
        writeln!(
            f,
            "Basic residues (K+R+H): {} ({:.2}%)",
            analysis.basic_count, analysis.basic_percentage
        )?;
        writeln!(f, "Theoretical pI: {:.2}", analysis.isoelectric_point.ph)?;
        if !analysis.isoelectric_point.converged {
            writeln!(
                f,
                "  (low confidence: net charge never reached zero within the pH 0-14 range)"
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Amino Acid Composition:")?;
        for (aa, count) in analysis.composition.iter_present() {
            writeln!(
                f,
                "  {}: {} ({:.2}%)",
                aa.one_letter(),
                count,
                analysis.composition.percentage(aa)
            )?;
        }

        Ok(())
    }
}
