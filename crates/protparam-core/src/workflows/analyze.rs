use crate::core::models::composition::Composition;
use crate::core::models::sequence::{Sequence, SequenceError};
use crate::core::params::pk_model::PkModel;
use crate::core::properties::{self, ExtinctionCoefficient};
use crate::engine::solver::{self, IsoelectricPoint};
use tracing::{info, instrument, warn};

/// Configuration for one analysis run. The pKa model is the only tunable;
/// masses and extinction coefficients are process-wide constants.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub pk_model: PkModel,
}

/// Every derived property of one analyzed sequence.
///
/// All fields are pure functions of the composition plus the constant tables;
/// the struct is immutable once returned.
#[derive(Debug, Clone)]
pub struct ProteinAnalysis {
    pub sequence: Sequence,
    pub composition: Composition,
    pub molecular_weight: f64,
    pub extinction: ExtinctionCoefficient,
    pub acidic_count: usize,
    pub acidic_percentage: f64,
    pub basic_count: usize,
    pub basic_percentage: f64,
    pub isoelectric_point: IsoelectricPoint,
}

/// Runs the full analysis pipeline on raw sequence text:
/// normalize → count → aggregate → solve pI.
///
/// # Errors
///
/// Fails with [`SequenceError::Empty`] when the input holds no recognizable
/// amino-acid codes; nothing downstream is computed in that case.
#[instrument(skip_all, name = "protein_analysis")]
pub fn run(raw: &str, config: &AnalysisConfig) -> Result<ProteinAnalysis, SequenceError> {
    let sequence = Sequence::parse(raw)?;
    info!("Parsed sequence of {} residue(s).", sequence.len());

    let composition = Composition::of(&sequence);
    let length = composition.length() as f64;

    let molecular_weight = properties::molecular_weight(&composition);
    let extinction = properties::extinction_coefficient(&composition);
    let acidic_count = properties::acidic_count(&composition);
    let basic_count = properties::basic_count(&composition);

    let isoelectric_point = solver::isoelectric_point(&composition, &config.pk_model);
    if !isoelectric_point.converged {
        warn!(
            "pI search did not converge; reporting the boundary value {:.2} as low-confidence.",
            isoelectric_point.ph
        );
    }

    info!(
        "Analysis complete: MW {:.2} Da, pI {:.2}.",
        molecular_weight, isoelectric_point.ph
    );

    Ok(ProteinAnalysis {
        sequence,
        composition,
        molecular_weight,
        extinction,
        acidic_count,
        acidic_percentage: acidic_count as f64 / length * 100.0,
        basic_count,
        basic_percentage: basic_count as f64 / length * 100.0,
        isoelectric_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(raw: &str) -> ProteinAnalysis {
        run(raw, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn reference_hexapeptide_end_to_end() {
        let analysis = analyze("MKVLAT");

        assert_eq!(analysis.sequence.len(), 6);
        let counts: Vec<(char, usize)> = analysis
            .composition
            .iter_present()
            .map(|(aa, n)| (aa.one_letter(), n))
            .collect();
        assert_eq!(
            counts,
            vec![('A', 1), ('L', 1), ('K', 1), ('M', 1), ('T', 1), ('V', 1)]
        );

        let expected_mw = 149.21 + 146.19 + 117.15 + 131.17 + 89.09 + 119.12 - 5.0 * 18.015;
        assert!((analysis.molecular_weight - expected_mw).abs() < 1e-9);

        assert_eq!(analysis.acidic_count, 0);
        assert_eq!(analysis.basic_count, 1); // the lysine
        assert_eq!(analysis.extinction.reduced, 0);
        assert!(analysis.isoelectric_point.ph > 7.0);
    }

    #[test]
    fn normalization_is_applied_before_analysis() {
        let messy = analyze(" mkv-lat\n");
        let clean = analyze("MKVLAT");
        assert_eq!(messy.sequence, clean.sequence);
        assert_eq!(messy.molecular_weight, clean.molecular_weight);
    }

    #[test]
    fn empty_input_aborts_before_any_computation() {
        assert_eq!(
            run("", &AnalysisConfig::default()).unwrap_err(),
            SequenceError::Empty
        );
        assert_eq!(
            run("xz 123 !?", &AnalysisConfig::default()).unwrap_err(),
            SequenceError::Empty
        );
    }

    #[test]
    fn percentages_are_scaled_to_hundred() {
        let analysis = analyze("DKKK");
        assert!((analysis.acidic_percentage - 25.0).abs() < 1e-12);
        assert!((analysis.basic_percentage - 75.0).abs() < 1e-12);
    }

    #[test]
    fn neutral_sequence_is_flagged_low_confidence_not_an_error() {
        let analysis = analyze("GGGAAA");
        assert!(!analysis.isoelectric_point.converged);
        assert_eq!(analysis.isoelectric_point.ph, 14.0);
    }

    #[test]
    fn properties_are_order_independent() {
        let forward = analyze("ACDEFGHIKLMNPQRSTVWY");
        let reversed = analyze("YWVTSRQPNMLKIHGFEDCA");
        assert_eq!(forward.molecular_weight, reversed.molecular_weight);
        assert_eq!(forward.extinction, reversed.extinction);
        assert_eq!(forward.isoelectric_point, reversed.isoelectric_point);
    }
}
