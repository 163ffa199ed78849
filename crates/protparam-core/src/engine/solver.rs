use super::charge::net_charge;
use crate::core::models::composition::Composition;
use crate::core::params::pk_model::PkModel;
use tracing::debug;

/// Lower bound of the scanned pH domain.
pub const PH_MIN: f64 = 0.0;
/// Upper bound of the scanned pH domain; also the reported value when the
/// search does not converge.
pub const PH_MAX: f64 = 14.0;
/// A pH is accepted once the net charge is within this of zero.
pub const CHARGE_TOLERANCE: f64 = 0.01;
/// Bracket width at which bisection stops, matching the 0.01-pH resolution
/// of a fixed-step scan.
pub const PH_RESOLUTION: f64 = 0.01;

/// Result of the pI search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoelectricPoint {
    pub ph: f64,
    /// False when the net charge never came within [`CHARGE_TOLERANCE`] of
    /// zero anywhere in the domain; `ph` is then the boundary value
    /// [`PH_MAX`] and should be treated as low-confidence.
    pub converged: bool,
}

/// Finds the pH at which the composition's net charge is zero.
///
/// Net charge is strictly decreasing in pH (see
/// [`net_charge`](super::charge::net_charge)), so a single bracket over
/// [`PH_MIN`]..[`PH_MAX`] is bisected until either the charge falls within
/// [`CHARGE_TOLERANCE`] or the bracket narrows below [`PH_RESOLUTION`].
/// Compositions without any ionizable residue, and compositions whose charge
/// stays outside tolerance over the whole domain, report [`PH_MAX`] with
/// `converged = false` instead of failing.
///
/// Deterministic: the same composition and model always produce the same
/// result.
pub fn isoelectric_point(composition: &Composition, model: &PkModel) -> IsoelectricPoint {
    let has_ionizable = model
        .groups()
        .iter()
        .any(|g| composition.count(g.residue) > 0);
    if !has_ionizable {
        debug!("No ionizable residues present; reporting the domain boundary.");
        return IsoelectricPoint {
            ph: PH_MAX,
            converged: false,
        };
    }

    let mut low = PH_MIN;
    let mut high = PH_MAX;
    while high - low > PH_RESOLUTION {
        let mid = (low + high) / 2.0;
        let charge = net_charge(composition, model, mid);
        if charge.abs() < CHARGE_TOLERANCE {
            debug!(ph = mid, charge, "pI search converged.");
            return IsoelectricPoint {
                ph: mid,
                converged: true,
            };
        }
        if charge > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    let mid = (low + high) / 2.0;
    let charge = net_charge(composition, model, mid);
    if charge.abs() < CHARGE_TOLERANCE {
        IsoelectricPoint {
            ph: mid,
            converged: true,
        }
    } else {
        debug!(
            charge,
            "Net charge never crossed zero within tolerance; reporting the domain boundary."
        );
        IsoelectricPoint {
            ph: PH_MAX,
            converged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::Sequence;

    fn composition(raw: &str) -> Composition {
        Composition::of(&Sequence::parse(raw).unwrap())
    }

    fn solve(raw: &str) -> IsoelectricPoint {
        isoelectric_point(&composition(raw), &PkModel::default())
    }

    #[test]
    fn charge_at_returned_ph_is_within_tolerance_for_mixed_compositions() {
        let model = PkModel::default();
        for raw in ["DK", "DDKK", "DEKRHC", "FVNQHLCGSHLVEALYLVCGERGFFYTPKT"] {
            let comp = composition(raw);
            let pi = isoelectric_point(&comp, &model);
            assert!(pi.converged, "expected convergence for {}", raw);
            assert!(
                net_charge(&comp, &model, pi.ph).abs() < CHARGE_TOLERANCE,
                "residual charge too large for {}",
                raw
            );
        }
    }

    #[test]
    fn neutral_only_composition_reports_boundary_without_converging() {
        let pi = solve("GAVLIPFMSTNQWY");
        assert_eq!(pi.ph, PH_MAX);
        assert!(!pi.converged);
    }

    #[test]
    fn result_stays_inside_the_ph_domain() {
        for raw in ["D", "K", "R", "DK", "MKVLAT", "DDDDD", "KKKKK"] {
            let pi = solve(raw);
            assert!(pi.ph >= PH_MIN && pi.ph <= PH_MAX);
        }
    }

    #[test]
    fn acid_rich_composition_resolves_to_low_ph() {
        let pi = solve("DDDDD");
        assert!(pi.converged);
        assert!(pi.ph < 3.5, "poly-D pI should be acidic, got {}", pi.ph);
    }

    #[test]
    fn base_rich_composition_resolves_to_high_ph() {
        let pi = solve("KKKKKDD");
        assert!(pi.converged);
        assert!(pi.ph > 7.0, "K-rich pI should be basic, got {}", pi.ph);
    }

    #[test]
    fn net_basic_hexapeptide_resolves_above_neutral() {
        let pi = solve("MKVLAT");
        assert!(pi.ph > 7.0);
    }

    #[test]
    fn single_arginine_never_reaches_zero_charge_and_reports_boundary() {
        // One R holds a charge of ~0.03 even at pH 14 with pKa 12.5
        let pi = solve("R");
        assert_eq!(pi.ph, PH_MAX);
        assert!(!pi.converged);
    }

    #[test]
    fn search_is_deterministic() {
        let comp = composition("DEKRHC");
        let model = PkModel::default();
        let first = isoelectric_point(&comp, &model);
        let second = isoelectric_point(&comp, &model);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_model_shifts_the_result() {
        use crate::core::models::residue::AminoAcid;
        use crate::core::params::pk_model::{IonizableGroup, Polarity};

        // A one-group model puts the pI wherever that group falls to
        // tolerance, so moving the pKa must move the result.
        let comp = composition("DK");
        let default_pi = isoelectric_point(&comp, &PkModel::default());

        let shifted = PkModel::from_groups(vec![
            IonizableGroup {
                residue: AminoAcid::AsparticAcid,
                pka: 2.0,
                polarity: Polarity::Acidic,
            },
            IonizableGroup {
                residue: AminoAcid::Lysine,
                pka: 8.0,
                polarity: Polarity::Basic,
            },
        ]);
        let shifted_pi = isoelectric_point(&comp, &shifted);
        assert!(shifted_pi.converged);
        assert!(shifted_pi.ph < default_pi.ph);
    }
}
