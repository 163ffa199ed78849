use crate::core::models::composition::Composition;
use crate::core::params::pk_model::{PkModel, Polarity};

/// Net charge of a composition at the given pH.
///
/// Each ionizable group contributes a pKa-centered sigmoid weighted by how
/// many copies the composition holds: an acidic group contributes
/// `−n / (1 + 10^(pKa − pH))` and a basic group `+n / (1 + 10^(pH − pKa))`.
/// Both terms decrease as pH rises, so the total is strictly decreasing in pH
/// whenever at least one ionizable residue is present.
pub fn net_charge(composition: &Composition, model: &PkModel, ph: f64) -> f64 {
    let mut charge = 0.0;
    for group in model.groups() {
        let n = composition.count(group.residue);
        if n == 0 {
            continue;
        }
        let n = n as f64;
        match group.polarity {
            Polarity::Acidic => charge -= n / (1.0 + 10f64.powf(group.pka - ph)),
            Polarity::Basic => charge += n / (1.0 + 10f64.powf(ph - group.pka)),
        }
    }
    charge
}
