use crate::core::models::residue::AminoAcid;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// How an ionizable side chain titrates with pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Deprotonates to a negative charge above its pKa (D, E).
    Acidic,
    /// Protonated to a positive charge below its pKa (K, R, H, and C when
    /// free thiols are modeled this way).
    Basic,
}

/// One ionizable side chain entry of a pKa model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonizableGroup {
    pub residue: AminoAcid,
    pub pka: f64,
    pub polarity: Polarity,
}

/// A pKa model: the set of ionizable side chains the pI solver considers.
///
/// The built-in default covers D, E, C, H, K and R. Alternative models (e.g.
/// a different literature pKa set) can be loaded from a TOML file without
/// touching the solver. Groups are held in canonical residue order so the
/// net-charge sum is deterministic regardless of file layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PkModel {
    groups: Vec<IonizableGroup>,
}

impl Default for PkModel {
    fn default() -> Self {
        Self {
            groups: vec![
                IonizableGroup {
                    residue: AminoAcid::Arginine,
                    pka: 12.5,
                    polarity: Polarity::Basic,
                },
                IonizableGroup {
                    residue: AminoAcid::AsparticAcid,
                    pka: 3.9,
                    polarity: Polarity::Acidic,
                },
                IonizableGroup {
                    residue: AminoAcid::Cysteine,
                    pka: 8.3,
                    polarity: Polarity::Basic,
                },
                IonizableGroup {
                    residue: AminoAcid::GlutamicAcid,
                    pka: 4.2,
                    polarity: Polarity::Acidic,
                },
                IonizableGroup {
                    residue: AminoAcid::Histidine,
                    pka: 6.0,
                    polarity: Polarity::Basic,
                },
                IonizableGroup {
                    residue: AminoAcid::Lysine,
                    pka: 10.5,
                    polarity: Polarity::Basic,
                },
            ],
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("'{code}' in '{path}' is not a canonical one-letter amino-acid code")]
    UnknownResidue { path: String, code: String },
    #[error("pKa model in '{path}' defines no ionizable groups")]
    EmptyModel { path: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PkModelFile {
    groups: HashMap<String, GroupSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupSpec {
    pka: f64,
    polarity: Polarity,
}

impl PkModel {
    /// Builds a model from an explicit set of groups, e.g. for testing an
    /// alternative pKa table programmatically. Groups are re-sorted into
    /// canonical residue order.
    pub fn from_groups(mut groups: Vec<IonizableGroup>) -> Self {
        groups.sort_by_key(|g| g.residue.index());
        Self { groups }
    }

    /// Loads an alternative pKa model from a TOML file of the form:
    ///
    /// ```toml
    /// [groups]
    /// D = { pka = 3.65, polarity = "acidic" }
    /// K = { pka = 10.53, polarity = "basic" }
    /// ```
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let display = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: display.clone(),
            source: e,
        })?;
        let file: PkModelFile = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: display.clone(),
            source: e,
        })?;

        if file.groups.is_empty() {
            return Err(ParamLoadError::EmptyModel { path: display });
        }

        let mut groups = Vec::with_capacity(file.groups.len());
        for (code, spec) in &file.groups {
            let mut chars = code.chars();
            let residue = match (chars.next(), chars.next()) {
                (Some(c), None) => AminoAcid::from_one_letter(c.to_ascii_uppercase()),
                _ => None,
            }
            .ok_or_else(|| ParamLoadError::UnknownResidue {
                path: display.clone(),
                code: code.clone(),
            })?;
            groups.push(IonizableGroup {
                residue,
                pka: spec.pka,
                polarity: spec.polarity,
            });
        }
        Ok(Self::from_groups(groups))
    }

    pub fn groups(&self) -> &[IonizableGroup] {
        &self.groups
    }
}
