use protparam::core::models::sequence::SequenceError;
use protparam::core::params::pk_model::ParamLoadError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("Failed to load pKa model '{path}': {source}", path = path.display())]
    PkModel {
        path: PathBuf,
        #[source]
        source: ParamLoadError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
