pub mod composition;
pub mod residue;
pub mod sequence;
