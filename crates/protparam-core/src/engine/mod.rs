pub mod charge;
pub mod solver;
