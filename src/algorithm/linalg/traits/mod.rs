//! Linear algebra algorithm trait definitions

mod eigen;
mod matrix_functions;

pub use eigen::SymmetricEigenSolver;
pub use matrix_functions::MatrixFunctionsAlgorithms;
