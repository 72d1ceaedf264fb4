//! Linear algebra algorithm contracts
//!
//! # Module Structure
//!
//! - `decompositions`: Result types (EigenDecomposition)
//! - `options`: Tolerances and iteration budgets
//! - `traits`: SymmetricEigenSolver and MatrixFunctionsAlgorithms traits
//! - `helpers`: Validation utilities
//! - `matrix_functions_core`: Shared numerical algorithms for matrix functions

pub mod decompositions;
pub mod helpers;
pub mod matrix_functions_core;
pub mod options;
pub mod traits;

pub use decompositions::*;
pub use helpers::*;
pub use options::*;
pub use traits::*;
