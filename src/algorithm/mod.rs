//! Algorithm contracts
//!
//! Every algorithm is defined as a trait first, with its exact numerical
//! contract documented on the trait, then implemented by a client. The
//! square root is written once against the eigen-solver seam, so any
//! [`SymmetricEigenSolver`] gets [`MatrixFunctionsAlgorithms`] for free.
//!
//! # Available Algorithm Contracts
//!
//! - [`SymmetricEigenSolver`] - eigen-decomposition of real symmetric matrices
//! - [`MatrixFunctionsAlgorithms`] - principal square root of symmetric PSD matrices

pub mod linalg;

pub use linalg::{MatrixFunctionsAlgorithms, SymmetricEigenSolver};
