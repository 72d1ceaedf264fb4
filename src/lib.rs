//! # symsqrt
//!
//! **Principal square root of real symmetric positive-semidefinite matrices.**
//!
//! Given a real symmetric matrix `A`, symsqrt computes the unique symmetric
//! positive-semidefinite `B` with `B @ B = A`, via the eigen-decomposition
//! `A = V @ diag(λ) @ V^T`:
//!
//! ```text
//! B = V @ diag(√λ) @ V^T
//! ```
//!
//! Eigenvalues within a small tolerance below zero are treated as rounding
//! noise and clamped; anything more negative is reported as
//! [`Error::NotPositiveSemidefinite`].
//!
//! ## Quick Start
//!
//! ```
//! use symsqrt::prelude::*;
//!
//! let a: Matrix<f64> = Matrix::from_rows(&[[4.0, 2.0], [2.0, 5.0]]);
//!
//! // Return-value form
//! let b = symsqrt::sqrt_sym_real(&a)?;
//!
//! // Output-parameter form
//! let mut c = Matrix::zeros(2, 2);
//! symsqrt::sqrt_sym_real_into(&a, &mut c)?;
//! assert_eq!(b, c);
//!
//! let client = CpuClient::new();
//! let squared = client.matmul(&b, &b)?;
//! assert!((squared.get(0, 1) - 2.0).abs() < 1e-10);
//! # Ok::<(), symsqrt::Error>(())
//! ```
//!
//! ## Layout
//!
//! [`Matrix`] is dense and **row-major**: element `(i, j)` is stored at
//! `i * cols + j`.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded matrix products for large matrices

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod profile;
pub mod runtime;

pub use algorithm::linalg::EigenDecomposition;
pub use error::{Error, Result};
pub use matrix::Matrix;

use algorithm::MatrixFunctionsAlgorithms;
use dtype::LinalgElement;
use runtime::cpu::CpuClient;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::linalg::{
        EigenDecomposition, EigenOptions, MatrixFunctionsAlgorithms, SqrtmOptions,
        SymmetricEigenSolver,
    };
    pub use crate::dtype::{DType, Element, LinalgElement};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::ops::MatmulOps;
    pub use crate::profile::ProfileRecord;
    pub use crate::runtime::cpu::{CpuClient, CpuClientOptions};
}

/// Principal square root of a symmetric PSD matrix, using a default [`CpuClient`]
///
/// See [`MatrixFunctionsAlgorithms::sqrt_sym_real`].
pub fn sqrt_sym_real<T: LinalgElement>(a: &Matrix<T>) -> Result<Matrix<T>> {
    CpuClient::new().sqrt_sym_real(a)
}

/// Principal square root written into `out`, using a default [`CpuClient`]
///
/// See [`MatrixFunctionsAlgorithms::sqrt_sym_real_into`].
pub fn sqrt_sym_real_into<T: LinalgElement>(a: &Matrix<T>, out: &mut Matrix<T>) -> Result<()> {
    CpuClient::new().sqrt_sym_real_into(a, out)
}
