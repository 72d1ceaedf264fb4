//! Matrix function operations (principal square root)
//!
//! For a symmetric matrix `A = V @ diag(λ) @ V^T` and a scalar function `f`,
//! the matrix function is `f(A) = V @ diag(f(λ)) @ V^T`.

use super::SymmetricEigenSolver;
use crate::algorithm::linalg::{
    SqrtmOptions, matrix_functions_core, validate_output_shape, validate_square_matrix,
};
use crate::dtype::LinalgElement;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::profile::ProfileRecord;
use std::time::Instant;

/// Trait for matrix function operations on symmetric matrices
///
/// Implemented once on top of [`SymmetricEigenSolver`]: a solver opts in
/// with an empty `impl` and may override [`sqrtm_options`](Self::sqrtm_options)
/// and [`record_profile`](Self::record_profile).
pub trait MatrixFunctionsAlgorithms: SymmetricEigenSolver {
    /// Tolerances used by the square root (default: [`SqrtmOptions::default`])
    fn sqrtm_options(&self) -> SqrtmOptions {
        SqrtmOptions::default()
    }

    /// Receives one record per matrix function call (default: ignored)
    fn record_profile(&self, record: &ProfileRecord) {
        let _ = record;
    }

    /// Principal square root of a real symmetric positive-semidefinite matrix
    ///
    /// Algorithm:
    /// ```text
    /// 1. A = V @ diag(λ) @ V^T             (symmetric eigen-decomposition)
    /// 2. λ_i < -tol        → NotPositiveSemidefinite
    ///    -tol <= λ_i < 0   → λ_i = 0       (rounding noise)
    /// 3. B = V @ diag(√λ) @ V^T, mirrored so B[i,j] == B[j,i] exactly
    /// ```
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `a` is not square
    /// - `InvalidArgument` if `a` is empty or has non-finite entries
    /// - `NotSymmetric` if `a` is not symmetric within tolerance
    /// - `NotPositiveSemidefinite` if an eigenvalue is significantly negative
    /// - `NumericalFailure` if the eigen-solver fails
    fn sqrt_sym_real<T: LinalgElement>(&self, a: &Matrix<T>) -> Result<Matrix<T>> {
        let start = Instant::now();
        let result = matrix_functions_core::sqrt_sym_real(self, a, &self.sqrtm_options());
        self.record_profile(&ProfileRecord::new(
            "sqrt_sym_real",
            a.rows(),
            start.elapsed(),
            result.is_ok(),
        ));
        result
    }

    /// Principal square root written into a caller-supplied matrix
    ///
    /// Produces exactly the same values as [`sqrt_sym_real`](Self::sqrt_sym_real).
    /// `out` must be `n × n`, otherwise `DimensionMismatch`. On any error
    /// `out` is left untouched.
    fn sqrt_sym_real_into<T: LinalgElement>(&self, a: &Matrix<T>, out: &mut Matrix<T>) -> Result<()> {
        let start = Instant::now();
        let result = validate_square_matrix(a.shape())
            .and_then(|n| validate_output_shape(out, n))
            .and_then(|()| matrix_functions_core::sqrt_sym_real(self, a, &self.sqrtm_options()))
            .and_then(|b| out.copy_from(&b));
        self.record_profile(&ProfileRecord::new(
            "sqrt_sym_real_into",
            a.rows(),
            start.elapsed(),
            result.is_ok(),
        ));
        result
    }
}
