//! Symmetric eigen-decomposition contract

use crate::algorithm::linalg::EigenDecomposition;
use crate::dtype::LinalgElement;
use crate::error::Result;
use crate::matrix::Matrix;

/// Eigen-decomposition of real symmetric matrices
///
/// This is the seam where a LAPACK-style `syev` routine plugs in. The
/// built-in implementation on [`CpuClient`](crate::runtime::cpu::CpuClient)
/// is a cyclic Jacobi iteration; any other solver only has to honor the
/// contract below to be usable by [`MatrixFunctionsAlgorithms`].
///
/// # Contract
///
/// - Input is square; only its lower triangle is read.
/// - `eigenvalues` has length n, sorted ascending.
/// - `eigenvectors` is n × n with orthonormal columns, column `k` pairing
///   with `eigenvalues[k]`.
/// - A solver that cannot reach its accuracy target returns
///   `NumericalFailure` rather than an approximate answer.
///
/// [`MatrixFunctionsAlgorithms`]: crate::algorithm::MatrixFunctionsAlgorithms
pub trait SymmetricEigenSolver {
    /// Compute A = V @ diag(λ) @ V^T
    fn eig_decompose_symmetric<T: LinalgElement>(
        &self,
        a: &Matrix<T>,
    ) -> Result<EigenDecomposition<T>>;
}
