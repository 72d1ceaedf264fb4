//! Decomposition result types

use crate::dtype::LinalgElement;
use crate::matrix::Matrix;

/// Symmetric eigendecomposition result: A = V @ diag(λ) @ V^T
///
/// For a real symmetric matrix A, all eigenvalues are real and eigenvectors
/// form an orthonormal basis. The decomposition satisfies:
/// - A @ V[:,i] = λ[i] * V[:,i] for each eigenpair
/// - V^T @ V = I (eigenvectors are orthonormal)
/// - A = V @ diag(λ) @ V^T
#[derive(Debug, Clone, PartialEq)]
pub struct EigenDecomposition<T: LinalgElement> {
    /// Eigenvalues λ [n] (sorted in ascending order)
    pub eigenvalues: Vec<T>,

    /// Eigenvector matrix V [n, n] where V[:,i] is the eigenvector for λ[i]
    pub eigenvectors: Matrix<T>,
}

impl<T: LinalgElement> EigenDecomposition<T> {
    /// Matrix dimension n
    pub fn dim(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Smallest eigenvalue, or `None` for an empty decomposition
    pub fn min_eigenvalue(&self) -> Option<T> {
        self.eigenvalues
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
    }

    /// Largest eigenvalue magnitude as f64 (0 for an empty decomposition)
    pub fn spectral_radius(&self) -> f64 {
        self.eigenvalues
            .iter()
            .map(|v| v.abs_val().to_f64())
            .fold(0.0, f64::max)
    }
}
