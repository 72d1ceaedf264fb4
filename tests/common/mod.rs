//! Common test utilities
#![allow(dead_code)]

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use symsqrt::algorithm::linalg::{
    EigenDecomposition, MatrixFunctionsAlgorithms, SymmetricEigenSolver,
};
use symsqrt::dtype::LinalgElement;
use symsqrt::error::{Error, Result};
use symsqrt::matrix::Matrix;
use symsqrt::runtime::cpu::CpuClient;

/// Create a CPU client for testing
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert a square matrix equals its transpose exactly
pub fn assert_exactly_symmetric<T: LinalgElement>(m: &Matrix<T>, msg: &str) {
    assert!(m.is_square(), "{}: not square", msg);
    assert!(m.is_symmetric(0.0), "{}: not symmetric {:?}", msg, m);
}

/// Random symmetric positive-definite matrix A = M @ M^T (M entries in [-1, 1))
pub fn random_spd(n: usize, seed: u64) -> Matrix<f64> {
    random_psd_rank(n, n, seed)
}

/// Random symmetric PSD matrix of rank at most `rank`: A = M @ M^T with M n × rank
pub fn random_psd_rank(n: usize, rank: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m: Vec<f64> = (0..n * rank).map(|_| rng.random_range(-1.0..1.0)).collect();
    Matrix::from_fn(n, n, |i, j| {
        (0..rank).map(|k| m[i * rank + k] * m[j * rank + k]).sum()
    })
}

/// Convert to a nalgebra matrix
pub fn to_nalgebra<T: LinalgElement>(a: &Matrix<T>) -> DMatrix<f64> {
    let data: Vec<f64> = a.as_slice().iter().map(|v| v.to_f64()).collect();
    DMatrix::from_row_slice(a.rows(), a.cols(), &data)
}

/// Convert from a nalgebra matrix
pub fn from_nalgebra<T: LinalgElement>(m: &DMatrix<f64>) -> Matrix<T> {
    Matrix::from_fn(m.nrows(), m.ncols(), |i, j| T::from_f64(m[(i, j)]))
}

/// Principal square root computed entirely with nalgebra
pub fn nalgebra_sqrtm(a: &DMatrix<f64>) -> DMatrix<f64> {
    let eig = a.clone().symmetric_eigen();
    let roots = eig.eigenvalues.map(|l| l.max(0.0).sqrt());
    &eig.eigenvectors * DMatrix::from_diagonal(&roots) * eig.eigenvectors.transpose()
}

/// Eigen-solver backed by nalgebra, used as an independent reference
pub struct NalgebraSolver;

impl SymmetricEigenSolver for NalgebraSolver {
    fn eig_decompose_symmetric<T: LinalgElement>(
        &self,
        a: &Matrix<T>,
    ) -> Result<EigenDecomposition<T>> {
        let n = a.rows();
        let eig = to_nalgebra(a)
            .try_symmetric_eigen(f64::EPSILON, 0)
            .ok_or_else(|| Error::numerical_failure("nalgebra symmetric_eigen", "no convergence"))?;

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| eig.eigenvalues[i].total_cmp(&eig.eigenvalues[j]));

        Ok(EigenDecomposition {
            eigenvalues: order.iter().map(|&k| T::from_f64(eig.eigenvalues[k])).collect(),
            eigenvectors: Matrix::from_fn(n, n, |i, k| T::from_f64(eig.eigenvectors[(i, order[k])])),
        })
    }
}

impl MatrixFunctionsAlgorithms for NalgebraSolver {}

/// Eigen-solver that always fails, for error propagation tests
pub struct FailingSolver;

impl SymmetricEigenSolver for FailingSolver {
    fn eig_decompose_symmetric<T: LinalgElement>(
        &self,
        _a: &Matrix<T>,
    ) -> Result<EigenDecomposition<T>> {
        Err(Error::numerical_failure(
            "eig_decompose_symmetric",
            "solver gave up",
        ))
    }
}

impl MatrixFunctionsAlgorithms for FailingSolver {}

/// Eigen-solver that returns a decomposition of the wrong size
pub struct TruncatingSolver;

impl SymmetricEigenSolver for TruncatingSolver {
    fn eig_decompose_symmetric<T: LinalgElement>(
        &self,
        a: &Matrix<T>,
    ) -> Result<EigenDecomposition<T>> {
        let n = a.rows().saturating_sub(1);
        Ok(EigenDecomposition {
            eigenvalues: vec![T::one(); n],
            eigenvectors: Matrix::identity(n),
        })
    }
}

impl MatrixFunctionsAlgorithms for TruncatingSolver {}
