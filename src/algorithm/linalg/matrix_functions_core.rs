//! Core numerical algorithms for matrix functions
//!
//! Pure functions shared by every [`SymmetricEigenSolver`]: the solver only
//! supplies the decomposition, everything else (validation, the eigenvalue
//! sign policy and reconstruction) lives here so all solvers agree on it.

use super::{
    EigenDecomposition, SqrtmOptions, SymmetricEigenSolver, effective_tolerance, validate_finite,
    validate_nonempty, validate_square_matrix, validate_symmetric,
};
use crate::dtype::LinalgElement;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use tracing::debug;

/// Principal square root of a symmetric PSD matrix via `solver`
pub fn sqrt_sym_real<T, S>(solver: &S, a: &Matrix<T>, options: &SqrtmOptions) -> Result<Matrix<T>>
where
    T: LinalgElement,
    S: SymmetricEigenSolver + ?Sized,
{
    options.validate()?;
    let n = validate_square_matrix(a.shape())?;
    validate_nonempty(n, "a")?;
    validate_finite(a, "a")?;
    validate_symmetric(a, options.symmetry_tol)?;

    let max_abs = a.max_abs();
    if max_abs == 0.0 {
        return Ok(Matrix::zeros(n, n));
    }

    // Decompose A / 4^k with max entry in [1, 4); sqrt(A) = 2^k sqrt(A / 4^k)
    let root_scale = PowerOfTwoScale::for_magnitude(max_abs);
    let normalized = root_scale.normalize(a);

    let eig = solver.eig_decompose_symmetric(&normalized)?;
    validate_decomposition(&eig, n)?;

    let roots = sqrt_eigenvalues(&eig.eigenvalues, options.eigen_tol).map_err(|err| match err {
        Error::NotPositiveSemidefinite { eigenvalue, tol } => Error::NotPositiveSemidefinite {
            eigenvalue: root_scale.restore_square(eigenvalue),
            tol: root_scale.restore_square(tol),
        },
        other => other,
    })?;
    let roots: Vec<T> = roots
        .iter()
        .map(|r| T::from_f64(root_scale.restore(r.to_f64())))
        .collect();
    Ok(spectral_reconstruct(&eig.eigenvectors, &roots))
}

/// Exact power-of-two rescaling `A = 4^k · A'`
///
/// Keeps the eigen-solver in a well-scaled range for entries near the
/// overflow or underflow limits. Multiplying by powers of two is exact, so
/// matrices with entries of moderate size (`k = 0`) pass through unchanged.
#[derive(Debug, Clone, Copy)]
struct PowerOfTwoScale {
    k: i32,
}

impl PowerOfTwoScale {
    fn for_magnitude(max_abs: f64) -> Self {
        Self {
            k: (max_abs.log2() / 2.0).floor() as i32,
        }
    }

    /// `A / 4^k`, applied as two multiplications by `2^-k` so that neither
    /// factor leaves the f64 range
    fn normalize<T: LinalgElement>(&self, a: &Matrix<T>) -> Matrix<T> {
        if self.k == 0 {
            return a.clone();
        }
        let step = 2f64.powi(-self.k);
        Matrix::from_fn(a.rows(), a.cols(), |i, j| {
            T::from_f64(a.get(i, j).to_f64() * step * step)
        })
    }

    /// Multiply a square root by `2^k`
    fn restore(&self, root: f64) -> f64 {
        root * 2f64.powi(self.k)
    }

    /// Multiply an eigenvalue-sized quantity by `4^k`
    fn restore_square(&self, value: f64) -> f64 {
        self.restore(self.restore(value))
    }
}

/// Square roots of eigenvalues under the PSD sign policy
///
/// Eigenvalues below `-tol` (see [`effective_tolerance`], scaled by the
/// largest eigenvalue magnitude) fail with `NotPositiveSemidefinite`; those in
/// `[-tol, 0)` are treated as zero.
pub fn sqrt_eigenvalues<T: LinalgElement>(eigenvalues: &[T], eigen_tol: f64) -> Result<Vec<T>> {
    let scale = eigenvalues
        .iter()
        .map(|v| v.abs_val().to_f64())
        .fold(0.0, f64::max);
    let tol = effective_tolerance::<T>(eigen_tol, eigenvalues.len(), scale);

    let min = eigenvalues
        .iter()
        .map(|v| v.to_f64())
        .fold(f64::INFINITY, f64::min);
    if min < -tol {
        return Err(Error::NotPositiveSemidefinite {
            eigenvalue: min,
            tol,
        });
    }

    let mut clamped = 0usize;
    let roots: Vec<T> = eigenvalues
        .iter()
        .map(|&v| {
            if v < T::zero() {
                clamped += 1;
                T::zero()
            } else {
                v.sqrt_val()
            }
        })
        .collect();

    if clamped > 0 {
        debug!(clamped, min_eigenvalue = min, tol, "clamped negative eigenvalue noise to zero");
    }
    Ok(roots)
}

/// Reconstruct `V @ diag(d) @ V^T`
///
/// Only the upper triangle is accumulated; the lower triangle is mirrored,
/// so the result is exactly symmetric.
pub fn spectral_reconstruct<T: LinalgElement>(v: &Matrix<T>, d: &[T]) -> Matrix<T> {
    let n = d.len();
    let vd = v.as_slice();

    // W = V @ diag(d)
    let mut w = vec![T::zero(); n * n];
    for i in 0..n {
        for k in 0..n {
            w[i * n + k] = vd[i * n + k] * d[k];
        }
    }

    let mut out = vec![T::zero(); n * n];
    for i in 0..n {
        for j in i..n {
            let mut sum = T::zero();
            for k in 0..n {
                sum = sum + w[i * n + k] * vd[j * n + k];
            }
            out[i * n + j] = sum;
            out[j * n + i] = sum;
        }
    }

    Matrix::from_fn(n, n, |i, j| out[i * n + j])
}

/// Reject decompositions a solver should never return
fn validate_decomposition<T: LinalgElement>(eig: &EigenDecomposition<T>, n: usize) -> Result<()> {
    if eig.eigenvalues.len() != n || eig.eigenvectors.shape() != [n, n] {
        return Err(Error::numerical_failure(
            "eig_decompose_symmetric",
            format!(
                "solver returned {} eigenvalues and a {:?} eigenvector matrix for n = {n}",
                eig.eigenvalues.len(),
                eig.eigenvectors.shape()
            ),
        ));
    }
    if !eig.eigenvalues.iter().all(LinalgElement::is_finite_val) || !eig.eigenvectors.is_finite() {
        return Err(Error::numerical_failure(
            "eig_decompose_symmetric",
            "solver returned non-finite values",
        ));
    }
    Ok(())
}
