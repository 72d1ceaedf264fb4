//! Eigendecomposition for symmetric matrices using Jacobi algorithm

use super::super::CpuClient;
use super::super::jacobi::{
    JacobiRotation, apply_rotation_to_columns, apply_two_sided_rotation, argsort_asc,
    frobenius_norm, identity_matrix, max_off_diagonal, permute_columns, permute_vector,
};
use crate::algorithm::linalg::{EigenDecomposition, validate_square_matrix};
use crate::dtype::LinalgElement;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use tracing::{debug, trace, warn};

/// Eigendecomposition for symmetric matrices using Jacobi algorithm
///
/// Algorithm: Cyclic Jacobi Eigenvalue Algorithm
/// 1. Initialize: V = I_n (eigenvector matrix starts as identity)
/// 2. REPEAT (at most `max_sweeps` sweeps):
///    - Converged when max(|A[i,j]| for i≠j) <= n * ε * ||A||_F
///    - FOR each pair (p, q) where p < q and |A[p,q]| above that threshold:
///      a. Compute Jacobi rotation angle θ from A[p,p], A[q,q], A[p,q]
///      b. Apply rotation: A' = J^T @ A @ J (zeros out A[p,q] and A[q,p])
///      c. Update eigenvectors: V = V @ J
/// 3. eigenvalues = diag(A)
/// 4. Sort eigenvalues ascending, reorder eigenvector columns
///
/// Running out of sweeps before convergence is a `NumericalFailure`.
pub fn eig_decompose_symmetric_impl<T: LinalgElement>(
    client: &CpuClient,
    a: &Matrix<T>,
) -> Result<EigenDecomposition<T>> {
    let n = validate_square_matrix(a.shape())?;
    let max_sweeps = client.options().eigen.max_sweeps;

    if n == 0 {
        return Ok(EigenDecomposition {
            eigenvalues: Vec::new(),
            eigenvectors: Matrix::zeros(0, 0),
        });
    }

    if n == 1 {
        return Ok(EigenDecomposition {
            eigenvalues: vec![a.get(0, 0)],
            eigenvectors: Matrix::identity(1),
        });
    }

    // Symmetrize from the lower triangle: A[i,j] = A[j,i] for i > j
    let a_data = a.as_slice();
    let mut work: Vec<T> = vec![T::zero(); n * n];
    for i in 0..n {
        for j in 0..=i {
            let val = a_data[i * n + j];
            work[i * n + j] = val;
            work[j * n + i] = val;
        }
    }

    let mut v: Vec<T> = identity_matrix(n);

    // Rotations are orthogonal, so ||A||_F is invariant across sweeps
    let tol = (n as f64) * T::epsilon_val() * frobenius_norm(&work);

    let mut sweeps = 0usize;
    loop {
        let off_diag = max_off_diagonal(&work, n);
        if off_diag <= tol {
            break;
        }
        if sweeps == max_sweeps {
            warn!(n, sweeps, off_diag, tol, "Jacobi eigen-solver did not converge");
            return Err(Error::numerical_failure(
                "eig_decompose_symmetric",
                format!(
                    "Jacobi iteration did not converge in {max_sweeps} sweeps \
                     (off-diagonal {off_diag:e} > {tol:e})"
                ),
            ));
        }
        sweeps += 1;
        trace!(sweep = sweeps, off_diag, "Jacobi sweep");

        for p in 0..n {
            for q in (p + 1)..n {
                let a_pq = work[p * n + q];
                if a_pq.abs_val().to_f64() <= tol {
                    continue;
                }

                let a_pp = work[p * n + p];
                let a_qq = work[q * n + q];

                let rot = JacobiRotation::compute(a_pp.to_f64(), a_qq.to_f64(), a_pq.to_f64());
                apply_two_sided_rotation(&mut work, n, p, q, &rot, a_pp, a_qq, a_pq);
                apply_rotation_to_columns(&mut v, n, p, q, &rot);
            }
        }
    }
    debug!(n, sweeps, dtype = %T::DTYPE, "Jacobi eigen-solver converged");

    let eigenvalues: Vec<T> = (0..n).map(|i| work[i * n + i]).collect();
    let indices = argsort_asc(&eigenvalues);

    Ok(EigenDecomposition {
        eigenvalues: permute_vector(&eigenvalues, &indices),
        eigenvectors: Matrix::from_vec(permute_columns(&v, n, &indices), n, n)?,
    })
}
