//! Jacobi rotation utilities for the symmetric eigen-solver
//!
//! The rotation parameters use the numerically stable LAPACK formula to
//! avoid catastrophic cancellation. All matrices are row-major `n × n`.

use crate::dtype::LinalgElement;

/// Jacobi rotation parameters (cosine and sine of rotation angle).
///
/// These parameters define a Givens rotation matrix:
/// ```text
/// J = [ c  s ]
///     [-s  c ]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JacobiRotation {
    /// Cosine of rotation angle
    pub c: f64,
    /// Sine of rotation angle
    pub s: f64,
}

impl JacobiRotation {
    /// Compute Jacobi rotation parameters using numerically stable LAPACK formula.
    ///
    /// Given 2x2 symmetric submatrix elements, computes the rotation that zeroes
    /// the off-diagonal element.
    ///
    /// # Algorithm
    /// ```text
    /// τ = (a_qq - a_pp) / (2 * a_pq)
    /// t = sign(τ) / (|τ| + hypot(τ, 1))
    /// c = 1 / hypot(t, 1)
    /// s = t * c
    /// ```
    ///
    /// Only an exactly zero `a_pq` yields the identity rotation; tiny but
    /// nonzero entries are still rotated away.
    #[inline]
    pub fn compute(a_pp: f64, a_qq: f64, a_pq: f64) -> Self {
        if a_pq == 0.0 {
            return Self { c: 1.0, s: 0.0 };
        }

        let tau = (a_qq - a_pp) / (2.0 * a_pq);
        let t = if tau >= 0.0 {
            1.0 / (tau + tau.hypot(1.0))
        } else {
            -1.0 / (-tau + tau.hypot(1.0))
        };

        let c = 1.0 / t.hypot(1.0);
        let s = t * c;

        Self { c, s }
    }

    /// Returns typed rotation parameters.
    #[inline]
    pub fn typed<T: LinalgElement>(&self) -> (T, T) {
        (T::from_f64(self.c), T::from_f64(self.s))
    }
}

/// Apply Jacobi rotation to two columns of an `n × n` matrix.
///
/// Computes: `[col_p', col_q'] = [col_p, col_q] @ J`
#[inline]
pub fn apply_rotation_to_columns<T: LinalgElement>(
    data: &mut [T],
    n: usize,
    p: usize,
    q: usize,
    rot: &JacobiRotation,
) {
    let (c, s): (T, T) = rot.typed();

    for i in 0..n {
        let idx_p = i * n + p;
        let idx_q = i * n + q;
        let val_p = data[idx_p];
        let val_q = data[idx_q];

        data[idx_p] = c * val_p - s * val_q;
        data[idx_q] = s * val_p + c * val_q;
    }
}

/// Apply two-sided Jacobi rotation to a symmetric matrix.
///
/// Computes: `A' = J^T @ A @ J` which zeroes out `A[p,q]` and `A[q,p]`.
/// `a_pp`, `a_qq` and `a_pq` are the elements before the rotation.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn apply_two_sided_rotation<T: LinalgElement>(
    work: &mut [T],
    n: usize,
    p: usize,
    q: usize,
    rot: &JacobiRotation,
    a_pp: T,
    a_qq: T,
    a_pq: T,
) {
    let (c, s): (T, T) = rot.typed();

    for k in 0..n {
        if k != p && k != q {
            let a_kp = work[k * n + p];
            let a_kq = work[k * n + q];

            let new_kp = c * a_kp - s * a_kq;
            let new_kq = s * a_kp + c * a_kq;

            work[k * n + p] = new_kp;
            work[p * n + k] = new_kp;
            work[k * n + q] = new_kq;
            work[q * n + k] = new_kq;
        }
    }

    let c2 = T::from_f64(rot.c * rot.c);
    let s2 = T::from_f64(rot.s * rot.s);
    let cs2 = T::from_f64(2.0 * rot.c * rot.s);

    work[p * n + p] = c2 * a_pp - cs2 * a_pq + s2 * a_qq;
    work[q * n + q] = s2 * a_pp + cs2 * a_pq + c2 * a_qq;
    work[p * n + q] = T::zero();
    work[q * n + p] = T::zero();
}

/// Largest off-diagonal magnitude of an `n × n` symmetric matrix (upper triangle).
#[inline]
pub fn max_off_diagonal<T: LinalgElement>(work: &[T], n: usize) -> f64 {
    let mut max_off_diag = 0.0f64;
    for i in 0..n {
        for j in (i + 1)..n {
            max_off_diag = max_off_diag.max(work[i * n + j].abs_val().to_f64());
        }
    }
    max_off_diag
}

/// Frobenius norm, accumulated in f64.
///
/// Entries are divided by the largest magnitude before squaring, so the
/// result does not overflow for entries beyond `sqrt(f64::MAX)` or underflow
/// for tiny ones.
#[inline]
pub fn frobenius_norm<T: LinalgElement>(data: &[T]) -> f64 {
    let scale = data
        .iter()
        .map(|v| v.abs_val().to_f64())
        .fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let sum_sq: f64 = data
        .iter()
        .map(|v| {
            let x = v.to_f64() / scale;
            x * x
        })
        .sum();
    sum_sq.sqrt() * scale
}

/// Sort indices by value (ascending).
#[inline]
pub fn argsort_asc<T: LinalgElement>(values: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&i, &j| {
        values[i]
            .to_f64()
            .partial_cmp(&values[j].to_f64())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Reorder vector elements according to index permutation.
#[inline]
pub fn permute_vector<T: LinalgElement>(data: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&idx| data[idx]).collect()
}

/// Reorder the columns of an `n × n` matrix according to index permutation.
#[inline]
pub fn permute_columns<T: LinalgElement>(data: &[T], n: usize, indices: &[usize]) -> Vec<T> {
    let mut result = vec![T::zero(); n * n];
    for (new_idx, &old_idx) in indices.iter().enumerate() {
        for i in 0..n {
            result[i * n + new_idx] = data[i * n + old_idx];
        }
    }
    result
}

/// Initialize an identity matrix [n × n].
#[inline]
pub fn identity_matrix<T: LinalgElement>(n: usize) -> Vec<T> {
    let mut result = vec![T::zero(); n * n];
    for i in 0..n {
        result[i * n + i] = T::one();
    }
    result
}
