//! Helper functions for linear algebra operations
//!
//! Validation utilities shared by every algorithm implementation.

use crate::dtype::LinalgElement;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate matrix is square, returning its dimension
pub fn validate_square_matrix(shape: [usize; 2]) -> Result<usize> {
    let [m, n] = shape;
    if m != n {
        return Err(Error::DimensionMismatch {
            expected: vec![m, m],
            got: vec![m, n],
        });
    }
    Ok(n)
}

/// Validate matrix has at least one row
pub fn validate_nonempty(n: usize, arg: &'static str) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid_argument(
            arg,
            "matrix must be at least 1 x 1",
        ));
    }
    Ok(())
}

/// Validate every element is finite
pub fn validate_finite<T: LinalgElement>(a: &Matrix<T>, arg: &'static str) -> Result<()> {
    if !a.is_finite() {
        return Err(Error::invalid_argument(
            arg,
            "matrix contains NaN or infinite entries",
        ));
    }
    Ok(())
}

/// Validate a square matrix is symmetric within `tol * max(1, max|A|)`
///
/// The error names the worst offending pair.
pub fn validate_symmetric<T: LinalgElement>(a: &Matrix<T>, tol: f64) -> Result<()> {
    let tol = effective_tolerance::<T>(tol, 1, a.max_abs());
    match a.max_asymmetry() {
        Some((row, col, diff)) if diff > tol => Err(Error::NotSymmetric {
            row,
            col,
            diff,
            tol,
        }),
        _ => Ok(()),
    }
}

/// Validate an output buffer is `n × n`
pub fn validate_output_shape<T: LinalgElement>(out: &Matrix<T>, n: usize) -> Result<()> {
    if out.shape() != [n, n] {
        return Err(Error::dimension_mismatch(&[n, n], &out.shape()));
    }
    Ok(())
}

/// Absolute tolerance used for a comparison at magnitude `scale`
///
/// The requested tolerance is floored at `n * ε` of the element type, so an
/// f32 computation is never held to f64 accuracy, then scaled by
/// `max(1, scale)`.
#[inline]
pub fn effective_tolerance<T: LinalgElement>(tol: f64, n: usize, scale: f64) -> f64 {
    let floor = n.max(1) as f64 * T::epsilon_val();
    tol.max(floor) * scale.max(1.0)
}
