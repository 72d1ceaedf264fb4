//! Error types for symsqrt

use thiserror::Error;

/// Result type alias using symsqrt's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in symsqrt operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operand shapes do not fit the operation
    #[error("Dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Input matrix is not symmetric within tolerance
    #[error("Matrix is not symmetric: |A[{row},{col}] - A[{col},{row}]| = {diff:e} > {tol:e}")]
    NotSymmetric {
        /// Row of the worst offending pair
        row: usize,
        /// Column of the worst offending pair
        col: usize,
        /// Absolute difference between the mirrored entries
        diff: f64,
        /// Tolerance that was exceeded
        tol: f64,
    },

    /// Input matrix has an eigenvalue below the negative noise tolerance
    #[error("Matrix is not positive semidefinite: eigenvalue {eigenvalue:e} < -{tol:e}")]
    NotPositiveSemidefinite {
        /// Most negative eigenvalue found
        eigenvalue: f64,
        /// Noise tolerance below which eigenvalues are rejected
        tol: f64,
    },

    /// The underlying numerical routine did not produce a usable result
    #[error("Numerical failure in {op}: {reason}")]
    NumericalFailure {
        /// The operation that failed
        op: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a numerical failure error
    pub fn numerical_failure(op: &'static str, reason: impl Into<String>) -> Self {
        Self::NumericalFailure {
            op,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::dimension_mismatch(&[3, 3], &[3, 2]);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected [3, 3], got [3, 2]"
        );

        let err = Error::numerical_failure("eig_decompose_symmetric", "no convergence");
        assert_eq!(
            err.to_string(),
            "Numerical failure in eig_decompose_symmetric: no convergence"
        );

        let err = Error::invalid_argument("a", "empty matrix");
        assert_eq!(err.to_string(), "Invalid argument 'a': empty matrix");
    }
}
