//! Tolerances and iteration budgets for the linear algebra algorithms

use crate::error::{Error, Result};

/// Default absolute tolerance for symmetry and eigenvalue-sign checks
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default sweep budget for the Jacobi eigen-solver
pub const DEFAULT_MAX_SWEEPS: usize = 30;

/// Configuration options for the symmetric square root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtmOptions {
    /// Symmetry tolerance (default: 1e-10)
    ///
    /// Input is rejected when `|A[i,j] - A[j,i]| > symmetry_tol * max(1, max|A|)`.
    pub symmetry_tol: f64,

    /// Eigenvalue noise tolerance (default: 1e-10)
    ///
    /// Eigenvalues below `-eigen_tol * max|λ|` reject the input as not
    /// positive semidefinite. Eigenvalues in `[-tol, 0)` are clamped to 0.
    pub eigen_tol: f64,
}

impl Default for SqrtmOptions {
    fn default() -> Self {
        Self {
            symmetry_tol: DEFAULT_TOLERANCE,
            eigen_tol: DEFAULT_TOLERANCE,
        }
    }
}

impl SqrtmOptions {
    /// Set the symmetry tolerance
    pub fn with_symmetry_tol(mut self, tol: f64) -> Self {
        self.symmetry_tol = tol;
        self
    }

    /// Set the eigenvalue noise tolerance
    pub fn with_eigen_tol(mut self, tol: f64) -> Self {
        self.eigen_tol = tol;
        self
    }

    /// Check that both tolerances are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        validate_tolerance("symmetry_tol", self.symmetry_tol)?;
        validate_tolerance("eigen_tol", self.eigen_tol)
    }
}

/// Configuration options for the Jacobi eigen-solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EigenOptions {
    /// Maximum number of full Jacobi sweeps (default: 30)
    ///
    /// Each sweep visits every off-diagonal pair once. Symmetric matrices of
    /// moderate size converge in well under ten sweeps.
    pub max_sweeps: usize,
}

impl Default for EigenOptions {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

impl EigenOptions {
    /// Set the sweep budget
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Check that at least one sweep is allowed
    pub fn validate(&self) -> Result<()> {
        if self.max_sweeps == 0 {
            return Err(Error::invalid_argument(
                "max_sweeps",
                "at least one sweep is required",
            ));
        }
        Ok(())
    }
}

fn validate_tolerance(arg: &'static str, tol: f64) -> Result<()> {
    if !tol.is_finite() || tol < 0.0 {
        return Err(Error::invalid_argument(
            arg,
            format!("tolerance must be finite and non-negative, got {tol}"),
        ));
    }
    Ok(())
}
