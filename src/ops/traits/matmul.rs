//! Matrix multiplication operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::Matrix;

/// Matrix multiplication operations
pub trait MatmulOps {
    /// Matrix multiplication: a @ b
    ///
    /// Returns `DimensionMismatch` when `a.cols() != b.rows()`.
    fn matmul<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>>;
}
