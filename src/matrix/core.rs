//! Core Matrix type

use crate::dtype::{Element, LinalgElement};
use crate::error::{Error, Result};
use std::fmt;

/// Dense, owned matrix of `rows × cols` elements
///
/// # Layout
///
/// Storage is **row-major**: element `(i, j)` lives at `data[i * cols + j]`.
/// The shape is fixed at construction and every constructor checks that the
/// data length matches it.
#[derive(Clone, PartialEq)]
pub struct Matrix<T: Element> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Create a matrix from a row-major slice
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `rows * cols`.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    ///
    /// # Example
    ///
    /// ```
    /// use symsqrt::Matrix;
    ///
    /// let a = Matrix::from_slice(&[4.0, 2.0, 2.0, 5.0], 2, 2);
    /// assert_eq!(a.get(1, 0), 2.0);
    /// ```
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Self {
        Self::try_from_slice(data, rows, cols).expect("Matrix::from_slice failed")
    }

    /// Create a matrix from a row-major slice (fallible version)
    ///
    /// Returns `DimensionMismatch` if `data.len()` does not equal `rows * cols`.
    pub fn try_from_slice(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(data.to_vec(), rows, cols)
    }

    /// Create a matrix taking ownership of a row-major buffer
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        let expected_len = rows.checked_mul(cols).ok_or_else(|| {
            Error::invalid_argument("shape", format!("{rows} x {cols} overflows usize"))
        })?;
        if data.len() != expected_len {
            return Err(Error::DimensionMismatch {
                expected: vec![rows, cols],
                got: vec![data.len()],
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a square matrix from fixed-size rows
    ///
    /// The shape is checked at compile time.
    pub fn from_rows<const N: usize>(rows: &[[T; N]; N]) -> Self {
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self {
            data,
            rows: N,
            cols: N,
        }
    }

    /// Create a matrix by evaluating `f(i, j)` for every element
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Create an `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self::from_diag(&vec![T::one(); n])
    }

    /// Create a square diagonal matrix from its diagonal
    pub fn from_diag(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (i, &d) in diag.iter().enumerate() {
            m.data[i * n + i] = d;
        }
        m
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Returns true if the matrix has as many rows as columns
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if the matrix holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        self.data[i * self.cols + j]
    }

    /// Set element at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        self.data[i * self.cols + j] = value;
    }

    /// Row-major view of the elements
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the elements
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy of the elements in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consume the matrix, returning its row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i])
    }

    /// Overwrite this matrix with the contents of `src`
    ///
    /// Returns `DimensionMismatch` if the shapes differ; `self` is untouched
    /// in that case.
    pub fn copy_from(&mut self, src: &Self) -> Result<()> {
        if self.shape() != src.shape() {
            return Err(Error::dimension_mismatch(&self.shape(), &src.shape()));
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }
}

impl<T: LinalgElement> Matrix<T> {
    /// Largest absolute element, as f64 (0 for an empty matrix)
    pub fn max_abs(&self) -> f64 {
        self.data
            .iter()
            .map(|v| v.abs_val().to_f64())
            .fold(0.0, f64::max)
    }

    /// Largest `|A[i,j] - A[j,i]|` over the upper triangle, with its position
    ///
    /// Returns `None` for non-square or 1×1/empty matrices, which have no
    /// mirrored pairs to compare.
    pub fn max_asymmetry(&self) -> Option<(usize, usize, f64)> {
        if !self.is_square() {
            return None;
        }
        let n = self.rows;
        let mut worst: Option<(usize, usize, f64)> = None;
        for i in 0..n {
            for j in (i + 1)..n {
                let diff = (self.data[i * n + j] - self.data[j * n + i])
                    .abs_val()
                    .to_f64();
                if worst.is_none_or(|(_, _, w)| diff > w) {
                    worst = Some((i, j, diff));
                }
            }
        }
        worst
    }

    /// Returns true if the matrix is square and every mirrored pair differs
    /// by at most `tol`
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.is_square()
            && self
                .max_asymmetry()
                .is_none_or(|(_, _, diff)| diff <= tol)
    }

    /// Returns true if every element is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(LinalgElement::is_finite_val)
    }
}

impl<T: Element> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix<{}>[{} x {}] [", T::DTYPE, self.rows, self.cols)?;
        for i in 0..self.rows {
            write!(f, "  [")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", self.data[i * self.cols + j])?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}
