//! Matrix multiplication helpers
//!
//! Shape validation shared by every `MatmulOps` implementation.

use crate::error::{Error, Result};

/// Matrix multiplication parameters: C`[M,N]` = A`[M,K]` @ B`[K,N]`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatmulParams {
    /// Number of rows in A (M)
    pub m: usize,
    /// Number of columns in A / rows in B (K)
    pub k: usize,
    /// Number of columns in B (N)
    pub n: usize,
}

impl MatmulParams {
    /// Create params for standard matmul
    pub fn new(m: usize, k: usize, n: usize) -> Self {
        Self { m, k, n }
    }

    /// Derive params from operand shapes, checking inner dimensions agree
    pub fn from_shapes(a: [usize; 2], b: [usize; 2]) -> Result<Self> {
        let [m, k] = a;
        let [kb, n] = b;
        if k != kb {
            return Err(Error::DimensionMismatch {
                expected: vec![k, n],
                got: b.to_vec(),
            });
        }
        Ok(Self::new(m, k, n))
    }

    /// Output shape `[M, N]`
    pub fn output_shape(&self) -> [usize; 2] {
        [self.m, self.n]
    }
}
