//! CPU implementation of linear algebra algorithms
//!
//! `CpuClient` provides the Jacobi eigen-solver and, through it, the matrix
//! functions defined by [`MatrixFunctionsAlgorithms`].

mod eig_symmetric;

#[cfg(test)]
mod tests;

use super::CpuClient;
use crate::algorithm::linalg::{
    EigenDecomposition, MatrixFunctionsAlgorithms, SqrtmOptions, SymmetricEigenSolver,
};
use crate::dtype::LinalgElement;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::profile::ProfileRecord;

impl SymmetricEigenSolver for CpuClient {
    fn eig_decompose_symmetric<T: LinalgElement>(
        &self,
        a: &Matrix<T>,
    ) -> Result<EigenDecomposition<T>> {
        eig_symmetric::eig_decompose_symmetric_impl(self, a)
    }
}

impl MatrixFunctionsAlgorithms for CpuClient {
    fn sqrtm_options(&self) -> SqrtmOptions {
        self.options().sqrtm
    }

    fn record_profile(&self, record: &ProfileRecord) {
        if let Some(hook) = self.profile_hook() {
            hook(record);
        }
    }
}
