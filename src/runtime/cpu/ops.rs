//! MatmulOps implementation for CpuClient

use super::CpuClient;
use super::kernels::matmul;
use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::{MatmulOps, MatmulParams};

impl MatmulOps for CpuClient {
    fn matmul<T: Element>(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        let params = MatmulParams::from_shapes(a.shape(), b.shape())?;
        let [m, n] = params.output_shape();
        let mut out = vec![T::zero(); m * n];

        #[cfg(feature = "rayon")]
        {
            if m >= self.options().parallel_min_rows {
                matmul::matmul_kernel_parallel(
                    a.as_slice(),
                    b.as_slice(),
                    &mut out,
                    params,
                    self.options().rayon_min_len,
                );
                return Matrix::from_vec(out, m, n);
            }
        }

        matmul::matmul_kernel(a.as_slice(), b.as_slice(), &mut out, params);
        Matrix::from_vec(out, m, n)
    }
}
