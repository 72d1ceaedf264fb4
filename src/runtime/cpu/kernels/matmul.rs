//! Matrix multiplication kernels

use crate::dtype::Element;
use crate::ops::MatmulParams;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Matrix multiplication: C = A @ B
///
/// # Arguments
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `out` - Output matrix C (m × n), row-major; overwritten
#[inline]
pub fn matmul_kernel<T: Element>(a: &[T], b: &[T], out: &mut [T], params: MatmulParams) {
    let MatmulParams { m, k, n } = params;
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    if n == 0 {
        return;
    }
    for (i, row) in out.chunks_mut(n).enumerate() {
        matmul_row(&a[i * k..(i + 1) * k], b, row, n);
    }
}

/// Row-parallel matrix multiplication: C = A @ B
///
/// Each rayon task owns a disjoint band of output rows, so the result is
/// identical to [`matmul_kernel`].
#[cfg(feature = "rayon")]
pub fn matmul_kernel_parallel<T: Element>(
    a: &[T],
    b: &[T],
    out: &mut [T],
    params: MatmulParams,
    min_len: usize,
) {
    let MatmulParams { k, n, .. } = params;
    if n == 0 {
        return;
    }
    out.par_chunks_mut(n)
        .enumerate()
        .with_min_len(min_len)
        .for_each(|(i, row)| matmul_row(&a[i * k..(i + 1) * k], b, row, n));
}

/// One output row: row = a_row @ B
///
/// ikj order: streams through rows of B for cache locality.
#[inline]
fn matmul_row<T: Element>(a_row: &[T], b: &[T], row: &mut [T], n: usize) {
    row.fill(T::zero());
    for (kk, &a_val) in a_row.iter().enumerate() {
        let b_row = &b[kk * n..(kk + 1) * n];
        for (o, &b_val) in row.iter_mut().zip(b_row) {
            *o = *o + a_val * b_val;
        }
    }
}
