//! CPU compute kernels
//!
//! Kernels operate on row-major slices and never allocate their outputs.

pub mod matmul;
