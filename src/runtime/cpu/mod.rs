//! CPU runtime implementation
//!
//! The CPU runtime is the reference implementation of every algorithm
//! contract in [`crate::algorithm`]. Matrix products can be split across
//! threads with the `rayon` feature; everything else runs on the calling
//! thread.

mod client;
pub mod jacobi;
pub(crate) mod kernels;
mod linalg;
mod ops;

pub use client::{CpuClient, CpuClientOptions};
