//! Dense matrix type
//!
//! This module provides [`Matrix`], an owned, row-major, two-dimensional
//! buffer of real floating point elements.

mod core;

pub use core::Matrix;
