//! Operation traits

mod matmul;

pub use matmul::MatmulOps;
