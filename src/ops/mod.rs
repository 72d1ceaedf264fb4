//! Matrix operations
//!
//! Operations are defined as traits implemented by a client type, so the
//! client can carry configuration (parallelism thresholds, tolerances) into
//! every call.
//!
//! ```text
//! CpuClient
//!   └── implements MatmulOps
//!         └── matmul   (dense matrix product)
//! ```

mod matmul;
mod traits;

pub use matmul::MatmulParams;
pub use traits::MatmulOps;
