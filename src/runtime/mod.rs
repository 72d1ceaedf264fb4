//! Runtime backends
//!
//! A backend is a client type implementing the operation and algorithm
//! traits. Only the CPU backend exists.

pub mod cpu;

pub use cpu::{CpuClient, CpuClientOptions};
