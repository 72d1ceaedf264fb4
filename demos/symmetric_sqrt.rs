//! Principal square root of a symmetric positive-semidefinite matrix
//!
//! Run with `RUST_LOG=symsqrt=debug cargo run --example symmetric_sqrt` to see
//! the eigen-solver's convergence events.

use symsqrt::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CpuClient::new().with_profile_hook(|record| println!("profile: {record}"));

    let a = Matrix::from_rows(&[
        [1.0, -1.0, 0.0, 0.0],
        [-1.0, 2.0, -1.0, 0.0],
        [0.0, -1.0, 2.0, -1.0],
        [0.0, 0.0, -1.0, 1.0],
    ]);

    let b = client.sqrt_sym_real(&a)?;
    println!("A = {a:?}");
    println!("sqrt(A) = {b:?}");

    let mut c = Matrix::zeros(4, 4);
    client.sqrt_sym_real_into(&a, &mut c)?;
    println!("output form identical: {}", b == c);

    let squared = client.matmul(&b, &b)?;
    let max_err = squared
        .as_slice()
        .iter()
        .zip(a.as_slice())
        .map(|(x, y): (&f64, &f64)| (x - y).abs())
        .fold(0.0, f64::max);
    println!("max |B @ B - A| = {max_err:e}");

    match client.sqrt_sym_real(&Matrix::from_diag(&[-5.0, 1.0])) {
        Err(err) => println!("diag(-5, 1): {err}"),
        Ok(_) => println!("diag(-5, 1): unexpectedly succeeded"),
    }

    Ok(())
}
