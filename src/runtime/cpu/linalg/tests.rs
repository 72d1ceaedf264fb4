//! Tests for CPU linear algebra implementations

use super::super::{CpuClient, CpuClientOptions};
use crate::algorithm::linalg::{EigenOptions, MatrixFunctionsAlgorithms, SymmetricEigenSolver};
use crate::error::Error;
use crate::matrix::Matrix;
use crate::ops::MatmulOps;
use std::sync::{Arc, Mutex};

fn create_client() -> CpuClient {
    CpuClient::new()
}

fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!((x - y).abs() < tol, "element {i}: {x} vs {y}");
    }
}

#[test]
fn test_eig_symmetric_2x2() {
    let client = create_client();

    // [[2, 1], [1, 2]] → eigenvalues 1, 3
    let a = Matrix::from_rows(&[[2.0f64, 1.0], [1.0, 2.0]]);
    let eig = client.eig_decompose_symmetric(&a).unwrap();

    assert_close(&eig.eigenvalues, &[1.0, 3.0], 1e-12);
    assert_eq!(eig.eigenvectors.shape(), [2, 2]);
}

#[test]
fn test_eig_symmetric_reconstructs_input() {
    let client = create_client();

    let a = Matrix::from_rows(&[
        [4.0f64, 1.0, -2.0, 0.5],
        [1.0, 3.0, 0.0, 1.5],
        [-2.0, 0.0, 5.0, -1.0],
        [0.5, 1.5, -1.0, 2.0],
    ]);
    let eig = client.eig_decompose_symmetric(&a).unwrap();

    // Ascending order
    for w in eig.eigenvalues.windows(2) {
        assert!(w[0] <= w[1]);
    }

    // V^T V = I
    let v = &eig.eigenvectors;
    let vtv = client.matmul(&v.transpose(), v).unwrap();
    assert_close(vtv.as_slice(), Matrix::<f64>::identity(4).as_slice(), 1e-12);

    // V diag(λ) V^T = A
    let vl = client
        .matmul(v, &Matrix::from_diag(&eig.eigenvalues))
        .unwrap();
    let rebuilt = client.matmul(&vl, &v.transpose()).unwrap();
    assert_close(rebuilt.as_slice(), a.as_slice(), 1e-12);
}

#[test]
fn test_eig_symmetric_reads_lower_triangle() {
    let client = create_client();

    let lower = Matrix::from_rows(&[[2.0f64, 99.0], [1.0, 2.0]]);
    let eig = client.eig_decompose_symmetric(&lower).unwrap();
    assert_close(&eig.eigenvalues, &[1.0, 3.0], 1e-12);
}

#[test]
fn test_eig_symmetric_trivial_sizes() {
    let client = create_client();

    let eig = client
        .eig_decompose_symmetric(&Matrix::<f64>::zeros(0, 0))
        .unwrap();
    assert!(eig.eigenvalues.is_empty());

    let eig = client
        .eig_decompose_symmetric(&Matrix::from_rows(&[[-7.0f64]]))
        .unwrap();
    assert_eq!(eig.eigenvalues, vec![-7.0]);
    assert_eq!(eig.eigenvectors, Matrix::identity(1));

    assert!(matches!(
        client.eig_decompose_symmetric(&Matrix::<f64>::zeros(2, 3)),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_eig_symmetric_sweep_budget_exhausted() {
    let options = CpuClientOptions {
        eigen: EigenOptions::default().with_max_sweeps(1),
        ..Default::default()
    };
    let client = CpuClient::with_options(options).unwrap();

    // Dense 6x6 needs more than one sweep
    let a = Matrix::from_fn(6, 6, |i, j| 1.0f64 / (1.0 + i as f64 + j as f64));
    let err = client.eig_decompose_symmetric(&a).unwrap_err();
    assert!(matches!(err, Error::NumericalFailure { .. }), "{err:?}");

    // Same failure surfaces from the square root
    let err = client.sqrt_sym_real(&a).unwrap_err();
    assert!(matches!(err, Error::NumericalFailure { .. }), "{err:?}");
}

#[test]
fn test_sqrt_sym_real_2x2() {
    let client = create_client();

    let a = Matrix::from_rows(&[[4.0f64, 2.0], [2.0, 5.0]]);
    let b = client.sqrt_sym_real(&a).unwrap();

    let squared = client.matmul(&b, &b).unwrap();
    assert_close(squared.as_slice(), a.as_slice(), 1e-12);
    assert_eq!(b.get(0, 1), b.get(1, 0));
}

#[test]
fn test_sqrt_sym_real_into_leaves_output_on_error() {
    let client = create_client();

    let a = Matrix::from_rows(&[[-5.0f64, 0.0], [0.0, 1.0]]);
    let mut out = Matrix::from_rows(&[[9.0f64, 9.0], [9.0, 9.0]]);
    let err = client.sqrt_sym_real_into(&a, &mut out).unwrap_err();

    assert!(matches!(err, Error::NotPositiveSemidefinite { .. }));
    assert_eq!(out, Matrix::from_rows(&[[9.0, 9.0], [9.0, 9.0]]));
}

#[test]
fn test_sqrt_sym_real_into_output_shape() {
    let client = create_client();

    let a = Matrix::<f64>::identity(3);
    let mut out = Matrix::zeros(2, 2);
    assert_eq!(
        client.sqrt_sym_real_into(&a, &mut out).unwrap_err(),
        Error::DimensionMismatch {
            expected: vec![3, 3],
            got: vec![2, 2],
        }
    );
}

#[test]
fn test_profile_hook_sees_both_forms() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let client =
        create_client().with_profile_hook(move |rec| sink.lock().unwrap().push(rec.clone()));

    let a = Matrix::<f64>::identity(3);
    let mut out = Matrix::zeros(3, 3);
    client.sqrt_sym_real(&a).unwrap();
    client.sqrt_sym_real_into(&a, &mut out).unwrap();
    let _ = client.sqrt_sym_real(&Matrix::from_rows(&[[-1.0f64]]));

    let seen = seen.lock().unwrap();
    let summary: Vec<_> = seen.iter().map(|r| (r.op, r.dim, r.succeeded)).collect();
    assert_eq!(
        summary,
        vec![
            ("sqrt_sym_real", 3, true),
            ("sqrt_sym_real_into", 3, true),
            ("sqrt_sym_real", 1, false),
        ]
    );
}

#[test]
fn test_custom_tolerances_are_used() {
    // 1e-6 asymmetry: rejected by default, accepted with a loose tolerance
    let a = Matrix::from_rows(&[[2.0f64, 1.0 + 1e-6], [1.0, 2.0]]);
    assert!(matches!(
        create_client().sqrt_sym_real(&a),
        Err(Error::NotSymmetric { .. })
    ));

    let mut options = CpuClientOptions::default();
    options.sqrtm.symmetry_tol = 1e-5;
    let client = CpuClient::with_options(options).unwrap();
    assert!(client.sqrt_sym_real(&a).is_ok());
}
