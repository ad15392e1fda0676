//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::LinearSystem;

/// Build a system from row literals.
///
/// # Panics
/// Panics if the rows do not form a valid system; test inputs are expected to.
pub fn system(rows: &[&[f64]], constants: &[f64]) -> LinearSystem {
    let rows: Vec<Vec<f64>> = rows.iter().map(|row| row.to_vec()).collect();
    LinearSystem::from_rows(&rows, constants).expect("test system must be well formed")
}

/// `[[2,1],[1,3]] x = [5,10]`, solution `[1, 3]`, `det(A) = 5`.
pub fn two_by_two() -> LinearSystem {
    system(&[&[2.0, 1.0], &[1.0, 3.0]], &[5.0, 10.0])
}

/// Second row is twice the first, so `det(A) = 0`.
pub fn dependent_three_by_three() -> LinearSystem {
    system(
        &[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[7.0, 8.0, 9.0]],
        &[6.0, 12.0, 24.0],
    )
}

/// Tridiagonal `[2,-1,0; -1,2,-1; 0,-1,2]`, solution `[1, 1, 1]`, `det(A) = 4`.
pub fn tridiagonal_three_by_three() -> LinearSystem {
    system(
        &[&[2.0, -1.0, 0.0], &[-1.0, 2.0, -1.0], &[0.0, -1.0, 2.0]],
        &[1.0, 0.0, 1.0],
    )
}

/// `n×n` identity with `B = [1, 2, ..., n]`.
pub fn identity(n: usize) -> LinearSystem {
    let mut coefficients = vec![0.0; n * n];
    for i in 0..n {
        coefficients[i * n + i] = 1.0;
    }
    let constants = (1..=n).map(|v| v as f64).collect();
    LinearSystem::from_row_major(n, coefficients, constants)
        .expect("identity system must be well formed")
}

/// Check two vectors agree elementwise within `tol`.
pub fn approx_eq(actual: &[f64], expected: &[f64], tol: f64) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, e)| (a - e).abs() <= tol)
}
