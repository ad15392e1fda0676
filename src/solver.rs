//! Cramer's Rule solver.
//!
//! `x_i = det(A_i) / det(A)`, where `A_i` is `A` with column `i` replaced by
//! the constants. One determinant for `A`, then one per unknown, then a single
//! matrix-vector product for the verification vector.
//!
//! # Determinants
//!
//! nalgebra's `DMatrix::determinant` uses closed-form expansion for `n ≤ 3`
//! and LU decomposition with partial pivoting above that. Both are
//! deterministic, so identical inputs give bit-identical results.
//!
//! # Failure
//!
//! The solve stops right after `det(A)` if it is within `SINGULAR_TOLERANCE`
//! of zero. No partial result is ever returned.

use nalgebra::{DMatrix, DVector};

use crate::contracts::{check_column_replaced, check_solution_consistent, check_system_well_formed};
use crate::types::{LinearSystem, SolutionResult, SolveError, SINGULAR_TOLERANCE};

/// Solve `Ax = B` with Cramer's Rule.
///
/// Returns `SolveError::Singular` when `|det(A)| < SINGULAR_TOLERANCE`, or when
/// `det(A)` is not a number at all.
pub fn solve(system: &LinearSystem) -> Result<SolutionResult, SolveError> {
    check_system_well_formed(system);

    let a = coefficient_matrix(system);
    let b = DVector::from_column_slice(system.constants());

    let det_a = a.determinant();
    // NaN only comes out of an overflowed elimination
    if det_a.is_nan() || det_a.abs() < SINGULAR_TOLERANCE {
        return Err(SolveError::Singular { determinant: det_a });
    }

    let n = system.dimension();
    let mut determinants_by_variable = Vec::with_capacity(n);
    let mut solutions = Vec::with_capacity(n);

    for col in 0..n {
        let a_i = with_column(&a, col, &b);
        // nalgebra stores column-major; the transpose's buffer is A_i row-major
        #[cfg(debug_assertions)]
        check_column_replaced(system, a_i.transpose().as_slice(), col);
        let det_a_i = a_i.determinant();
        determinants_by_variable.push(det_a_i);
        solutions.push(det_a_i / det_a);
    }

    let verification = (&a * DVector::from_column_slice(&solutions))
        .iter()
        .copied()
        .collect();

    let result = SolutionResult {
        determinant: det_a,
        determinants_by_variable,
        solutions,
        verification,
    };
    check_solution_consistent(system, &result);
    Ok(result)
}

/// Validate raw rows and constants, then solve.
pub fn solve_rows(rows: &[Vec<f64>], constants: &[f64]) -> Result<SolutionResult, SolveError> {
    let system = LinearSystem::from_rows(rows, constants)?;
    solve(&system)
}

/// `det(A)` of a system's coefficient matrix.
pub fn determinant(system: &LinearSystem) -> f64 {
    coefficient_matrix(system).determinant()
}

/// `A` with column `col` replaced by `B`, as row-major values.
///
/// # Panics
/// Panics if `col >= system.dimension()`.
pub fn replace_column(system: &LinearSystem, col: usize) -> Vec<f64> {
    let n = system.dimension();
    assert!(col < n, "column {} out of range for {}x{} system", col, n, n);

    let mut values = system.coefficients().to_vec();
    for (row, &constant) in system.constants().iter().enumerate() {
        values[row * n + col] = constant;
    }
    check_column_replaced(system, &values, col);
    values
}

/// The system `A_i x = B`, for reproducing `det(A_i)` outside the solver.
pub fn column_replaced_system(
    system: &LinearSystem,
    col: usize,
) -> Result<LinearSystem, SolveError> {
    let values = replace_column(system, col);
    LinearSystem::from_row_major(system.dimension(), values, system.constants().to_vec())
}

fn coefficient_matrix(system: &LinearSystem) -> DMatrix<f64> {
    let n = system.dimension();
    DMatrix::from_row_slice(n, n, system.coefficients())
}

fn with_column(a: &DMatrix<f64>, col: usize, b: &DVector<f64>) -> DMatrix<f64> {
    let mut a_i = a.clone();
    a_i.set_column(col, b);
    a_i
}
