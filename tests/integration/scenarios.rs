//! Reference systems with known answers.

use super::common::{assert_reproduces_constants, assert_solution, system};
use cramer::{solve, CellRef, InputError, SolveError, Worksheet, MAX_DIMENSION};

// ============================================================================
// SOLVABLE SYSTEMS
// ============================================================================

#[test]
fn two_variables() {
    let sys = system(&[&[2.0, 1.0], &[1.0, 3.0]], &[5.0, 10.0]);
    let result = solve(&sys).unwrap();

    assert!((result.determinant - 5.0).abs() < 1e-12);
    assert_solution(&result, &[1.0, 3.0], 1e-12);
    assert_reproduces_constants(&sys, &result, 1e-12);
}

#[test]
fn three_variable_tridiagonal() {
    let sys = system(
        &[&[2.0, -1.0, 0.0], &[-1.0, 2.0, -1.0], &[0.0, -1.0, 2.0]],
        &[1.0, 0.0, 1.0],
    );
    let result = solve(&sys).unwrap();

    assert!((result.determinant - 4.0).abs() < 1e-12);
    assert_solution(&result, &[1.0, 1.0, 1.0], 1e-12);
    assert_reproduces_constants(&sys, &result, 1e-12);
}

#[test]
fn largest_supported_system() {
    // Tridiagonal [-1, 4, -1] with B chosen so every unknown is 1
    let n = MAX_DIMENSION;
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = vec![0.0; n];
        row[i] = 4.0;
        if i > 0 {
            row[i - 1] = -1.0;
        }
        if i + 1 < n {
            row[i + 1] = -1.0;
        }
        rows.push(row);
    }
    let b: Vec<f64> = rows.iter().map(|row| row.iter().sum()).collect();

    let result = cramer::solve_rows(&rows, &b).unwrap();
    assert_solution(&result, &vec![1.0; n], 1e-9);
    assert_eq!(result.determinants_by_variable.len(), n);
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn dependent_rows_have_no_unique_solution() {
    let sys = system(
        &[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[7.0, 8.0, 9.0]],
        &[1.0, 1.0, 1.0],
    );
    match solve(&sys) {
        Err(SolveError::Singular { determinant }) => assert_eq!(determinant, 0.0),
        other => panic!("expected Singular, got {:?}", other),
    }
}

#[test]
fn blank_cell_is_reported_before_solving() {
    let mut sheet = Worksheet::new(2).unwrap();
    sheet.set_coefficient(0, 0, 2.0);
    sheet.set_coefficient(0, 1, 1.0);
    sheet.set_coefficient(1, 0, 1.0);
    sheet.set_coefficient(1, 1, 3.0);
    sheet.set_constant(0, 5.0);

    let err = sheet.solve().unwrap_err();
    assert_eq!(
        err,
        SolveError::InvalidInput(InputError::Missing(CellRef::Constant { row: 1 }))
    );
}

#[test]
fn non_numeric_cell_is_reported_with_its_text() {
    let mut sheet = Worksheet::new(2).unwrap();
    for r in 0..2 {
        for c in 0..2 {
            sheet.set_coefficient(r, c, 1.0);
        }
        sheet.set_constant(r, 1.0);
    }
    sheet.set_coefficient(1, 0, "abc");

    match sheet.solve() {
        Err(SolveError::InvalidInput(InputError::NotNumeric { cell, text })) => {
            assert_eq!(cell, CellRef::Coefficient { row: 1, col: 0 });
            assert_eq!(text, "abc");
        }
        other => panic!("expected NotNumeric, got {:?}", other),
    }
}
