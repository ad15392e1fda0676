//! Runtime contracts for the solver.
//!
//! Debug-mode assertions that check the invariants the engine promises:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Describe the Cramer's Rule result exactly, not approximately
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_system_well_formed`   | square `A`, `len(B) == n`, finite entries       |
//! | `check_column_replaced`      | `A_i` differs from `A` only in column `i`       |
//! | `check_solution_consistent`  | lengths, non-singular `det(A)`, exact ratios    |
//!
//! # Usage
//!
//! ```ignore
//! use cramer::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_solution_consistent(&system, &result);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    use crate::types::{MAX_DIMENSION, MIN_DIMENSION, DEFAULT_DIMENSION};

    // INVARIANT: dimension bounds are ordered and the default lies inside them
    assert!(MIN_DIMENSION >= 2);
    assert!(MIN_DIMENSION <= DEFAULT_DIMENSION);
    assert!(DEFAULT_DIMENSION <= MAX_DIMENSION);
};

const _: () = {
    use crate::types::{SINGULAR_TOLERANCE, VERIFY_DISPLAY_TOLERANCE};

    // INVARIANT: the singular cutoff is strictly tighter than the display tolerance
    assert!(SINGULAR_TOLERANCE > 0.0);
    assert!(SINGULAR_TOLERANCE < VERIFY_DISPLAY_TOLERANCE);
};

use crate::types::{LinearSystem, SolutionResult, SINGULAR_TOLERANCE};

// ============================================================================
// SYSTEM CONTRACTS
// ============================================================================

/// Check that a system is square, has `n` constants, and holds only finite values.
///
/// # Panics (debug builds only)
/// Panics if any of the shape or finiteness properties fail.
#[inline]
pub fn check_system_well_formed(system: &LinearSystem) {
    let n = system.dimension();

    // INVARIANT: A is n×n
    debug_assert_eq!(
        system.coefficients().len(),
        n * n,
        "Contract violation: coefficients.len() {} != n*n {}",
        system.coefficients().len(),
        n * n
    );

    // INVARIANT: B has n entries
    debug_assert_eq!(
        system.constants().len(),
        n,
        "Contract violation: constants.len() {} != n {}",
        system.constants().len(),
        n
    );

    debug_assert!(
        system
            .coefficients()
            .iter()
            .chain(system.constants())
            .all(|v| v.is_finite()),
        "Contract violation: system holds a non-finite entry"
    );
}

/// Check that `replaced` is `A` with column `col` swapped for `B`.
///
/// # Panics (debug builds only)
/// Panics if any entry outside column `col` changed, or column `col` is not `B`.
#[inline]
pub fn check_column_replaced(system: &LinearSystem, replaced: &[f64], col: usize) {
    let n = system.dimension();
    debug_assert_eq!(replaced.len(), n * n);

    // INVARIANT: A_i[r][c] = if c == i { B[r] } else { A[r][c] }
    for row in 0..n {
        for c in 0..n {
            let expected = if c == col {
                system.constants()[row]
            } else {
                system.coefficient(row, c)
            };
            debug_assert!(
                replaced[row * n + c].to_bits() == expected.to_bits(),
                "Contract violation: A_{}[{}][{}] = {} but expected {}",
                col,
                row,
                c,
                replaced[row * n + c],
                expected
            );
        }
    }
}

/// Check that a result is exactly what Cramer's Rule produces from its parts.
///
/// # Panics (debug builds only)
/// Panics if lengths disagree with `n`, `det(A)` is inside the singular band,
/// or any `solutions[i]` is not bit-equal to `determinants_by_variable[i] / determinant`.
#[inline]
pub fn check_solution_consistent(system: &LinearSystem, result: &SolutionResult) {
    let n = system.dimension();

    debug_assert_eq!(result.determinants_by_variable.len(), n);
    debug_assert_eq!(result.solutions.len(), n);
    debug_assert_eq!(result.verification.len(), n);

    // INVARIANT: a result is only produced for a non-singular system
    debug_assert!(
        result.determinant.abs() >= SINGULAR_TOLERANCE,
        "Contract violation: |det(A)| {} below singular tolerance",
        result.determinant.abs()
    );

    // INVARIANT: x_i = det(A_i) / det(A), exactly
    for (i, (&det_i, &x_i)) in result
        .determinants_by_variable
        .iter()
        .zip(&result.solutions)
        .enumerate()
    {
        let ratio = det_i / result.determinant;
        debug_assert!(
            ratio.to_bits() == x_i.to_bits(),
            "Contract violation: x{} = {} but det(A{})/det(A) = {}",
            i + 1,
            x_i,
            i + 1,
            ratio
        );
    }
}
