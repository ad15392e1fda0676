//! Differential testing: compare the engine against the cofactor oracles.
//!
//! If they disagree beyond rounding, the oracle is right.

use super::oracles::{oracle_determinant, oracle_solve};
use super::{hadamard_bound, integer_system};
use cramer::{determinant, solve, LinearSystem};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Closed-form determinants (n ≤ 3) match the oracle exactly.
    #[test]
    fn diff_small_determinants_exact((n, a, b) in integer_system(2..=3, -50..=50)) {
        let oracle = oracle_determinant(n, &a);
        let sys = LinearSystem::from_row_major(n, a, b).unwrap();
        prop_assert_eq!(determinant(&sys), oracle);
    }

    /// LU determinants (n ≥ 4) match the oracle up to rounding.
    #[test]
    fn diff_lu_determinants((n, a, b) in integer_system(4..=6, -9..=9)) {
        let oracle = oracle_determinant(n, &a);
        let bound = hadamard_bound(n, &a).max(1.0);
        let sys = LinearSystem::from_row_major(n, a, b).unwrap();
        let engine = determinant(&sys);

        prop_assert!(
            (engine - oracle).abs() <= 1e-10 * bound,
            "det {} vs oracle {} (bound {})",
            engine,
            oracle,
            bound
        );
    }

    /// Nonsingular systems solve to the oracle's solution.
    #[test]
    fn diff_solutions((n, a, b) in integer_system(2..=5, -9..=9)) {
        let oracle = oracle_solve(n, &a, &b);
        prop_assume!(oracle.is_some());
        let oracle = oracle.unwrap();

        let sys = LinearSystem::from_row_major(n, a, b).unwrap();
        let result = solve(&sys).unwrap();

        for (x, expected) in result.solutions.iter().zip(&oracle) {
            prop_assert!(
                (x - expected).abs() <= 1e-6 * (1.0 + expected.abs()),
                "x = {} vs oracle {}",
                x,
                expected
            );
        }
    }

    /// An exactly singular integer matrix is always reported singular.
    #[test]
    fn diff_singular_agrees((n, a, b) in integer_system(2..=3, -2..=2)) {
        let oracle = oracle_determinant(n, &a);
        let sys = LinearSystem::from_row_major(n, a, b).unwrap();
        prop_assert_eq!(solve(&sys).is_err(), oracle == 0.0);
    }
}
