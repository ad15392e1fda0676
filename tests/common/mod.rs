//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cramer::{LinearSystem, SolutionResult};

// Re-export canonical test utilities from cramer::testing
pub use cramer::testing::{approx_eq, system};

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `A·x` reproduces `B` to within `tolerance` of each constant's scale.
pub fn assert_reproduces_constants(sys: &LinearSystem, result: &SolutionResult, tolerance: f64) {
    assert_eq!(result.verification.len(), sys.dimension());
    for (i, (computed, expected)) in result.verification.iter().zip(sys.constants()).enumerate() {
        let scale = 1.0 + expected.abs();
        assert!(
            (computed - expected).abs() <= tolerance * scale,
            "row {}: A·x = {} but b = {}",
            i + 1,
            computed,
            expected
        );
    }
}

/// Assert the solution vector matches `expected` element-wise.
pub fn assert_solution(result: &SolutionResult, expected: &[f64], tolerance: f64) {
    assert!(
        approx_eq(&result.solutions, expected, tolerance),
        "solutions {:?} differ from {:?} (tolerance {})",
        result.solutions,
        expected,
        tolerance
    );
}

// ============================================================================
// FIXTURES
// ============================================================================

/// The worksheet payload the calculator would submit for a 2×2 system.
pub const TWO_BY_TWO_PAYLOAD: &str = r#"{
    "coefficients": [[2, 1], [1, 3]],
    "constants": [5, 10]
}"#;

/// A payload whose second constant was left empty.
pub const MISSING_CONSTANT_PAYLOAD: &str = r#"{
    "coefficients": [["2", "1"], ["1", "3"]],
    "constants": ["5", ""]
}"#;
