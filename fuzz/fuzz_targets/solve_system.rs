// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the solver on arbitrary finite systems.
//!
//! The solver must never panic on a well-formed system, however badly
//! conditioned: it returns a solution or `Singular`, nothing else.

#![no_main]

use arbitrary::Arbitrary;
use cramer::{
    solve, LinearSystem, SolveError, MAX_DIMENSION, MIN_DIMENSION, SINGULAR_TOLERANCE,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    size: u8,
    values: Vec<f64>,
}

fuzz_target!(|input: Input| {
    let n = MIN_DIMENSION + input.size as usize % (MAX_DIMENSION - MIN_DIMENSION + 1);
    if input.values.len() < n * n + n {
        return;
    }
    let coefficients = input.values[..n * n].to_vec();
    let constants = input.values[n * n..n * n + n].to_vec();

    // Property 1: non-finite values are rejected at construction
    let system = match LinearSystem::from_row_major(n, coefficients, constants) {
        Ok(system) => system,
        Err(err) => {
            assert!(!err.is_singular(), "construction cannot report singular");
            return;
        }
    };

    match solve(&system) {
        // Property 2: one value per unknown, det(A) past the cutoff
        Ok(result) => {
            assert_eq!(result.solutions.len(), n);
            assert_eq!(result.determinants_by_variable.len(), n);
            assert_eq!(result.verification.len(), n);
            assert!(result.determinant.abs() >= SINGULAR_TOLERANCE);
        }
        // Property 3: singular means |det(A)| under the cutoff, or NaN from overflow
        Err(SolveError::Singular { determinant }) => {
            assert!(determinant.is_nan() || determinant.abs() < SINGULAR_TOLERANCE);
        }
        Err(SolveError::InvalidInput(err)) => {
            panic!("validated system rejected by solver: {}", err);
        }
    }
});
