//! Cramer's Rule solver for small dense linear systems.
//!
//! This crate solves `Ax = B` for `2 ≤ n ≤ 18` unknowns by computing one
//! determinant per unknown, and exposes every intermediate value so a front
//! end can show the derivation step by step.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ worksheet.rs │────▶│   types.rs   │────▶│  solver.rs  │
//! │ (cells, JSON,│     │(LinearSystem,│     │   (solve)   │
//! │  randomize)  │     │  SolveError) │     │             │
//! └──────────────┘     └──────────────┘     └─────────────┘
//!                                                  │
//!        ┌─────────────────────────────────────────┤
//!        ▼                                         ▼
//! ┌─────────────────────┐            ┌──────────────────────────┐
//! │      report.rs      │            │       contracts.rs       │
//! │ (Derivation, =/≈)   │            │ (debug-build invariants) │
//! └─────────────────────┘            └──────────────────────────┘
//! ```
//!
//! The solver is a pure function: no logging, no hidden state, and identical
//! inputs give bit-identical outputs. Blank or non-numeric input is caught by
//! the worksheet before a determinant is ever computed.
//!
//! # Usage
//!
//! ```
//! use cramer::{solve_rows, SolveError};
//!
//! let result = solve_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]], &[5.0, 10.0]).unwrap();
//! assert!((result.determinant - 5.0).abs() < 1e-12);
//! assert!((result.solutions[1] - 3.0).abs() < 1e-12);
//!
//! let singular = solve_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]], &[1.0, 2.0]);
//! assert!(matches!(singular, Err(SolveError::Singular { .. })));
//! ```

// Module declarations
pub mod contracts;
mod report;
mod solver;
#[doc(hidden)]
pub mod testing;
mod types;
mod worksheet;

// Re-exports for public API
pub use report::{
    equation_line, verification_rows, Agreement, Derivation, VariableStep, VerificationRow,
};
pub use solver::{column_replaced_system, determinant, replace_column, solve, solve_rows};
pub use types::{
    CellRef, InputError, LinearSystem, SolutionResult, SolveError, DEFAULT_DIMENSION,
    MAX_DIMENSION, MIN_DIMENSION, RANDOM_RANGE, SINGULAR_TOLERANCE, VERIFY_DISPLAY_TOLERANCE,
};
pub use worksheet::{Cell, Worksheet, WorksheetPayload};
