//! Core types for linear systems, solutions, and solve failures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Smallest supported number of unknowns.
pub const MIN_DIMENSION: usize = 2;

/// Largest supported number of unknowns.
pub const MAX_DIMENSION: usize = 18;

/// Grid size a fresh worksheet starts with.
pub const DEFAULT_DIMENSION: usize = 3;

/// Absolute threshold below which `det(A)` is treated as zero.
///
/// Fixed and independent of matrix scale. Very large entries can push a
/// well-conditioned system over it and tiny entries can pull a regular one
/// under it; callers that care should rescale before solving.
pub const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Tolerance for presenting `verification[i]` as equal to `b[i]`.
pub const VERIFY_DISPLAY_TOLERANCE: f64 = 0.01;

/// Bounds for randomly generated coefficients and constants.
pub const RANDOM_RANGE: RangeInclusive<i32> = -999..=999;

/// A square system `Ax = B` with finite entries.
///
/// Coefficients are stored row-major. Construction validates the shape, so
/// holding a `LinearSystem` means `n` is in range, `A` is `n×n`, and `B` has
/// `n` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearSystem {
    n: usize,
    coefficients: Vec<f64>,
    constants: Vec<f64>,
}

impl LinearSystem {
    /// Build from matrix rows and a constant vector.
    pub fn from_rows(rows: &[Vec<f64>], constants: &[f64]) -> Result<Self, SolveError> {
        let n = rows.len();
        check_dimension(n)?;

        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(InputError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                }
                .into());
            }
        }

        let coefficients: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_row_major(n, coefficients, constants.to_vec())
    }

    /// Build from an already flattened row-major coefficient buffer.
    pub fn from_row_major(
        n: usize,
        coefficients: Vec<f64>,
        constants: Vec<f64>,
    ) -> Result<Self, SolveError> {
        check_dimension(n)?;

        if coefficients.len() != n * n {
            return Err(InputError::CoefficientCount {
                len: coefficients.len(),
                expected: n * n,
            }
            .into());
        }
        if constants.len() != n {
            return Err(InputError::ConstantsLength {
                len: constants.len(),
                expected: n,
            }
            .into());
        }

        if let Some(index) = coefficients.iter().position(|v| !v.is_finite()) {
            return Err(InputError::NonFinite(CellRef::Coefficient {
                row: index / n,
                col: index % n,
            })
            .into());
        }
        if let Some(row) = constants.iter().position(|v| !v.is_finite()) {
            return Err(InputError::NonFinite(CellRef::Constant { row }).into());
        }

        Ok(Self {
            n,
            coefficients,
            constants,
        })
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Coefficient `A[row][col]`.
    pub fn coefficient(&self, row: usize, col: usize) -> f64 {
        self.coefficients[row * self.n + col]
    }

    /// Row-major coefficient buffer.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// One row of `A`.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.coefficients[row * self.n..(row + 1) * self.n]
    }

    /// The constant vector `B`.
    pub fn constants(&self) -> &[f64] {
        &self.constants
    }
}

fn check_dimension(n: usize) -> Result<(), SolveError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&n) {
        Ok(())
    } else {
        Err(InputError::DimensionOutOfRange { n }.into())
    }
}

/// Everything a successful solve produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionResult {
    /// `det(A)`.
    pub determinant: f64,
    /// `det(A_i)` where `A_i` is `A` with column `i` replaced by `B`.
    pub determinants_by_variable: Vec<f64>,
    /// `x_i = det(A_i) / det(A)`.
    pub solutions: Vec<f64>,
    /// `A × solutions`, for cross-checking against `B`.
    pub verification: Vec<f64>,
}

/// Location of an input cell. Displayed 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRef {
    Coefficient { row: usize, col: usize },
    Constant { row: usize },
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRef::Coefficient { row, col } => write!(f, "a[{},{}]", row + 1, col + 1),
            CellRef::Constant { row } => write!(f, "b[{}]", row + 1),
        }
    }
}

/// Why an input could not be turned into a `LinearSystem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Number of unknowns outside `MIN_DIMENSION..=MAX_DIMENSION`.
    DimensionOutOfRange { n: usize },
    /// A coefficient row has the wrong number of entries.
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A flattened coefficient buffer is not `n*n` long.
    CoefficientCount { len: usize, expected: usize },
    /// The constant vector length differs from the number of rows.
    ConstantsLength { len: usize, expected: usize },
    /// A cell was left blank.
    Missing(CellRef),
    /// A cell holds text that is not a number.
    NotNumeric { cell: CellRef, text: String },
    /// A cell holds NaN or an infinity.
    NonFinite(CellRef),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::DimensionOutOfRange { n } => write!(
                f,
                "number of variables {} outside {}..={}",
                n, MIN_DIMENSION, MAX_DIMENSION
            ),
            InputError::NotSquare { row, len, expected } => write!(
                f,
                "coefficient row {} has {} entries, expected {}",
                row + 1,
                len,
                expected
            ),
            InputError::CoefficientCount { len, expected } => {
                write!(f, "{} coefficients given, expected {}", len, expected)
            }
            InputError::ConstantsLength { len, expected } => {
                write!(f, "{} constants given, expected {}", len, expected)
            }
            InputError::Missing(cell) => write!(f, "{} is blank", cell),
            InputError::NotNumeric { cell, text } => {
                write!(f, "{} is not a number: '{}'", cell, text)
            }
            InputError::NonFinite(cell) => write!(f, "{} is not finite", cell),
        }
    }
}

impl std::error::Error for InputError {}

/// A failed solve. The only two ways the engine can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// `|det(A)| < SINGULAR_TOLERANCE`: no unique solution.
    Singular { determinant: f64 },
    /// The input is incomplete, non-numeric, or misshapen.
    InvalidInput(InputError),
}

impl SolveError {
    pub fn is_singular(&self) -> bool {
        matches!(self, SolveError::Singular { .. })
    }
}

impl From<InputError> for SolveError {
    fn from(err: InputError) -> Self {
        SolveError::InvalidInput(err)
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Singular { determinant } => write!(
                f,
                "system has no unique solution (det(A) = {:e})",
                determinant
            ),
            SolveError::InvalidInput(err) => write!(f, "invalid input: {}", err),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::InvalidInput(err) => Some(err),
            SolveError::Singular { .. } => None,
        }
    }
}
