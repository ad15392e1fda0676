//! The input grid: `n×n` coefficient cells plus `n` constant cells.
//!
//! A worksheet is what a user edits before pressing "solve". Cells may be
//! blank or hold arbitrary text, so nothing here is validated until
//! [`Worksheet::to_system`] turns the grid into a [`LinearSystem`]. That is
//! the only place blank and non-numeric cells become `InvalidInput`, which
//! keeps the solver itself free of any notion of "missing".
//!
//! # Payload format
//!
//! ```json
//! {
//!   "coefficients": [[2, 1], [1, "3"]],
//!   "constants": [5, null]
//! }
//! ```
//!
//! Each cell is a number, a numeric string, or `null` for a blank cell.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::solver::solve;
use crate::types::{
    CellRef, InputError, LinearSystem, SolutionResult, SolveError, DEFAULT_DIMENSION,
    MAX_DIMENSION, MIN_DIMENSION, RANDOM_RANGE,
};

/// One input cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Value(f64),
    Text(String),
    #[default]
    Blank,
}

impl Cell {
    /// Parse the cell into a finite number.
    pub fn parse(&self, at: CellRef) -> Result<f64, InputError> {
        let value = match self {
            Cell::Blank => return Err(InputError::Missing(at)),
            Cell::Value(value) => *value,
            Cell::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(InputError::Missing(at));
                }
                trimmed.parse::<f64>().map_err(|_| InputError::NotNumeric {
                    cell: at,
                    text: text.clone(),
                })?
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(InputError::NonFinite(at))
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Blank => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Value(_) => false,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Value(value)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Blank, Cell::Value)
    }
}

/// Serialized worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetPayload {
    pub coefficients: Vec<Vec<Cell>>,
    pub constants: Vec<Cell>,
}

/// Editable input grid for one system.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    n: usize,
    coefficients: Vec<Cell>,
    constants: Vec<Cell>,
}

impl Default for Worksheet {
    fn default() -> Self {
        Self::blank(DEFAULT_DIMENSION)
    }
}

impl Worksheet {
    /// A blank `n×n` worksheet.
    pub fn new(n: usize) -> Result<Self, InputError> {
        check_dimension(n)?;
        Ok(Self::blank(n))
    }

    fn blank(n: usize) -> Self {
        Self {
            n,
            coefficients: vec![Cell::Blank; n * n],
            constants: vec![Cell::Blank; n],
        }
    }

    /// Build from a deserialized payload, checking its shape.
    pub fn from_payload(payload: WorksheetPayload) -> Result<Self, InputError> {
        let n = payload.coefficients.len();
        check_dimension(n)?;

        for (row, cells) in payload.coefficients.iter().enumerate() {
            if cells.len() != n {
                return Err(InputError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
        }
        if payload.constants.len() != n {
            return Err(InputError::ConstantsLength {
                len: payload.constants.len(),
                expected: n,
            });
        }

        Ok(Self {
            n,
            coefficients: payload.coefficients.into_iter().flatten().collect(),
            constants: payload.constants,
        })
    }

    /// Parse a JSON payload.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let payload: WorksheetPayload =
            serde_json::from_str(json).map_err(|e| format!("Invalid payload JSON: {}", e))?;
        Self::from_payload(payload).map_err(|e| format!("Invalid payload: {}", e))
    }

    /// Read and parse a JSON payload file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json_str(&content)
    }

    pub fn to_payload(&self) -> WorksheetPayload {
        WorksheetPayload {
            coefficients: self
                .coefficients
                .chunks(self.n)
                .map(<[Cell]>::to_vec)
                .collect(),
            constants: self.constants.clone(),
        }
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.n
    }

    pub fn coefficient(&self, row: usize, col: usize) -> &Cell {
        &self.coefficients[row * self.n + col]
    }

    pub fn constant(&self, row: usize) -> &Cell {
        &self.constants[row]
    }

    /// Set `a[row][col]`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below `dimension()`.
    pub fn set_coefficient(&mut self, row: usize, col: usize, cell: impl Into<Cell>) {
        assert!(
            row < self.n && col < self.n,
            "cell ({}, {}) outside {}x{} worksheet",
            row,
            col,
            self.n,
            self.n
        );
        self.coefficients[row * self.n + col] = cell.into();
    }

    /// Set `b[row]`.
    ///
    /// # Panics
    /// Panics if `row` is not below `dimension()`.
    pub fn set_constant(&mut self, row: usize, cell: impl Into<Cell>) {
        assert!(row < self.n, "row {} outside {}-row worksheet", row, self.n);
        self.constants[row] = cell.into();
    }

    /// Change the number of unknowns. Every cell is blanked.
    pub fn resize(&mut self, n: usize) -> Result<(), InputError> {
        check_dimension(n)?;
        *self = Self::blank(n);
        Ok(())
    }

    /// Blank every cell, keeping the size.
    pub fn clear(&mut self) {
        self.coefficients.fill(Cell::Blank);
        self.constants.fill(Cell::Blank);
    }

    /// Fill every cell with an integer drawn uniformly from `RANDOM_RANGE`.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.coefficients.iter_mut().chain(self.constants.iter_mut()) {
            *cell = Cell::Value(f64::from(rng.gen_range(RANDOM_RANGE)));
        }
    }

    /// Validate every cell and build the system.
    ///
    /// Cells are checked coefficients first, row by row, then constants. The
    /// first offending cell is reported.
    pub fn to_system(&self) -> Result<LinearSystem, SolveError> {
        let n = self.n;
        let mut coefficients = Vec::with_capacity(n * n);
        for (index, cell) in self.coefficients.iter().enumerate() {
            let at = CellRef::Coefficient {
                row: index / n,
                col: index % n,
            };
            coefficients.push(cell.parse(at)?);
        }

        let mut constants = Vec::with_capacity(n);
        for (row, cell) in self.constants.iter().enumerate() {
            constants.push(cell.parse(CellRef::Constant { row })?);
        }

        LinearSystem::from_row_major(n, coefficients, constants)
    }

    /// Validate, then solve with Cramer's Rule.
    pub fn solve(&self) -> Result<SolutionResult, SolveError> {
        solve(&self.to_system()?)
    }
}

fn check_dimension(n: usize) -> Result<(), InputError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&n) {
        Ok(())
    } else {
        Err(InputError::DimensionOutOfRange { n })
    }
}
