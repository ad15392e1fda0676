//! Step-by-step derivation of a Cramer's Rule solution.
//!
//! Pure formatting: everything here is derived from a `LinearSystem` and the
//! `SolutionResult` the solver produced for it. The terminal front end adds
//! color and boxes on top; `Derivation`'s `Display` impl is the plain-text
//! rendering used for pipes.

use std::fmt;

use crate::types::{LinearSystem, SolutionResult, VERIFY_DISPLAY_TOLERANCE};

const RULE_WIDTH: usize = 60;

/// How a verification entry compares to the original constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    /// Within `VERIFY_DISPLAY_TOLERANCE`.
    Equal,
    /// Outside the tolerance; rounding has visibly drifted.
    Approximate,
}

impl Agreement {
    pub fn between(computed: f64, expected: f64) -> Self {
        if (computed - expected).abs() < VERIFY_DISPLAY_TOLERANCE {
            Agreement::Equal
        } else {
            Agreement::Approximate
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Agreement::Equal => "=",
            Agreement::Approximate => "≈",
        }
    }
}

/// One row of `A × x` against `B`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationRow {
    pub computed: f64,
    pub expected: f64,
    pub agreement: Agreement,
}

impl fmt::Display for VerificationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} {} {:.6}",
            self.computed,
            self.agreement.symbol(),
            self.expected
        )
    }
}

/// Pair every verification value with its constant.
pub fn verification_rows(system: &LinearSystem, result: &SolutionResult) -> Vec<VerificationRow> {
    result
        .verification
        .iter()
        .zip(system.constants())
        .map(|(&computed, &expected)| VerificationRow {
            computed,
            expected,
            agreement: Agreement::between(computed, expected),
        })
        .collect()
}

/// `2.00x1 - 1.00x2 = 5.00` for one row of the system.
pub fn equation_line(system: &LinearSystem, row: usize) -> String {
    let mut line = String::new();
    for (col, &a) in system.row(row).iter().enumerate() {
        let magnitude = format!("{:.2}x{}", a.abs(), col + 1);
        match (col, a < 0.0) {
            (0, false) => line.push_str(&magnitude),
            (0, true) => {
                line.push('-');
                line.push_str(&magnitude);
            }
            (_, false) => {
                line.push_str(" + ");
                line.push_str(&magnitude);
            }
            (_, true) => {
                line.push_str(" - ");
                line.push_str(&magnitude);
            }
        }
    }
    line.push_str(&format!(" = {:.2}", system.constants()[row]));
    line
}

/// `x_i = det(A_i) / det(A)` for one unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableStep {
    /// Zero-based unknown index.
    pub index: usize,
    pub determinant: f64,
    pub value: f64,
}

impl VariableStep {
    /// Symbolic, substituted, and evaluated forms.
    pub fn lines(&self, det_a: f64) -> [String; 3] {
        let name = self.index + 1;
        [
            format!("x{} = det(A{}) / det(A)", name, name),
            format!("x{} = {:.6} / {:.6}", name, self.determinant, det_a),
            format!("x{} = {:.6}", name, self.value),
        ]
    }
}

/// The full derivation shown under "detailed solution steps".
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub equations: Vec<String>,
    pub determinant: f64,
    pub variables: Vec<VariableStep>,
    pub verification: Vec<VerificationRow>,
}

impl Derivation {
    pub fn new(system: &LinearSystem, result: &SolutionResult) -> Self {
        let equations = (0..system.dimension())
            .map(|row| equation_line(system, row))
            .collect();

        let variables = result
            .determinants_by_variable
            .iter()
            .zip(&result.solutions)
            .enumerate()
            .map(|(index, (&determinant, &value))| VariableStep {
                index,
                determinant,
                value,
            })
            .collect();

        Self {
            equations,
            determinant: result.determinant,
            variables,
            verification: verification_rows(system, result),
        }
    }

    /// True when every verification row is within the display tolerance.
    pub fn verified(&self) -> bool {
        self.verification
            .iter()
            .all(|row| row.agreement == Agreement::Equal)
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "SYSTEM OF EQUATIONS:")?;
        writeln!(f, "{}", rule)?;
        for equation in &self.equations {
            writeln!(f, "{}", equation)?;
        }
        writeln!(f)?;
        writeln!(f, "Determinant of [A] = {:.6}", self.determinant)?;
        writeln!(f, "{}", rule)?;

        writeln!(f)?;
        writeln!(f, "CALCULATING SOLUTIONS:")?;
        writeln!(f, "{}", rule)?;
        for step in &self.variables {
            writeln!(f)?;
            for line in step.lines(self.determinant) {
                writeln!(f, "{}", line)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "FINAL SOLUTION:")?;
        writeln!(f, "{}", rule)?;
        for step in &self.variables {
            writeln!(f, "x{} = {:.6}", step.index + 1, step.value)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "VERIFICATION (AX = B):")?;
        writeln!(f, "{}", rule)?;
        for row in &self.verification {
            writeln!(f, "{}", row)?;
        }
        write!(f, "{}", rule)
    }
}
