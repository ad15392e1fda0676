//! Terminal rendering of worksheets, solutions, and failures.

use serde::Serialize;

use cramer::{
    Agreement, Cell, CellRef, Derivation, InputError, SolutionResult, SolveError, Worksheet,
    WorksheetPayload,
};

use super::display::{
    agreement_symbol, double_divider, double_footer, double_header, highlight, muted, pad_left,
    pad_right, row, row_double, section_bot, section_mid, section_top, themed, use_colors,
    value, variable, BLUE, BOLD, GREEN, RED,
};

/// Width of one cell in the worksheet grid
const CELL_WIDTH: usize = 9;

/// What the user should be told about a failed solve.
pub fn error_message(err: &SolveError) -> String {
    match err {
        SolveError::Singular { .. } => "System has no unique solution (det(A) ≈ 0)".to_string(),
        SolveError::InvalidInput(input @ InputError::Missing(CellRef::Coefficient { .. })) => {
            format!("Please fill all coefficient values ({})", input)
        }
        SolveError::InvalidInput(input @ InputError::Missing(CellRef::Constant { .. })) => {
            format!("Please fill all constant values ({})", input)
        }
        SolveError::InvalidInput(input) => format!("Invalid input: {}", input),
    }
}

/// ╔═ ✓ Solution Found ═╗ box with det(A) and every unknown
pub fn render_solution(result: &SolutionResult) {
    double_header(GREEN);
    row_double(GREEN, &format!(" {}", themed(GREEN, &[BOLD], "✓ Solution Found")));
    row_double(
        GREEN,
        &format!(" {}", muted(&format!("det(A) = {:.6}", result.determinant))),
    );
    double_divider(GREEN);
    for (i, &x) in result.solutions.iter().enumerate() {
        let name = pad_right(&variable(i), 4);
        row_double(GREEN, &format!("  {} = {}", name, value(x)));
    }
    double_footer(GREEN);
}

/// ╔═ ✗ Error ═╗ box
pub fn render_error(err: &SolveError) {
    double_header(RED);
    row_double(RED, &format!(" {}", themed(RED, &[BOLD], "✗ Error")));
    row_double(RED, &format!(" {}", error_message(err)));
    double_footer(RED);
}

/// Detailed steps: equations, determinants, final solution, verification.
///
/// Falls back to the plain-text derivation when colors are off.
pub fn render_steps(derivation: &Derivation) {
    if !use_colors() {
        println!("{}", derivation);
        return;
    }

    section_top("SYSTEM OF EQUATIONS");
    for equation in &derivation.equations {
        row(&format!(" {}", equation));
    }
    row("");
    row(&format!(
        " Determinant of [A] = {}",
        highlight(&format!("{:.6}", derivation.determinant))
    ));

    section_mid("CALCULATING SOLUTIONS");
    for step in &derivation.variables {
        let [symbolic, substituted, evaluated] = step.lines(derivation.determinant);
        row(&format!(" {}", symbolic));
        row(&format!(" {}", muted(&substituted)));
        row(&format!(" {}", highlight(&evaluated)));
        row("");
    }

    section_mid("FINAL SOLUTION");
    for step in &derivation.variables {
        row(&format!(
            " {}",
            highlight(&format!("x{} = {:.6}", step.index + 1, step.value))
        ));
    }

    section_mid("VERIFICATION (AX = B)");
    for check in &derivation.verification {
        let symbol = agreement_symbol(
            check.agreement.symbol(),
            check.agreement == Agreement::Equal,
        );
        row(&format!(
            " {} {} {:.6}",
            pad_left(&format!("{:.6}", check.computed), 16),
            symbol,
            check.expected
        ));
    }
    section_bot();
}

/// The input grid, blanks shown as `·`
pub fn render_worksheet(sheet: &Worksheet) {
    let n = sheet.dimension();
    section_top(&format!("WORKSHEET {}x{}", n, n));
    for r in 0..n {
        let mut line = String::from(" ");
        for c in 0..n {
            line.push_str(&grid_cell(sheet.coefficient(r, c)));
        }
        line.push_str(&themed(BLUE, &[BOLD], " │ "));
        line.push_str(&grid_cell(sheet.constant(r)));
        row(&line);
    }
    section_bot();
}

fn grid_cell(cell: &Cell) -> String {
    let text = match cell {
        Cell::Blank => muted("·"),
        Cell::Value(v) => format_number(*v),
        Cell::Text(t) if t.trim().is_empty() => muted("·"),
        Cell::Text(t) => t.trim().to_string(),
    };
    pad_left(&text, CELL_WIDTH)
}

/// Integers without a fraction, everything else to two decimals
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

/// Machine-readable outcome for `--json`.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome<'a> {
    #[serde(rename_all = "camelCase")]
    Solved {
        #[serde(skip_serializing_if = "Option::is_none")]
        system: Option<WorksheetPayload>,
        result: &'a SolutionResult,
    },
    #[serde(rename_all = "camelCase")]
    Singular {
        #[serde(skip_serializing_if = "Option::is_none")]
        system: Option<WorksheetPayload>,
        determinant: f64,
    },
    #[serde(rename_all = "camelCase")]
    InvalidInput { message: String },
}

impl<'a> Outcome<'a> {
    pub fn new(
        outcome: &'a Result<SolutionResult, SolveError>,
        system: Option<WorksheetPayload>,
    ) -> Self {
        match outcome {
            Ok(result) => Outcome::Solved { system, result },
            Err(SolveError::Singular { determinant }) => Outcome::Singular {
                system,
                determinant: *determinant,
            },
            Err(err @ SolveError::InvalidInput(_)) => Outcome::InvalidInput {
                message: err.to_string(),
            },
        }
    }
}

pub fn print_json(outcome: &Outcome<'_>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(outcome)
        .map_err(|e| format!("Failed to serialize result: {}", e))?;
    println!("{}", json);
    Ok(())
}
