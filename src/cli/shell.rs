//! Interactive worksheet session.
//!
//! A line-oriented stand-in for the calculator's input grid. Rows and columns
//! are 1-based, as printed. Cells accept any text; validation happens when
//! `solve` runs, exactly like pressing the solve button on a half-filled grid.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cramer::{Cell, Derivation, LinearSystem, SolutionResult, Worksheet};

use super::display::{self, Theme};
use super::render::{render_error, render_solution, render_steps, render_worksheet};

const HELP: &str = "\
Commands (rows and columns are 1-based):
  n <N>                     resize to N variables (clears every cell)
  a <row> <col> <value>     set a coefficient
  b <row> <value>           set a constant
  row <i> <a..> = <b>       set a whole equation
  random                    fill every cell with integers in [-999, 999]
  clear                     blank every cell
  show                      print the worksheet
  solve                     solve with Cramer's Rule
  steps                     show the detailed steps of the last solution
  theme [dark|light]        switch theme (toggles without an argument)
  help                      show this message
  quit                      leave the shell
Use _ for a blank cell.";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Resize(usize),
    SetCoefficient { row: usize, col: usize, cell: Cell },
    SetConstant { row: usize, cell: Cell },
    SetRow { row: usize, coefficients: Vec<Cell>, constant: Cell },
    Random,
    Clear,
    Show,
    Solve,
    Steps,
    Theme(Option<Theme>),
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match head.to_lowercase().as_str() {
        "n" | "size" => {
            expect_args(head, &args, 1)?;
            ShellCommand::Resize(parse_count(args[0])?)
        }
        "a" => {
            expect_args(head, &args, 3)?;
            ShellCommand::SetCoefficient {
                row: parse_index(args[0])?,
                col: parse_index(args[1])?,
                cell: parse_cell(args[2]),
            }
        }
        "b" => {
            expect_args(head, &args, 2)?;
            ShellCommand::SetConstant {
                row: parse_index(args[0])?,
                cell: parse_cell(args[1]),
            }
        }
        "row" => {
            let (index, rest) = args
                .split_first()
                .ok_or_else(|| "usage: row <i> <a..> = <b>".to_string())?;
            let mut cells: Vec<Cell> = rest
                .iter()
                .filter(|token| **token != "=")
                .map(|token| parse_cell(token))
                .collect();
            let constant = cells
                .pop()
                .ok_or_else(|| "usage: row <i> <a..> = <b>".to_string())?;
            ShellCommand::SetRow {
                row: parse_index(index)?,
                coefficients: cells,
                constant,
            }
        }
        "random" | "rand" => ShellCommand::Random,
        "clear" => ShellCommand::Clear,
        "show" => ShellCommand::Show,
        "solve" => ShellCommand::Solve,
        "steps" => ShellCommand::Steps,
        "theme" => match args.as_slice() {
            [] => ShellCommand::Theme(None),
            [name] => ShellCommand::Theme(Some(
                Theme::parse(name).ok_or_else(|| format!("unknown theme '{}'", name))?,
            )),
            _ => return Err("usage: theme [dark|light]".to_string()),
        },
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Some(command))
}

fn expect_args(head: &str, args: &[&str], count: usize) -> Result<(), String> {
    if args.len() == count {
        Ok(())
    } else {
        Err(format!(
            "'{}' takes {} argument(s), got {}",
            head,
            count,
            args.len()
        ))
    }
}

fn parse_count(token: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a whole number", token))
}

/// 1-based index from the user, 0-based result
fn parse_index(token: &str) -> Result<usize, String> {
    match parse_count(token)? {
        0 => Err("rows and columns start at 1".to_string()),
        index => Ok(index - 1),
    }
}

fn parse_cell(token: &str) -> Cell {
    if token == "_" {
        Cell::Blank
    } else {
        Cell::from(token)
    }
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Worksheet plus the last successful solve.
pub struct Session<R: Rng> {
    sheet: Worksheet,
    last: Option<(LinearSystem, SolutionResult)>,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(n: usize, rng: R) -> Result<Self, String> {
        let sheet = Worksheet::new(n).map_err(|e| e.to_string())?;
        Ok(Self {
            sheet,
            last: None,
            rng,
        })
    }

    pub fn worksheet(&self) -> &Worksheet {
        &self.sheet
    }

    pub fn apply(&mut self, command: ShellCommand) -> Result<Flow, String> {
        let n = self.sheet.dimension();
        match command {
            ShellCommand::Resize(size) => {
                self.sheet.resize(size).map_err(|e| e.to_string())?;
                self.last = None;
                render_worksheet(&self.sheet);
            }
            ShellCommand::SetCoefficient { row, col, cell } => {
                check_index("row", row, n)?;
                check_index("column", col, n)?;
                self.sheet.set_coefficient(row, col, cell);
            }
            ShellCommand::SetConstant { row, cell } => {
                check_index("row", row, n)?;
                self.sheet.set_constant(row, cell);
            }
            ShellCommand::SetRow {
                row,
                coefficients,
                constant,
            } => {
                check_index("row", row, n)?;
                if coefficients.len() != n {
                    return Err(format!(
                        "row needs {} coefficients, got {}",
                        n,
                        coefficients.len()
                    ));
                }
                for (col, cell) in coefficients.into_iter().enumerate() {
                    self.sheet.set_coefficient(row, col, cell);
                }
                self.sheet.set_constant(row, constant);
            }
            ShellCommand::Random => {
                self.sheet.fill_random(&mut self.rng);
                render_worksheet(&self.sheet);
            }
            ShellCommand::Clear => {
                self.sheet.clear();
                self.last = None;
                eprintln!("✓ All inputs cleared");
            }
            ShellCommand::Show => render_worksheet(&self.sheet),
            ShellCommand::Solve => self.solve(),
            ShellCommand::Steps => {
                let (system, result) = self
                    .last
                    .as_ref()
                    .ok_or_else(|| "nothing solved yet; run 'solve' first".to_string())?;
                render_steps(&Derivation::new(system, result));
            }
            ShellCommand::Theme(choice) => {
                let theme = match choice {
                    Some(theme) => {
                        display::set_theme(theme);
                        theme
                    }
                    None => display::toggle_theme(),
                };
                eprintln!("🎨 Theme: {}", theme.name());
                if let Some((_, result)) = &self.last {
                    render_solution(result);
                }
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn solve(&mut self) {
        let outcome = self
            .sheet
            .to_system()
            .and_then(|system| cramer::solve(&system).map(|result| (system, result)));

        match outcome {
            Ok((system, result)) => {
                render_solution(&result);
                self.last = Some((system, result));
            }
            Err(err) => {
                render_error(&err);
                self.last = None;
            }
        }
    }
}

fn check_index(what: &str, index: usize, n: usize) -> Result<(), String> {
    if index < n {
        Ok(())
    } else {
        Err(format!("{} {} outside 1..={}", what, index + 1, n))
    }
}

/// Run the read-eval-print loop on stdin until EOF or `quit`.
pub fn run(n: usize, seed: Option<u64>) -> Result<(), String> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(n, rng)?;

    eprintln!("Cramer's Rule shell. Type 'help' for commands.");
    render_worksheet(session.worksheet());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("cramer> ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to write prompt: {}", e))?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;

        let outcome = parse_command(&line).and_then(|command| match command {
            Some(command) => session.apply(command),
            None => Ok(Flow::Continue),
        });
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(message) => eprintln!("⚠️  {}", message),
        }
    }
}
