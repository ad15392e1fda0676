// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use cramer::{Derivation, Worksheet};

mod cli;
use cli::display;
use cli::render::{
    print_json, render_error, render_solution, render_steps, render_worksheet, Outcome,
};
use cli::{Cli, Commands};

/// Exit status when the worksheet was read but could not be solved
const EXIT_UNSOLVED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(theme) = cli.theme {
        display::set_theme(theme);
    }

    let outcome = match cli.command {
        Commands::Solve { input, json, steps } => run_solve(input.as_deref(), json, steps),
        Commands::Random {
            n,
            seed,
            json,
            steps,
        } => run_random(n, seed, json, steps),
        Commands::Shell { n, seed } => cli::shell::run(n, seed).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_UNSOLVED),
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Solve a JSON worksheet from a file, or stdin when no path is given.
///
/// Returns `Ok(false)` when the payload was valid JSON but the system has no
/// unique solution or a cell is blank or non-numeric.
fn run_solve(input: Option<&Path>, json: bool, steps: bool) -> Result<bool, String> {
    let sheet = match input {
        Some(path) => {
            let sheet = Worksheet::load(path)?;
            let n = sheet.dimension();
            eprintln!("📄 Loaded {}x{} system from {}", n, n, path.display());
            sheet
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Worksheet::from_json_str(&buffer)?
        }
    };

    report(&sheet, json, steps, false)
}

/// Fill an n×n worksheet with random integers and solve it.
fn run_random(n: usize, seed: Option<u64>, json: bool, steps: bool) -> Result<bool, String> {
    let mut sheet = Worksheet::new(n).map_err(|e| e.to_string())?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sheet.fill_random(&mut rng);

    match seed {
        Some(seed) => eprintln!("🎲 Generated {}x{} system (seed {})", n, n, seed),
        None => eprintln!("🎲 Generated {}x{} system", n, n),
    }

    report(&sheet, json, steps, true)
}

fn report(sheet: &Worksheet, json: bool, steps: bool, echo_system: bool) -> Result<bool, String> {
    let solved = sheet
        .to_system()
        .and_then(|system| cramer::solve(&system).map(|result| (system, result)));

    if json {
        let payload = echo_system.then(|| sheet.to_payload());
        let result = solved.map(|(_, result)| result);
        print_json(&Outcome::new(&result, payload))?;
        return Ok(result.is_ok());
    }

    if echo_system {
        render_worksheet(sheet);
    }
    match &solved {
        Ok((system, result)) => {
            render_solution(result);
            if steps {
                render_steps(&Derivation::new(system, result));
            }
        }
        Err(err) => render_error(err),
    }
    Ok(solved.is_ok())
}
