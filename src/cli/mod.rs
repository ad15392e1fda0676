// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cramer command-line interface.
//!
//! Three subcommands: `solve` reads a JSON worksheet from a file or stdin,
//! `random` generates an integer system to play with, and `shell` opens an
//! interactive session that edits a worksheet cell by cell. All of them
//! share the dark/light terminal theme selected with `--theme`.
//!
//! Exit codes: 0 when the system was solved, 2 when it has no unique
//! solution or the input is incomplete, 1 when the payload could not be
//! read at all.

pub mod display;
pub mod render;
pub mod shell;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cramer::DEFAULT_DIMENSION;
use display::Theme;

#[derive(Parser)]
#[command(
    name = "cramer",
    about = "Solve small linear systems with Cramer's Rule, step by step",
    version
)]
pub struct Cli {
    /// Color theme (defaults to CRAMER_THEME, then terminal detection)
    #[arg(long, global = true, value_enum)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve a system given as a JSON worksheet
    ///
    /// The payload is `{"coefficients": [[..], ..], "constants": [..]}`.
    /// Cells may be numbers, numeric strings, or null for blank.
    Solve {
        /// Path to the JSON payload (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the outcome as JSON instead of a formatted box
        #[arg(long)]
        json: bool,

        /// Show the detailed solution steps
        #[arg(long)]
        steps: bool,
    },

    /// Generate a random integer system in [-999, 999] and solve it
    Random {
        /// Number of variables (2-18)
        #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
        n: usize,

        /// Seed for a reproducible system
        #[arg(long)]
        seed: Option<u64>,

        /// Print the outcome as JSON instead of a formatted box
        #[arg(long)]
        json: bool,

        /// Show the detailed solution steps
        #[arg(long)]
        steps: bool,
    },

    /// Edit and solve a worksheet interactively
    Shell {
        /// Initial number of variables (2-18)
        #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
        n: usize,

        /// Seed for the `random` command
        #[arg(long)]
        seed: Option<u64>,
    },
}
