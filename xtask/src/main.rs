//! Custom cargo commands for the cramer crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// `INVARIANT:` markers in src/contracts.rs: two compile-time, five runtime
const MIN_INVARIANT_MARKERS: usize = 7;

/// Fuzz targets declared in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["solve_system", "worksheet_payload"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(env::args().nth(2).as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + debug/release tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run fuzz targets for 60s each (needs cargo-fuzz and nightly)
            Pass a seconds value to change the budget: cargo xtask fuzz 300
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Cramer's Rule Solver: Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/4] Checking contract INVARIANT markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Tests with contracts enabled
    println!("[2/4] Running Rust tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Release tests, where contracts compile away
    println!("[3/4] Running Rust tests (release, contracts off)...");
    run_cargo(&["test", "--release", "--quiet"])?;
    println!("✓ Release tests passed\n");

    // Step 4: Clippy
    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSolver contracts, tests, and lints are clean.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target for a fixed time budget
fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(s) => s
            .parse()
            .with_context(|| format!("Invalid fuzz budget '{}'", s))?,
        None => 60,
    };
    let fuzz_dir = project_root()?.join("fuzz");
    let budget = format!("-max_total_time={}", seconds);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &budget])
            .current_dir(&fuzz_dir)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;

        if !status.success() {
            bail!("fuzz target {} found a failure", target);
        }
    }

    println!("\n✓ No fuzz failures in {}s per target", seconds);
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every contract in src/ must still carry its `INVARIANT:` comment
fn check_invariant_markers() -> Result<()> {
    let src_dir = project_root()?.join("src");

    let output = Command::new("grep")
        .args(["-r", "-c", "INVARIANT:", "--include=*.rs", "."])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = count_markers(&String::from_utf8_lossy(&output.stdout));

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Found {} INVARIANT markers in src/, expected {}. A solver contract lost its marker.",
            count,
            MIN_INVARIANT_MARKERS
        );
    }
    println!("  {} markers", count);

    Ok(())
}

/// Sum the per-file counts from `grep -c` output ("path:count" lines)
fn count_markers(grep_output: &str) -> usize {
    grep_output
        .lines()
        .filter_map(|line| line.rsplit(':').next())
        .filter_map(|n| n.trim().parse::<usize>().ok())
        .sum()
}
