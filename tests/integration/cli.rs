//! End-to-end runs of the `cramer` binary.
//!
//! Exit codes: 0 solved, 2 read but unsolvable, 1 unreadable payload.

use super::common::{MISSING_CONSTANT_PAYLOAD, TWO_BY_TWO_PAYLOAD};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const SINGULAR_PAYLOAD: &str = r#"{"coefficients": [[1, 2], [2, 4]], "constants": [1, 2]}"#;

/// Run the built binary with `stdin` piped in and colors off.
fn run_cramer(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cramer"))
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run cramer");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for cramer")
}

fn json_stdout(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn solvable_stdin_payload_exits_zero() {
    let output = run_cramer(&["solve"], TWO_BY_TWO_PAYLOAD);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Solution Found"), "{}", stdout);
    assert!(stdout.contains("3.000000"), "{}", stdout);
}

#[test]
fn solved_json_carries_the_result() {
    let output = run_cramer(&["solve", "--json"], TWO_BY_TWO_PAYLOAD);
    assert_eq!(output.status.code(), Some(0));

    let json = json_stdout(&output);
    assert_eq!(json["status"], "solved");
    assert_eq!(json["result"]["determinant"], 5.0);
    assert_eq!(json["result"]["determinantsByVariable"][1], 15.0);
}

#[test]
fn singular_json_exits_two() {
    let output = run_cramer(&["solve", "--json"], SINGULAR_PAYLOAD);
    assert_eq!(output.status.code(), Some(2));

    let json = json_stdout(&output);
    assert_eq!(json["status"], "singular");
    assert_eq!(json["determinant"], 0.0);
}

#[test]
fn blank_constant_exits_two() {
    let output = run_cramer(&["solve"], MISSING_CONSTANT_PAYLOAD);
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please fill all constant values"), "{}", stdout);
}

#[test]
fn garbage_payload_exits_one() {
    let output = run_cramer(&["solve"], "garbage");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid payload JSON"), "{}", stderr);
}

#[test]
fn payload_file_with_steps() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("system.json");
    std::fs::write(&path, TWO_BY_TWO_PAYLOAD).unwrap();

    let output = run_cramer(&["solve", "--input", path.to_str().unwrap(), "--steps"], "");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SYSTEM OF EQUATIONS:"), "{}", stdout);
    assert!(stdout.contains("VERIFICATION (AX = B):"), "{}", stdout);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loaded 2x2 system"), "{}", stderr);
}

#[test]
fn missing_input_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let output = run_cramer(&["solve", "--input", path.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn seeded_random_json_is_reproducible() {
    let args = ["random", "-n", "4", "--seed", "7", "--json"];
    let first = run_cramer(&args, "");
    let second = run_cramer(&args, "");
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);

    let json = json_stdout(&first);
    assert_eq!(json["status"], "solved");
    assert_eq!(json["system"]["coefficients"].as_array().unwrap().len(), 4);
}

#[test]
fn random_rejects_out_of_range_size() {
    let output = run_cramer(&["random", "-n", "19"], "");
    assert_eq!(output.status.code(), Some(1));
}
