//! Loading worksheets from JSON payloads on disk.

use super::common::{MISSING_CONSTANT_PAYLOAD, TWO_BY_TWO_PAYLOAD};
use cramer::{CellRef, InputError, SolveError, Worksheet};
use std::fs;
use tempfile::TempDir;

fn write_payload(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write payload");
    path
}

#[test]
fn loads_and_solves_payload_file() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "system.json", TWO_BY_TWO_PAYLOAD);

    let sheet = Worksheet::load(&path).unwrap();
    assert_eq!(sheet.dimension(), 2);

    let result = sheet.solve().unwrap();
    assert!((result.solutions[0] - 1.0).abs() < 1e-12);
    assert!((result.solutions[1] - 3.0).abs() < 1e-12);
}

#[test]
fn string_cells_with_a_blank_constant() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "partial.json", MISSING_CONSTANT_PAYLOAD);

    let err = Worksheet::load(&path).unwrap().solve().unwrap_err();
    assert_eq!(
        err,
        SolveError::InvalidInput(InputError::Missing(CellRef::Constant { row: 1 }))
    );
}

#[test]
fn payload_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let original = Worksheet::from_json_str(TWO_BY_TWO_PAYLOAD).unwrap();
    let json = serde_json::to_string(&original.to_payload()).unwrap();
    let path = write_payload(&dir, "copy.json", &json);

    assert_eq!(Worksheet::load(&path).unwrap(), original);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Worksheet::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.contains("absent.json"), "unexpected message: {}", err);
}

#[test]
fn malformed_payloads_are_rejected() {
    assert!(Worksheet::from_json_str("not json")
        .unwrap_err()
        .starts_with("Invalid payload JSON:"));

    // 2 coefficient rows but 3 constants
    let ragged = r#"{"coefficients": [[1, 2], [3, 4]], "constants": [1, 2, 3]}"#;
    assert!(Worksheet::from_json_str(ragged)
        .unwrap_err()
        .starts_with("Invalid payload:"));

    // 1x1 is below the supported range
    let tiny = r#"{"coefficients": [[1]], "constants": [1]}"#;
    assert!(Worksheet::from_json_str(tiny).is_err());
}
