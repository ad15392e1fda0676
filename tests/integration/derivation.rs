//! The step-by-step derivation built from a solved system.

use super::common::system;
use cramer::{solve, Agreement, Derivation, SolutionResult};

#[test]
fn derivation_walks_through_every_unknown() {
    let sys = system(&[&[2.0, 1.0], &[1.0, 3.0]], &[5.0, 10.0]);
    let result = solve(&sys).unwrap();
    let derivation = Derivation::new(&sys, &result);

    assert_eq!(
        derivation.equations,
        vec!["2.00x1 + 1.00x2 = 5.00", "1.00x1 + 3.00x2 = 10.00"]
    );
    assert_eq!(derivation.variables.len(), 2);
    assert_eq!(
        derivation.variables[1].lines(derivation.determinant),
        [
            "x2 = det(A2) / det(A)".to_string(),
            "x2 = 15.000000 / 5.000000".to_string(),
            "x2 = 3.000000".to_string(),
        ]
    );
    assert!(derivation.verified());
}

#[test]
fn plain_text_layout_has_every_section_in_order() {
    let sys = system(
        &[&[2.0, -1.0, 0.0], &[-1.0, 2.0, -1.0], &[0.0, -1.0, 2.0]],
        &[1.0, 0.0, 1.0],
    );
    let text = Derivation::new(&sys, &solve(&sys).unwrap()).to_string();

    let sections = [
        "SYSTEM OF EQUATIONS:",
        "Determinant of [A] = 4.000000",
        "CALCULATING SOLUTIONS:",
        "FINAL SOLUTION:",
        "VERIFICATION (AX = B):",
    ];
    let mut cursor = 0;
    for section in sections {
        let found = text[cursor..]
            .find(section)
            .unwrap_or_else(|| panic!("missing or out of order: {}", section));
        cursor += found + section.len();
    }

    assert!(text.contains("2.00x1 - 1.00x2 + 0.00x3 = 1.00"));
    assert!(text.contains("x3 = 1.000000"));
    assert!(text.contains("0.000000 = 0.000000"));
}

#[test]
fn drifting_verification_is_marked_approximate() {
    let sys = system(&[&[2.0, 1.0], &[1.0, 3.0]], &[5.0, 10.0]);
    let result = SolutionResult {
        determinant: 5.0,
        determinants_by_variable: vec![5.0, 15.0],
        solutions: vec![1.0, 3.0],
        verification: vec![5.005, 10.5],
    };
    let derivation = Derivation::new(&sys, &result);

    let agreements: Vec<Agreement> = derivation.verification.iter().map(|r| r.agreement).collect();
    assert_eq!(agreements, vec![Agreement::Equal, Agreement::Approximate]);
    assert!(!derivation.verified());
    assert!(derivation.to_string().contains("10.500000 ≈ 10.000000"));
}
