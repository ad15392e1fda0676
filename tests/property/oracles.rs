//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations: slow, but with every integer
//! intermediate exactly representable for the inputs the strategies produce.

/// Determinant by cofactor expansion along the first row.
///
/// O(n!) and exact for integer matrices whose minors stay below 2^53.
pub fn oracle_determinant(n: usize, a: &[f64]) -> f64 {
    match n {
        0 => 1.0,
        1 => a[0],
        _ => {
            let mut det = 0.0;
            for col in 0..n {
                let cofactor = a[col] * oracle_determinant(n - 1, &minor(n, a, col));
                if col % 2 == 0 {
                    det += cofactor;
                } else {
                    det -= cofactor;
                }
            }
            det
        }
    }
}

/// Drop row 0 and column `skip`.
fn minor(n: usize, a: &[f64], skip: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for row in 1..n {
        for col in 0..n {
            if col != skip {
                out.push(a[row * n + col]);
            }
        }
    }
    out
}

/// Cramer's Rule with oracle determinants. `None` when `det(A) == 0`.
pub fn oracle_solve(n: usize, a: &[f64], b: &[f64]) -> Option<Vec<f64>> {
    let det_a = oracle_determinant(n, a);
    if det_a == 0.0 {
        return None;
    }
    let solutions = (0..n)
        .map(|col| {
            let mut a_i = a.to_vec();
            for (row, &value) in b.iter().enumerate() {
                a_i[row * n + col] = value;
            }
            oracle_determinant(n, &a_i) / det_a
        })
        .collect();
    Some(solutions)
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[test]
fn oracle_determinant_known_values() {
    assert_eq!(oracle_determinant(2, &[2.0, 1.0, 1.0, 3.0]), 5.0);
    assert_eq!(
        oracle_determinant(3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]),
        4.0
    );
    assert_eq!(
        oracle_determinant(3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 7.0, 8.0, 9.0]),
        0.0
    );
}

#[test]
fn oracle_solve_known_values() {
    assert_eq!(
        oracle_solve(2, &[2.0, 1.0, 1.0, 3.0], &[5.0, 10.0]),
        Some(vec![1.0, 3.0])
    );
    assert_eq!(oracle_solve(2, &[1.0, 2.0, 2.0, 4.0], &[1.0, 2.0]), None);
}
