//! Helper functions for integration tests

use nalgebra::DMatrix;

/// Largest absolute elementwise difference between two matrices
pub fn max_abs_diff(a: &DMatrix<f64>, b: &DMatrix<f64>) -> f64 {
    assert_eq!(a.shape(), b.shape(), "shape mismatch in max_abs_diff");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Assert that two matrices agree elementwise within a tolerance
pub fn assert_matrices_close(a: &DMatrix<f64>, b: &DMatrix<f64>, tolerance: f64, message: &str) {
    let diff = max_abs_diff(a, b);
    assert!(
        diff <= tolerance,
        "{}: max difference {} exceeds tolerance {}",
        message,
        diff,
        tolerance
    );
}

/// Assert that a panel's stored curve equals an expected profile exactly
///
/// Slice panels must carry the field rows unchanged in value, so this
/// uses exact equality rather than a tolerance.
pub fn assert_slices_equal(actual: &[f64], expected: &[f64], message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: length mismatch", message);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(a, e, "{}: element {} differs", message, i);
    }
}
