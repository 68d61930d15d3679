//! Deterministic field fixtures for integration tests
//!
//! All fixtures are closed-form so tests can recompute expected values
//! independently of the crate under test.

use nalgebra::DMatrix;
use solviz_rs::field::{FieldComparison, SpatialAxis, TemporalAxis};

/// A damped traveling wave and a slightly perturbed "prediction"
///
/// Reference: `u(t, x) = exp(-t) · sin(π (x − t/2))` on `x, t ∈ [0, 1]`.
/// Predicted: reference plus a small smooth perturbation
/// `0.01 · cos(2π x) · t`, so the squared error grows toward late times
/// and stays well above floating-point noise.
pub fn traveling_wave(n_time: usize, n_space: usize) -> FieldComparison {
    let x_values: Vec<f64> = (0..n_space)
        .map(|j| j as f64 / (n_space - 1) as f64)
        .collect();
    let t_values: Vec<f64> = (0..n_time)
        .map(|i| i as f64 / (n_time - 1) as f64)
        .collect();

    let reference = DMatrix::from_fn(n_time, n_space, |i, j| {
        let (t, x) = (t_values[i], x_values[j]);
        (-t).exp() * (std::f64::consts::PI * (x - 0.5 * t)).sin()
    });
    let predicted = DMatrix::from_fn(n_time, n_space, |i, j| {
        let (t, x) = (t_values[i], x_values[j]);
        reference[(i, j)] + 0.01 * (2.0 * std::f64::consts::PI * x).cos() * t
    });

    let space = SpatialAxis::from_vec(x_values).unwrap();
    let time = TemporalAxis::from_vec(t_values).unwrap();
    FieldComparison::new(space, time, predicted, reference).unwrap()
}

/// Tiny 5 × 4 comparison over the quarter-step time axis
///
/// Time axis is `[0.0, 0.25, 0.5, 0.75, 1.0]`, which makes slice-title
/// expectations exact (`t = 0.25`, `t = 0.50`, ...).
pub fn small_comparison() -> FieldComparison {
    let space = SpatialAxis::from_vec(vec![0.0, 0.25, 0.75, 1.0]).unwrap();
    let time = TemporalAxis::from_vec(vec![0.0, 0.25, 0.5, 0.75, 1.0]).unwrap();

    let predicted = DMatrix::from_fn(5, 4, |i, j| 0.5 * i as f64 + 0.1 * j as f64);
    let reference = DMatrix::from_fn(5, 4, |i, j| 0.5 * i as f64 - 0.2 * j as f64);

    FieldComparison::new(space, time, predicted, reference).unwrap()
}
