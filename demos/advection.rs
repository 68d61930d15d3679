//! Advection-Diffusion Comparison Figure
//!
//! u(t,x) = exp(-κπ²t) · sin(π(x − ct))
//!
//! Builds the exact solution of a periodic advection-diffusion problem
//! and a synthetic "prediction" carrying a smooth, slowly growing bias,
//! then composes the six-panel comparison figure and writes it as PNG
//! and SVG.
//!
//! ```bash
//! cargo run --example advection
//! ```

use std::error::Error;
use std::f64::consts::PI;

use nalgebra::DMatrix;
use solviz_rs::prelude::*;

/// Exact solution of u_t + c·u_x = κ·u_xx with a sine initial profile
fn exact(t: f64, x: f64, c: f64, kappa: f64) -> f64 {
    (-kappa * PI * PI * t).exp() * (PI * (x - c * t)).sin()
}

fn main() -> Result<(), Box<dyn Error>> {
    let n_time = 100;
    let n_space = 256;
    let (c, kappa) = (0.5, 0.05);

    let t_values: Vec<f64> = (0..n_time)
        .map(|i| i as f64 / (n_time - 1) as f64)
        .collect();
    let x_values: Vec<f64> = (0..n_space)
        .map(|j| -1.0 + 2.0 * j as f64 / (n_space - 1) as f64)
        .collect();

    let reference = DMatrix::from_fn(n_time, n_space, |i, j| {
        exact(t_values[i], x_values[j], c, kappa)
    });

    // A "prediction" that drifts away from the exact solution over time,
    // the way a surrogate model trained on early snapshots would
    let predicted = DMatrix::from_fn(n_time, n_space, |i, j| {
        let (t, x) = (t_values[i], x_values[j]);
        reference[(i, j)] + 0.02 * t * (2.0 * PI * x).sin()
    });

    let comparison = FieldComparison::new(
        SpatialAxis::from_vec(x_values)?,
        TemporalAxis::from_vec(t_values)?,
        predicted,
        reference,
    )?;

    let mut style = FigureStyle::for_quantity("u(t,x)");
    style.colormap = "rainbow".parse()?;

    // Early, middle and late snapshots
    let markers = TimeMarkers::new(15, 50, 95);

    let figure = compose(&comparison, markers, &style)?;
    figure.save("advection_comparison.png")?;
    figure.save("advection_comparison.svg")?;

    println!("Comparison figure written:");
    println!("  advection_comparison.png");
    println!("  advection_comparison.svg");
    println!(
        "Grid: {} time × {} space, markers at t = {:.2}, {:.2}, {:.2}",
        comparison.n_time(),
        comparison.n_space(),
        comparison.time().values()[15],
        comparison.time().values()[50],
        comparison.time().values()[95],
    );

    Ok(())
}
