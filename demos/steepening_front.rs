//! Steepening-Front Comparison Figure
//!
//! Reference: a tanh front that sharpens and moves right over time.
//! Prediction: the same front with a slightly wrong speed, so the error
//! concentrates in a narrow band around the front — a good stress test
//! for the error heatmap's scientific-notation color bar.
//!
//! ```bash
//! cargo run --example steepening_front
//! ```

use std::error::Error;

use nalgebra::DMatrix;
use solviz_rs::prelude::*;

fn front(t: f64, x: f64, speed: f64) -> f64 {
    // Sharpness grows with time: width shrinks from 0.20 to ~0.05
    let width = 0.20 / (1.0 + 3.0 * t);
    0.5 * (1.0 - ((x - 0.2 - speed * t) / width).tanh())
}

fn main() -> Result<(), Box<dyn Error>> {
    let n_time = 120;
    let n_space = 200;

    let t_values: Vec<f64> = (0..n_time)
        .map(|i| i as f64 / (n_time - 1) as f64)
        .collect();
    let x_values: Vec<f64> = (0..n_space)
        .map(|j| j as f64 / (n_space - 1) as f64)
        .collect();

    let reference =
        DMatrix::from_fn(n_time, n_space, |i, j| front(t_values[i], x_values[j], 0.50));
    // 2% speed error
    let predicted =
        DMatrix::from_fn(n_time, n_space, |i, j| front(t_values[i], x_values[j], 0.51));

    let comparison = FieldComparison::new(
        SpatialAxis::from_vec(x_values)?,
        TemporalAxis::from_vec(t_values)?,
        predicted,
        reference,
    )?;

    let mut style = FigureStyle::for_quantity("s(t,x)");
    style.colormap = Colormap::Coolwarm;

    let figure = compose(&comparison, TimeMarkers::new(10, 60, 115), &style)?;
    figure.save("steepening_front.png")?;

    println!("Comparison figure written: steepening_front.png");
    Ok(())
}
