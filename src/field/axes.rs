//! Coordinate axes for the (time, space) plane
//!
//! Axes are thin wrappers over `nalgebra::DVector<f64>`. A figure only
//! uses them for their minimum, maximum, elementwise values and the
//! cell edges needed to rasterize heatmaps, so that is all they expose.

use nalgebra::DVector;

use crate::error::FigureError;

/// Spatial coordinate axis (the `x` direction of the figure's heatmaps)
///
/// Values are expected to be ordered but no ordering is enforced;
/// `min()`/`max()` scan the whole axis so a descending axis still
/// produces a correct extent.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialAxis(DVector<f64>);

/// Temporal coordinate axis (the `t` direction of the figure's heatmaps)
///
/// Time markers index into this axis to select slice panels.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalAxis(DVector<f64>);

impl SpatialAxis {
    /// Create from a `DVector`; fails on an empty axis
    pub fn new(values: DVector<f64>) -> Result<Self, FigureError> {
        if values.is_empty() {
            return Err(FigureError::EmptyAxis { name: "space" });
        }
        Ok(Self(values))
    }

    /// Create from a plain `Vec`
    pub fn from_vec(values: Vec<f64>) -> Result<Self, FigureError> {
        Self::new(DVector::from_vec(values))
    }

    /// Number of spatial points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed axis; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Underlying values
    pub fn values(&self) -> &DVector<f64> {
        &self.0
    }

    /// Smallest coordinate
    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest coordinate
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Cell edges for heatmap rasterization (see [`cell_edges`])
    pub fn cell_edges(&self) -> Vec<f64> {
        cell_edges(self.0.as_slice())
    }
}

impl TemporalAxis {
    /// Create from a `DVector`; fails on an empty axis
    pub fn new(values: DVector<f64>) -> Result<Self, FigureError> {
        if values.is_empty() {
            return Err(FigureError::EmptyAxis { name: "time" });
        }
        Ok(Self(values))
    }

    /// Create from a plain `Vec`
    pub fn from_vec(values: Vec<f64>) -> Result<Self, FigureError> {
        Self::new(DVector::from_vec(values))
    }

    /// Number of time points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed axis; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Underlying values
    pub fn values(&self) -> &DVector<f64> {
        &self.0
    }

    /// Smallest coordinate
    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest coordinate
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Cell edges for heatmap rasterization (see [`cell_edges`])
    pub fn cell_edges(&self) -> Vec<f64> {
        cell_edges(self.0.as_slice())
    }
}

/// Compute `n + 1` cell edges for `n` axis values
///
/// Interior edges sit at midpoints between consecutive values; the two
/// outer edges coincide with the first and last value, so the rasterized
/// extent equals `[min, max]` exactly (matching an image drawn with an
/// explicit extent). A single-value axis degenerates to a unit-width cell
/// centred on that value.
pub fn cell_edges(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n == 1 {
        let v = values[0];
        return vec![v - 0.5, v + 0.5];
    }

    let mut edges = Vec::with_capacity(n + 1);
    edges.push(values[0]);
    for i in 1..n {
        edges.push(0.5 * (values[i - 1] + values[i]));
    }
    edges.push(values[n - 1]);
    edges
}
