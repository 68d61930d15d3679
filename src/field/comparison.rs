//! Predicted/reference field pair and time-slice markers
//!
//! A [`FieldComparison`] owns the two 2-D fields being compared along
//! with their coordinate axes. Both fields are stored `[time, space]`
//! (one row per time point) and must match the axes' lengths; the
//! constructor rejects anything else so downstream code can index
//! freely.

use nalgebra::{DMatrix, DVector};

use crate::error::FigureError;

use super::axes::{SpatialAxis, TemporalAxis};

/// Exactly three indices into the temporal axis
///
/// The figure draws one vertical marker line per index on the predicted
/// heatmap and one slice panel per index. No ordering is required.
///
/// # Example
///
/// ```rust,ignore
/// use solviz_rs::field::TimeMarkers;
///
/// // Early, middle and late snapshots of a 100-step trajectory
/// let markers = TimeMarkers::new(10, 50, 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMarkers(pub [usize; 3]);

impl TimeMarkers {
    /// Build from three indices
    pub fn new(first: usize, second: usize, third: usize) -> Self {
        Self([first, second, third])
    }

    /// The three indices, in the order given
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Check every index against the temporal axis length
    pub fn validate(&self, time_len: usize) -> Result<(), FigureError> {
        for &index in &self.0 {
            if index >= time_len {
                return Err(FigureError::MarkerOutOfRange {
                    index,
                    len: time_len,
                });
            }
        }
        Ok(())
    }
}

impl From<[usize; 3]> for TimeMarkers {
    fn from(indices: [usize; 3]) -> Self {
        Self(indices)
    }
}

/// A predicted solution paired with its reference over a (time, space) grid
///
/// # Shape Convention
///
/// Both matrices are `T × X` where `T = time.len()` and
/// `X = space.len()`; row `i` is the spatial profile at `time[i]`.
///
/// # Example
///
/// ```rust,ignore
/// use solviz_rs::field::{FieldComparison, SpatialAxis, TemporalAxis};
/// use nalgebra::DMatrix;
///
/// let space = SpatialAxis::from_vec(vec![0.0, 0.5, 1.0])?;
/// let time = TemporalAxis::from_vec(vec![0.0, 1.0])?;
/// let predicted = DMatrix::from_row_slice(2, 3, &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
/// let reference = predicted.clone();
///
/// let comparison = FieldComparison::new(space, time, predicted, reference)?;
/// assert_eq!(comparison.squared_error().max(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldComparison {
    space: SpatialAxis,
    time: TemporalAxis,
    predicted: DMatrix<f64>,
    reference: DMatrix<f64>,
}

impl FieldComparison {
    /// Build a comparison, validating both fields against the axes
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::ShapeMismatch`] naming the offending field
    /// if either matrix is not `(time.len() × space.len())`.
    pub fn new(
        space: SpatialAxis,
        time: TemporalAxis,
        predicted: DMatrix<f64>,
        reference: DMatrix<f64>,
    ) -> Result<Self, FigureError> {
        check_shape("predicted", &predicted, time.len(), space.len())?;
        check_shape("reference", &reference, time.len(), space.len())?;

        Ok(Self {
            space,
            time,
            predicted,
            reference,
        })
    }

    /// Spatial axis
    pub fn space(&self) -> &SpatialAxis {
        &self.space
    }

    /// Temporal axis
    pub fn time(&self) -> &TemporalAxis {
        &self.time
    }

    /// Predicted field, `[time, space]`
    pub fn predicted(&self) -> &DMatrix<f64> {
        &self.predicted
    }

    /// Reference ("exact") field, `[time, space]`
    pub fn reference(&self) -> &DMatrix<f64> {
        &self.reference
    }

    /// Number of time points (rows)
    pub fn n_time(&self) -> usize {
        self.time.len()
    }

    /// Number of spatial points (columns)
    pub fn n_space(&self) -> usize {
        self.space.len()
    }

    /// Elementwise squared pointwise error `(predicted - reference)²`
    ///
    /// Symmetric in its two operands, so swapping the fields leaves the
    /// result unchanged.
    pub fn squared_error(&self) -> DMatrix<f64> {
        self.predicted
            .zip_map(&self.reference, |p, r| (p - r) * (p - r))
    }

    /// Predicted spatial profile at a fixed time index
    ///
    /// Callers must have validated `t_index` (compose does this through
    /// [`TimeMarkers::validate`]).
    pub fn predicted_slice(&self, t_index: usize) -> DVector<f64> {
        self.predicted.row(t_index).transpose()
    }

    /// Reference spatial profile at a fixed time index
    pub fn reference_slice(&self, t_index: usize) -> DVector<f64> {
        self.reference.row(t_index).transpose()
    }
}

fn check_shape(
    field: &'static str,
    matrix: &DMatrix<f64>,
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), FigureError> {
    if matrix.nrows() != expected_rows || matrix.ncols() != expected_cols {
        return Err(FigureError::ShapeMismatch {
            field,
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            expected_rows,
            expected_cols,
        });
    }
    Ok(())
}
