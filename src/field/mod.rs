//! Data model for field comparisons
//!
//! This module holds the in-memory inputs of a comparison figure:
//!
//! - **axes**: the spatial and temporal coordinate axes
//! - **comparison**: the predicted/reference field pair and time markers
//!
//! # Organization
//!
//! ```text
//! field/
//! ├── mod.rs          ← This file
//! ├── axes.rs         ← SpatialAxis, TemporalAxis
//! └── comparison.rs   ← FieldComparison, TimeMarkers
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use solviz_rs::field::{FieldComparison, SpatialAxis, TemporalAxis, TimeMarkers};
//! use nalgebra::DMatrix;
//!
//! let space = SpatialAxis::from_vec(vec![0.0, 0.5, 1.0])?;
//! let time = TemporalAxis::from_vec(vec![0.0, 0.1, 0.2, 0.3])?;
//!
//! // Fields are [time, space]: 4 rows × 3 columns here
//! let comparison = FieldComparison::new(space, time, predicted, reference)?;
//! let markers = TimeMarkers::new(0, 1, 3);
//! ```
//!
//! Both fields must be `(time.len() × space.len())`; construction fails
//! otherwise. Marker indices are checked against the temporal axis when
//! the figure is composed.

pub mod axes;
pub mod comparison;

pub use axes::{SpatialAxis, TemporalAxis};
pub use comparison::{FieldComparison, TimeMarkers};
