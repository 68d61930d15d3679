//! Error types for figure composition and rendering
//!
//! Composition validates its inputs eagerly and returns a typed error
//! instead of letting the array or plotting layers panic. Rendering
//! errors wrap the backend's error text, since each plotters backend
//! carries its own error type.

use thiserror::Error;

/// Errors produced while composing or rendering a comparison figure
#[derive(Debug, Error)]
pub enum FigureError {
    /// An axis was constructed from an empty sequence
    #[error("axis '{name}' must contain at least one value")]
    EmptyAxis {
        /// Which axis: `"space"` or `"time"`
        name: &'static str,
    },

    /// A field's shape does not match (time × space)
    #[error(
        "{field} field is {rows}×{cols}, expected {expected_rows}×{expected_cols} (time × space)"
    )]
    ShapeMismatch {
        /// Which field: `"predicted"` or `"reference"`
        field: &'static str,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    /// A time marker index falls outside the temporal axis
    #[error("time marker {index} out of range (temporal axis has {len} values)")]
    MarkerOutOfRange { index: usize, len: usize },

    /// A colormap name could not be parsed
    #[error("unknown colormap '{0}'")]
    UnknownColormap(String),

    /// The drawing backend failed while rendering
    #[error("rendering failed: {0}")]
    Render(String),
}
