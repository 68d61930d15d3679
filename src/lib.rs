//! solviz-rs: Comparison Figures for 1-D Time-Evolving Scalar Fields
//!
//! Renders the standard six-panel figure comparing a predicted solution
//! of a 1-D evolution problem against its reference ("exact") solution:
//! three stacked heatmaps over the (t, x) plane — predicted, exact, and
//! squared pointwise error — followed by three line-plot slices at
//! selected time instants, with a shared legend.
//!
//! # Architecture
//!
//! solviz-rs separates **what is drawn** from **how it is drawn**:
//!
//! 1. **Description first**
//!    - [`figure::compose`] validates its inputs and produces a
//!      [`figure::Figure`]: a plain, inspectable description of all six
//!      panels (values, titles, tags, marker positions)
//!
//! 2. **Backend-agnostic rendering**
//!    - [`figure::Figure::render`] draws that description onto any
//!      `plotters` drawing area; [`figure::Figure::save`] picks the
//!      PNG or SVG backend from the file extension
//!
//! No solving, data loading or inference happens here — fields arrive
//! as already-computed `nalgebra` matrices indexed `[time, space]`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use solviz_rs::prelude::*;
//! use nalgebra::DMatrix;
//!
//! // 1. Wrap the precomputed grid and fields
//! let space = SpatialAxis::from_vec(x_values)?;
//! let time = TemporalAxis::from_vec(t_values)?;
//! let comparison = FieldComparison::new(space, time, predicted, reference)?;
//!
//! // 2. Pick three time instants and a style
//! let markers = TimeMarkers::new(15, 45, 95);
//! let mut style = FigureStyle::for_quantity("h(t,x)");
//! style.colormap = "rainbow".parse()?;
//!
//! // 3. Compose and save
//! let figure = compose(&comparison, markers, &style)?;
//! figure.save("comparison.png")?;
//! ```
//!
//! # Modules
//!
//! - [`field`]: axes, field pair and time markers (the data model)
//! - [`figure`]: composition, styling and rendering
//! - [`error`]: the [`error::FigureError`] type

pub mod error;
pub mod field;
pub mod figure;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use solviz_rs::prelude::*;
    //! ```
    pub use crate::error::FigureError;
    pub use crate::field::{FieldComparison,
                           SpatialAxis,
                           TemporalAxis,
                           TimeMarkers};
    pub use crate::figure::{compose,
                            Colormap,
                            Figure,
                            FigureStyle};
}
