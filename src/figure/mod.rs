//! Figure composition and rendering
//!
//! This module turns a [`crate::field::FieldComparison`] into the fixed
//! six-panel comparison figure and draws it with the `plotters` library.
//!
//! # Organization
//!
//! ```text
//! figure/
//! ├── mod.rs          ← This file
//! ├── layout.rs       ← Fixed fractional-canvas geometry
//! ├── colormap.rs     ← Named colormaps
//! ├── style.rs        ← FigureStyle
//! ├── typography.rs   ← One-time process-wide text preferences
//! ├── compose.rs      ← compose(): inputs → Figure description
//! └── render.rs       ← Figure → plotters backends, save()
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use solviz_rs::figure::{compose, FigureStyle};
//! use solviz_rs::field::TimeMarkers;
//!
//! let style = FigureStyle::for_quantity("h(t,x)");
//! let figure = compose(&comparison, TimeMarkers::new(15, 45, 95), &style)?;
//!
//! figure.save("comparison.png")?;   // bitmap
//! figure.save("comparison.svg")?;   // vector
//! ```
//!
//! # Panel Layout
//!
//! The layout is fixed and independent of the input size: three stacked
//! heatmaps (predicted, exact, squared error) with color bars on the
//! right, then three side-by-side slice panels with one shared legend
//! beneath the middle one. Panels are tagged `(a)` through `(f)`.

pub mod colormap;
pub mod compose;
pub mod layout;
pub mod render;
pub mod style;
pub mod typography;

pub use colormap::Colormap;
pub use compose::{compose, ColorbarFormat, Figure, Panel, PanelContent, PANEL_TAGS};
pub use style::FigureStyle;
