//! Figure composition
//!
//! [`compose`] turns a [`FieldComparison`] plus three time markers and a
//! style into a [`Figure`]: an inspectable description of six panels
//! (three heatmaps, three slice plots) and one shared legend. Rendering
//! is a separate step (see [`super::render`]), so tests and callers can
//! examine exactly what will be drawn without touching a backend.

use nalgebra::DMatrix;

use crate::error::FigureError;
use crate::field::{FieldComparison, TimeMarkers};

use super::layout::{slice_cells, FracRect, ERROR_ROW, EXACT_ROW, LEGEND_GAP, PREDICTED_ROW, SLICE_ROW};
use super::style::FigureStyle;
use super::typography;

/// Alphabetic panel tags, in layout order
pub const PANEL_TAGS: [&str; 6] = ["(a)", "(b)", "(c)", "(d)", "(e)", "(f)"];

/// Tick-label formatting for a heatmap's color bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorbarFormat {
    /// Fixed-point labels, for fields of order one
    Plain,
    /// Scientific notation, for the (typically tiny) squared error
    Scientific,
}

/// One heatmap panel: a field over the (t, x) plane
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapPanel {
    /// Cell values, `[time, space]`
    pub values: DMatrix<f64>,
    /// Temporal axis values (heatmap x direction)
    pub t_values: Vec<f64>,
    /// Spatial axis values (heatmap y direction)
    pub x_values: Vec<f64>,
    /// t-coordinates of vertical marker lines; empty for no markers
    pub markers: Vec<f64>,
    /// Color-bar tick formatting
    pub colorbar: ColorbarFormat,
}

/// One slice panel: both fields across space at a fixed time index
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePanel {
    /// Spatial coordinates
    pub x_values: Vec<f64>,
    /// Reference profile at the slice time, drawn solid
    pub reference: Vec<f64>,
    /// Predicted profile at the slice time, drawn dashed
    pub predicted: Vec<f64>,
    /// Whether this panel labels its y-axis with the quantity label
    pub show_quantity_label: bool,
}

/// Panel content
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Heatmap(HeatmapPanel),
    Slice(SlicePanel),
}

/// A positioned, titled, tagged panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Alphabetic tag, `(a)` through `(f)`
    pub tag: &'static str,
    /// Position in canvas fractions (before color-bar splitting)
    pub area: FracRect,
    /// Panel title
    pub title: String,
    pub content: PanelContent,
}

impl Panel {
    /// Heatmap content, if this is a heatmap panel
    pub fn as_heatmap(&self) -> Option<&HeatmapPanel> {
        match &self.content {
            PanelContent::Heatmap(h) => Some(h),
            PanelContent::Slice(_) => None,
        }
    }

    /// Slice content, if this is a slice panel
    pub fn as_slice(&self) -> Option<&SlicePanel> {
        match &self.content {
            PanelContent::Slice(s) => Some(s),
            PanelContent::Heatmap(_) => None,
        }
    }
}

/// Anchor of the shared legend, centred beneath the middle slice panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendAnchor {
    /// Horizontal centre in canvas fractions
    pub center_x: f64,
    /// Top edge in canvas fractions (y upward)
    pub top: f64,
}

/// A composed comparison figure
///
/// Immutable description of six panels and a shared legend; rendering
/// leaves it untouched, so one figure can be drawn onto any number of
/// backends with identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    panels: Vec<Panel>,
    legend: LegendAnchor,
    style: FigureStyle,
}

impl Figure {
    /// The six panels, layout order: predicted, exact, error, then the
    /// three slices left to right
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Shared legend anchor
    pub fn legend(&self) -> LegendAnchor {
        self.legend
    }

    /// Style this figure was composed with
    pub fn style(&self) -> &FigureStyle {
        &self.style
    }
}

/// Compose a six-panel comparison figure
///
/// # Panels
///
/// 1. `(a)` predicted-field heatmap, with one vertical marker line per
///    time marker
/// 2. `(b)` reference-field heatmap
/// 3. `(c)` squared-error heatmap, scientific color-bar labels
/// 4.–6. `(d)`–`(f)` slice panels, one per marker, titled with the
///    slice's time value to two decimals
///
/// # Errors
///
/// Returns [`FigureError::MarkerOutOfRange`] if any marker index does
/// not address the temporal axis. Shape errors cannot occur here: the
/// [`FieldComparison`] constructor already guarantees both fields match
/// the axes.
///
/// # Example
///
/// ```rust,ignore
/// use solviz_rs::prelude::*;
///
/// let figure = compose(&comparison, TimeMarkers::new(15, 45, 95), &style)?;
/// assert_eq!(figure.panels().len(), 6);
/// figure.save("comparison.png")?;
/// ```
pub fn compose(
    comparison: &FieldComparison,
    markers: TimeMarkers,
    style: &FigureStyle,
) -> Result<Figure, FigureError> {
    markers.validate(comparison.n_time())?;
    typography::install();

    log::debug!(
        "composing comparison figure: {} time × {} space points, colormap {}",
        comparison.n_time(),
        comparison.n_space(),
        style.colormap,
    );

    let t_values: Vec<f64> = comparison.time().values().iter().copied().collect();
    let x_values: Vec<f64> = comparison.space().values().iter().copied().collect();

    let marker_times: Vec<f64> = markers.indices().iter().map(|&i| t_values[i]).collect();

    let mut panels = Vec::with_capacity(6);

    panels.push(Panel {
        tag: PANEL_TAGS[0],
        area: PREDICTED_ROW,
        title: format!("Predicted {}", style.quantity_label),
        content: PanelContent::Heatmap(HeatmapPanel {
            values: comparison.predicted().clone(),
            t_values: t_values.clone(),
            x_values: x_values.clone(),
            markers: marker_times,
            colorbar: ColorbarFormat::Plain,
        }),
    });

    panels.push(Panel {
        tag: PANEL_TAGS[1],
        area: EXACT_ROW,
        title: format!("Exact {}", style.quantity_label),
        content: PanelContent::Heatmap(HeatmapPanel {
            values: comparison.reference().clone(),
            t_values: t_values.clone(),
            x_values: x_values.clone(),
            markers: Vec::new(),
            colorbar: ColorbarFormat::Plain,
        }),
    });

    panels.push(Panel {
        tag: PANEL_TAGS[2],
        area: ERROR_ROW,
        title: "Error".to_string(),
        content: PanelContent::Heatmap(HeatmapPanel {
            values: comparison.squared_error(),
            t_values: t_values.clone(),
            x_values: x_values.clone(),
            markers: Vec::new(),
            colorbar: ColorbarFormat::Scientific,
        }),
    });

    let cells = slice_cells();
    for (k, (&t_index, area)) in markers.indices().iter().zip(cells.iter()).enumerate() {
        panels.push(Panel {
            tag: PANEL_TAGS[3 + k],
            area: *area,
            title: format!("t = {:.2}", t_values[t_index]),
            content: PanelContent::Slice(SlicePanel {
                x_values: x_values.clone(),
                reference: comparison.reference_slice(t_index).iter().copied().collect(),
                predicted: comparison.predicted_slice(t_index).iter().copied().collect(),
                show_quantity_label: k == 0,
            }),
        });
    }

    let legend = LegendAnchor {
        center_x: cells[1].center_x(),
        top: SLICE_ROW.bottom - LEGEND_GAP,
    };

    Ok(Figure {
        panels,
        legend,
        style: style.clone(),
    })
}
