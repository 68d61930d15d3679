//! Figure styling
//!
//! [`FigureStyle`] collects every appearance knob of the comparison
//! figure: colormap, curve colors, the quantity label used for titles
//! and the y-axis, and canvas size. Layout itself is fixed (see
//! [`super::layout`]) and intentionally not configurable.

use plotters::style::{RGBColor, BLUE, RED, WHITE};

use super::colormap::Colormap;

/// Styling for a comparison figure
///
/// # Fields
///
/// - `colormap`: map shared by the three heatmaps
/// - `reference_color` / `predicted_color`: the two slice-curve colors
/// - `marker_color`: vertical marker lines on the predicted heatmap
/// - `quantity_label`: free text naming the plotted quantity, e.g.
///   `"h(t,x)"`; appears in the heatmap titles and as the first slice
///   panel's y-axis label
/// - `width`, `height`: canvas size in pixels
///
/// # Example
///
/// ```rust,ignore
/// use solviz_rs::figure::{Colormap, FigureStyle};
/// use plotters::style::RGBColor;
///
/// let mut style = FigureStyle::for_quantity("|ψ(t,x)|");
/// style.colormap = "rainbow".parse()?;
/// style.reference_color = RGBColor(31, 119, 180);
/// style.predicted_color = RGBColor(255, 127, 14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Heatmap colormap (default: viridis)
    pub colormap: Colormap,

    /// Reference-curve color, drawn solid and heavier (default: BLUE)
    pub reference_color: RGBColor,

    /// Predicted-curve color, drawn dashed and lighter (default: RED)
    pub predicted_color: RGBColor,

    /// Marker-line color on the predicted heatmap (default: BLUE)
    pub marker_color: RGBColor,

    /// Quantity label used in titles and the slice y-axis
    pub quantity_label: String,

    /// Canvas width in pixels (default: 500)
    pub width: u32,

    /// Canvas height in pixels (default: 700)
    pub height: u32,

    /// Canvas background (default: WHITE)
    pub background: RGBColor,

    /// Reference-curve stroke width (default: 3)
    pub reference_stroke: u32,

    /// Predicted-curve stroke width (default: 2)
    pub predicted_stroke: u32,

    /// Marker-line stroke width (default: 2)
    pub marker_stroke: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            colormap: Colormap::default(),
            reference_color: BLUE,
            predicted_color: RED,
            marker_color: BLUE,
            quantity_label: "u(t,x)".to_string(),
            // 5 × 7 inch portrait canvas at 100 dpi
            width: 500,
            height: 700,
            background: WHITE,
            reference_stroke: 3,
            predicted_stroke: 2,
            marker_stroke: 2,
        }
    }
}

impl FigureStyle {
    /// Default style with a custom quantity label
    pub fn for_quantity(label: impl Into<String>) -> Self {
        Self {
            quantity_label: label.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_quantity_only_changes_the_label() {
        let style = FigureStyle::for_quantity("h(t,x)");
        assert_eq!(style.quantity_label, "h(t,x)");
        assert_eq!(style.colormap, FigureStyle::default().colormap);
        assert_eq!(style.width, 500);
        assert_eq!(style.height, 700);
    }
}
