//! Rendering a composed [`Figure`] onto plotters backends
//!
//! The renderer walks the figure's panel descriptions and draws each one
//! into its fractional rectangle: heatmaps as per-cell rectangles with a
//! gradient color bar to the right, slices as solid/dashed curve pairs,
//! plus the alphabetic tags and the shared legend. Nothing here mutates
//! the figure, so repeated renders of the same figure are identical.

use plotters::prelude::*;
use plotters::coord::Shift;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::FigureError;
use crate::field::axes::cell_edges;

use super::compose::{
    ColorbarFormat, Figure, HeatmapPanel, LegendAnchor, Panel, PanelContent, SlicePanel,
};
use super::layout::{PixelRect, HEATMAP_TAG_ANCHOR, SLICE_TAG_ANCHOR, TAG_OFFSET};
use super::style::FigureStyle;
use super::typography::{self, Typography};

/// Gradient resolution of a color bar, in rectangles
const COLORBAR_STEPS: usize = 200;

impl Figure {
    /// Render onto an arbitrary plotters drawing area
    ///
    /// The figure was composed for a particular canvas aspect; the
    /// renderer uses the area's actual pixel size, so drawing onto an
    /// area of a different size simply rescales the fixed fractional
    /// layout.
    ///
    /// # Errors
    ///
    /// Any backend failure is wrapped in [`FigureError::Render`].
    pub fn render<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), FigureError> {
        let ty = typography::install();
        let canvas = root.dim_in_pixel();

        root.fill(&self.style().background).map_err(render_err)?;

        for panel in self.panels() {
            match &panel.content {
                PanelContent::Heatmap(heatmap) => {
                    render_heatmap(root, canvas, panel, heatmap, self.style(), &ty)?
                }
                PanelContent::Slice(slice) => {
                    render_slice(root, canvas, panel, slice, self.style(), &ty)?
                }
            }
        }

        render_legend(root, canvas, self.legend(), self.style(), &ty)
    }

    /// Render to a file, choosing the backend from the extension
    ///
    /// `.svg` uses the vector backend; everything else (including no
    /// extension) falls back to the bitmap backend. Canvas size comes
    /// from the figure's style.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// figure.save("comparison.svg")?;
    /// figure.save("comparison.png")?;
    /// ```
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), FigureError> {
        let path = path.as_ref();
        let size = (self.style().width, self.style().height);

        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("png");

        match ext {
            "svg" => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                self.render(&root)?;
                root.present().map_err(render_err)
            }
            _ => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                self.render(&root)?;
                root.present().map_err(render_err)
            }
        }
    }
}

fn render_err<E: std::fmt::Display>(err: E) -> FigureError {
    FigureError::Render(err.to_string())
}

/// Sub-area of the root covering a pixel rectangle
fn sub_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    canvas: (u32, u32),
    px: &PixelRect,
) -> DrawingArea<DB, Shift> {
    root.margin(
        px.y0,
        canvas.1 as i32 - px.y1,
        px.x0,
        canvas.0 as i32 - px.x1,
    )
}

/// Draw one heatmap panel: field cells, markers, axes and its color bar
fn render_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    canvas: (u32, u32),
    panel: &Panel,
    heatmap: &HeatmapPanel,
    style: &FigureStyle,
    ty: &Typography,
) -> Result<(), FigureError> {
    let (map_frac, bar_frac) = panel.area.split_colorbar();
    let map_px = map_frac.to_pixels(canvas);
    let bar_px = bar_frac.to_pixels(canvas);

    // Auto-scaled value range; a constant field still needs a non-empty span
    let (lo, mut hi) = value_range(heatmap.values.iter().copied());
    if hi <= lo {
        hi = lo + 1.0;
    }
    let span = hi - lo;

    let t_edges = cell_edges(&heatmap.t_values);
    let x_edges = cell_edges(&heatmap.x_values);
    let (t_min, t_max) = (t_edges[0], *t_edges.last().unwrap());
    let (x_min, x_max) = (x_edges[0], *x_edges.last().unwrap());

    let area = sub_area(root, canvas, &map_px);

    let mut chart = ChartBuilder::on(&area)
        .caption(&panel.title, ty.font(1.1))
        .margin(1)
        .x_label_area_size(16)
        .y_label_area_size(24)
        .build_cartesian_2d(t_min..t_max, x_min..x_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("t")
        .y_desc("x")
        .x_labels(5)
        .y_labels(3)
        .label_style(ty.font(0.8))
        .axis_desc_style(ty.font(1.0))
        .draw()
        .map_err(render_err)?;

    // One rectangle per (time, space) cell, lower-left origin
    let values = &heatmap.values;
    let cmap = style.colormap;
    chart
        .draw_series(
            (0..values.nrows())
                .flat_map(|i| (0..values.ncols()).map(move |j| (i, j)))
                .map(|(i, j)| {
                    let color = cmap.sample((values[(i, j)] - lo) / span);
                    Rectangle::new(
                        [(t_edges[i], x_edges[j]), (t_edges[i + 1], x_edges[j + 1])],
                        color.filled(),
                    )
                }),
        )
        .map_err(render_err)?;

    // Vertical marker lines at the selected time instants
    for &t_mark in &heatmap.markers {
        chart
            .draw_series(LineSeries::new(
                [(t_mark, x_min), (t_mark, x_max)],
                ShapeStyle::from(&style.marker_color).stroke_width(style.marker_stroke),
            ))
            .map_err(render_err)?;
    }

    render_colorbar(root, canvas, &bar_px, heatmap.colorbar, lo, hi, style, ty)?;
    draw_tag(root, panel.tag, &map_px, HEATMAP_TAG_ANCHOR, style, ty)
}

/// Draw the thin gradient strip attached to a heatmap's right edge
#[allow(clippy::too_many_arguments)]
fn render_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    canvas: (u32, u32),
    bar_px: &PixelRect,
    format: ColorbarFormat,
    lo: f64,
    hi: f64,
    style: &FigureStyle,
    ty: &Typography,
) -> Result<(), FigureError> {
    let area = sub_area(root, canvas, bar_px);

    let label_size = match format {
        ColorbarFormat::Plain => 26,
        ColorbarFormat::Scientific => 36,
    };

    let mut chart = ChartBuilder::on(&area)
        .set_label_area_size(LabelAreaPosition::Right, label_size)
        .build_cartesian_2d(0.0..1.0, lo..hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(4)
        .y_label_formatter(&|v| match format {
            ColorbarFormat::Plain => format!("{:.2}", v),
            ColorbarFormat::Scientific => format!("{:.1e}", v),
        })
        .label_style(ty.font(0.75))
        .draw()
        .map_err(render_err)?;

    let cmap = style.colormap;
    chart
        .draw_series((0..COLORBAR_STEPS).map(|s| {
            let f0 = s as f64 / COLORBAR_STEPS as f64;
            let f1 = (s + 1) as f64 / COLORBAR_STEPS as f64;
            Rectangle::new(
                [(0.0, lo + (hi - lo) * f0), (1.0, lo + (hi - lo) * f1)],
                cmap.sample(f0).filled(),
            )
        }))
        .map_err(render_err)?;

    Ok(())
}

/// Draw one slice panel: reference solid, predicted dashed
fn render_slice<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    canvas: (u32, u32),
    panel: &Panel,
    slice: &SlicePanel,
    style: &FigureStyle,
    ty: &Typography,
) -> Result<(), FigureError> {
    let px = panel.area.to_pixels(canvas);
    let area = sub_area(root, canvas, &px);

    let (x_min, x_max) = value_range(slice.x_values.iter().copied());

    let (mut y_lo, mut y_hi) = value_range(
        slice
            .reference
            .iter()
            .chain(slice.predicted.iter())
            .copied(),
    );
    if y_hi <= y_lo {
        y_lo -= 0.5;
        y_hi += 0.5;
    } else {
        let pad = 0.05 * (y_hi - y_lo);
        y_lo -= pad;
        y_hi += pad;
    }

    let mut chart = ChartBuilder::on(&area)
        .caption(&panel.title, ty.font(1.0))
        .margin(1)
        .x_label_area_size(14)
        .y_label_area_size(if slice.show_quantity_label { 28 } else { 22 })
        .build_cartesian_2d(x_min..x_max, y_lo..y_hi)
        .map_err(render_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .x_desc("x")
        .x_labels(3)
        .y_labels(3)
        .label_style(ty.font(0.75))
        .axis_desc_style(ty.font(0.95));
    if slice.show_quantity_label {
        mesh.y_desc(&style.quantity_label);
    }
    mesh.draw().map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            slice
                .x_values
                .iter()
                .copied()
                .zip(slice.reference.iter().copied()),
            ShapeStyle::from(&style.reference_color).stroke_width(style.reference_stroke),
        ))
        .map_err(render_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            slice
                .x_values
                .iter()
                .copied()
                .zip(slice.predicted.iter().copied()),
            5,
            3,
            ShapeStyle::from(&style.predicted_color).stroke_width(style.predicted_stroke),
        ))
        .map_err(render_err)?;

    draw_tag(root, panel.tag, &px, SLICE_TAG_ANCHOR, style, ty)
}

/// Draw the shared framed legend beneath the middle slice panel
fn render_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    canvas: (u32, u32),
    anchor: LegendAnchor,
    style: &FigureStyle,
    ty: &Typography,
) -> Result<(), FigureError> {
    const SAMPLE_LEN: i32 = 18;
    const SAMPLE_GAP: i32 = 4;
    const ENTRY_GAP: i32 = 14;
    const PAD: i32 = 6;

    let (w, h) = (canvas.0 as f64, canvas.1 as f64);
    let cx = (anchor.center_x * w).round() as i32;
    let top = ((1.0 - anchor.top) * h).round() as i32;

    let label_style = TextStyle::from(ty.font(0.9))
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let entries = [
        ("Exact", style.reference_color, style.reference_stroke),
        ("Prediction", style.predicted_color, style.predicted_stroke),
    ];

    let mut widths = Vec::with_capacity(entries.len());
    let mut text_h = 0i32;
    for (label, _, _) in &entries {
        let (tw, th) = root
            .estimate_text_size(label, &label_style)
            .map_err(render_err)?;
        widths.push(SAMPLE_LEN + SAMPLE_GAP + tw as i32);
        text_h = text_h.max(th as i32);
    }

    let content_w: i32 = widths.iter().sum::<i32>() + ENTRY_GAP;
    let box_h = text_h + 2 * PAD;
    let x0 = cx - content_w / 2 - PAD;
    let x1 = cx + content_w / 2 + PAD;

    // Opaque frame so the legend stays readable wherever it lands
    root.draw(&Rectangle::new(
        [(x0, top), (x1, top + box_h)],
        style.background.filled(),
    ))
    .map_err(render_err)?;
    root.draw(&Rectangle::new(
        [(x0, top), (x1, top + box_h)],
        ShapeStyle {
            color: BLACK.to_rgba(),
            filled: false,
            stroke_width: 1,
        },
    ))
    .map_err(render_err)?;

    let mut x = x0 + PAD;
    let cy = top + box_h / 2;
    for ((label, color, stroke), width) in entries.iter().zip(widths.iter()) {
        root.draw(&PathElement::new(
            vec![(x, cy), (x + SAMPLE_LEN, cy)],
            ShapeStyle::from(color).stroke_width(*stroke),
        ))
        .map_err(render_err)?;
        root.draw(&Text::new(
            (*label).to_string(),
            (x + SAMPLE_LEN + SAMPLE_GAP, cy),
            label_style.clone(),
        ))
        .map_err(render_err)?;
        x += width + ENTRY_GAP;
    }

    Ok(())
}

/// Draw a panel tag with a background halo for legibility
///
/// The anchor is an axes-fraction position (y upward) inside the panel's
/// pixel rectangle; the tag is right-aligned, top-anchored and offset by
/// [`TAG_OFFSET`], matching the heatmap/slice tag placement constants.
fn draw_tag<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    tag: &str,
    px: &PixelRect,
    anchor: (f64, f64),
    style: &FigureStyle,
    ty: &Typography,
) -> Result<(), FigureError> {
    let x = px.x0 + (anchor.0 * px.width() as f64).round() as i32 + TAG_OFFSET.0;
    let y = px.y0 + ((1.0 - anchor.1) * px.height() as f64).round() as i32 + TAG_OFFSET.1;

    let pos = Pos::new(HPos::Right, VPos::Top);
    let halo = TextStyle::from(ty.font(1.0))
        .color(&style.background)
        .pos(pos);
    let ink = TextStyle::from(ty.font(1.0)).color(&BLACK).pos(pos);

    for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        root.draw(&Text::new(tag.to_string(), (x + dx, y + dy), halo.clone()))
            .map_err(render_err)?;
    }
    root.draw(&Text::new(tag.to_string(), (x, y), ink))
        .map_err(render_err)?;
    Ok(())
}

/// (min, max) over an iterator, NaN-tolerant
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        if v.is_nan() {
            (lo, hi)
        } else {
            (lo.min(v), hi.max(v))
        }
    })
}
