//! Fixed fractional-canvas geometry
//!
//! Panel positions are constants expressed as fractions of the overall
//! canvas, independent of input size. Fractions use the plot convention
//! of a y-axis growing upward from the bottom-left corner; conversion to
//! pixel rectangles flips into the backend's top-left convention.

/// Axis-aligned rectangle in canvas fractions, y growing upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracRect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

/// Axis-aligned rectangle in backend pixels, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// Heatmap row for the predicted field (top of the canvas)
pub const PREDICTED_ROW: FracRect = FracRect {
    left: 0.15,
    bottom: 0.80,
    right: 0.90,
    top: 0.94,
};

/// Heatmap row for the reference field
pub const EXACT_ROW: FracRect = FracRect {
    left: 0.15,
    bottom: 0.58,
    right: 0.90,
    top: 0.70,
};

/// Heatmap row for the squared error
pub const ERROR_ROW: FracRect = FracRect {
    left: 0.15,
    bottom: 0.36,
    right: 0.90,
    top: 0.48,
};

/// Horizontal band holding the three slice panels
pub const SLICE_ROW: FracRect = FracRect {
    left: 0.13,
    bottom: 0.13,
    right: 0.90,
    top: 0.25,
};

/// Gap between slice panels, as a fraction of one panel's width
pub const SLICE_WSPACE: f64 = 0.5;

/// Color bar width as a fraction of its heatmap's width
pub const COLORBAR_FRACTION: f64 = 0.05;

/// Gap between a heatmap and its color bar, in canvas-width fractions
pub const COLORBAR_PAD: f64 = 0.01;

/// Tag anchor inside heatmap panels (axes fraction, y upward)
pub const HEATMAP_TAG_ANCHOR: (f64, f64) = (0.3, 0.47);

/// Tag anchor inside slice panels (axes fraction, y upward)
pub const SLICE_TAG_ANCHOR: (f64, f64) = (0.6, 0.5);

/// Tag offset from its anchor, in pixels (left and down)
pub const TAG_OFFSET: (i32, i32) = (-15, 15);

/// Vertical gap between the slice row and the shared legend, canvas fractions
pub const LEGEND_GAP: f64 = 0.04;

impl FracRect {
    /// Width in canvas fractions
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height in canvas fractions
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Horizontal centre in canvas fractions
    pub fn center_x(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Split off a thin color-bar strip on the right
    ///
    /// Returns `(heatmap, colorbar)`. The strip takes
    /// [`COLORBAR_FRACTION`] of this rectangle's width and sits
    /// [`COLORBAR_PAD`] to the right of the shrunk heatmap.
    pub fn split_colorbar(&self) -> (FracRect, FracRect) {
        let bar_width = COLORBAR_FRACTION * self.width();
        let heatmap = FracRect {
            right: self.right - bar_width - COLORBAR_PAD,
            ..*self
        };
        let colorbar = FracRect {
            left: self.right - bar_width,
            ..*self
        };
        (heatmap, colorbar)
    }

    /// Convert to backend pixels for a canvas of `(width, height)` pixels
    pub fn to_pixels(&self, canvas: (u32, u32)) -> PixelRect {
        let (w, h) = (canvas.0 as f64, canvas.1 as f64);
        PixelRect {
            x0: (self.left * w).round() as i32,
            y0: ((1.0 - self.top) * h).round() as i32,
            x1: (self.right * w).round() as i32,
            y1: ((1.0 - self.bottom) * h).round() as i32,
        }
    }
}

impl PixelRect {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0) as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0) as u32
    }
}

/// The three slice-panel rectangles, left to right
///
/// The slice band is divided into three equal panels separated by gaps
/// of `SLICE_WSPACE` panel-widths:
/// `3·w + 2·(SLICE_WSPACE·w) = band width`.
pub fn slice_cells() -> [FracRect; 3] {
    let band = SLICE_ROW;
    let panel_width = band.width() / (3.0 + 2.0 * SLICE_WSPACE);
    let gap = SLICE_WSPACE * panel_width;

    let mut cells = [band; 3];
    for (i, cell) in cells.iter_mut().enumerate() {
        let left = band.left + i as f64 * (panel_width + gap);
        cell.left = left;
        cell.right = left + panel_width;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_cells_tile_the_band() {
        let cells = slice_cells();
        let w = cells[0].width();

        // Equal widths
        assert!((cells[1].width() - w).abs() < 1e-12);
        assert!((cells[2].width() - w).abs() < 1e-12);

        // Gaps are half a panel width
        let gap01 = cells[1].left - cells[0].right;
        assert!((gap01 - SLICE_WSPACE * w).abs() < 1e-12);

        // Outer edges coincide with the band
        assert!((cells[0].left - SLICE_ROW.left).abs() < 1e-12);
        assert!((cells[2].right - SLICE_ROW.right).abs() < 1e-12);
    }

    #[test]
    fn colorbar_split_keeps_vertical_extent() {
        let (heatmap, bar) = PREDICTED_ROW.split_colorbar();
        assert_eq!(heatmap.top, PREDICTED_ROW.top);
        assert_eq!(bar.bottom, PREDICTED_ROW.bottom);
        assert!(heatmap.right < bar.left);
        assert!((bar.width() - COLORBAR_FRACTION * PREDICTED_ROW.width()).abs() < 1e-12);
    }

    #[test]
    fn pixel_conversion_flips_the_y_axis() {
        let rect = FracRect {
            left: 0.25,
            bottom: 0.25,
            right: 0.75,
            top: 0.75,
        };
        let px = rect.to_pixels((400, 800));
        assert_eq!(px, PixelRect { x0: 100, y0: 200, x1: 300, y1: 600 });
        assert_eq!(px.width(), 200);
        assert_eq!(px.height(), 400);
    }
}
