//! Viewport state and cell/pixel coordinate mapping.

use super::visible::AxisRange;
use super::{CELL_HEIGHT, CELL_WIDTH, COL_HEADER_HEIGHT, ROW_HEADER_WIDTH};

/// Viewport state - the visible pixel rectangle of the drawing surface.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Horizontal scroll position in pixels.
    pub scroll_x: f32,
    /// Vertical scroll position in pixels.
    pub scroll_y: f32,
    /// Viewport width in logical pixels.
    pub width: f32,
    /// Viewport height in logical pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// First visible column index, derived from the scroll position.
    ///
    /// Monotonic non-decreasing in scroll position for a fixed cell size.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset_x(&self) -> u32 {
        (self.scroll_x.max(0.0) / CELL_WIDTH).floor() as u32
    }

    /// First visible row index, derived from the scroll position.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset_y(&self) -> u32 {
        (self.scroll_y.max(0.0) / CELL_HEIGHT).floor() as u32
    }

    /// Visible column spans for the current scroll offset.
    pub fn columns(&self) -> AxisRange {
        AxisRange::compute(CELL_WIDTH, self.width, ROW_HEADER_WIDTH, self.offset_x())
    }

    /// Visible row spans for the current scroll offset.
    pub fn rows(&self) -> AxisRange {
        AxisRange::compute(CELL_HEIGHT, self.height, COL_HEADER_HEIGHT, self.offset_y())
    }

    /// Hit test: cell under a surface-space point.
    ///
    /// A coordinate inside the header band or outside every visible span
    /// resolves to index 0 on that axis.
    pub fn cell_at_point(&self, columns: &AxisRange, rows: &AxisRange, x: f32, y: f32) -> (u32, u32) {
        let col = columns.index_at(x).unwrap_or(0);
        let row = rows.index_at(y).unwrap_or(0);
        (col, row)
    }

    /// Pixel origin (top-left corner) of a cell, for overlay placement.
    ///
    /// Uses the recorded span start for on-screen cells; off-screen cells
    /// extrapolate linearly from the axis offset so the result agrees with
    /// the span placement for any cell that later scrolls into view.
    pub fn cell_origin(&self, columns: &AxisRange, rows: &AxisRange, col: u32, row: u32) -> (f32, f32) {
        let x = columns
            .start_of(col)
            .unwrap_or_else(|| self.extrapolate_x(col));
        let y = rows.start_of(row).unwrap_or_else(|| self.extrapolate_y(row));
        (x, y)
    }

    #[allow(clippy::cast_precision_loss)]
    fn extrapolate_x(&self, col: u32) -> f32 {
        let delta = i64::from(col) - i64::from(self.offset_x());
        ROW_HEADER_WIDTH + delta as f32 * CELL_WIDTH
    }

    #[allow(clippy::cast_precision_loss)]
    fn extrapolate_y(&self, row: u32) -> f32 {
        let delta = i64::from(row) - i64::from(self.offset_y());
        COL_HEADER_HEIGHT + delta as f32 * CELL_HEIGHT
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_floor_of_scroll_over_cell_size() {
        let mut viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.offset_x(), 0);
        viewport.scroll_x = 99.0;
        assert_eq!(viewport.offset_x(), 0);
        viewport.scroll_x = 100.0;
        assert_eq!(viewport.offset_x(), 1);
        viewport.scroll_y = 221.0;
        assert_eq!(viewport.offset_y(), 10);
    }

    #[test]
    fn extrapolation_agrees_with_visible_placement() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.scroll_x = 500.0; // offset 5
        viewport.scroll_y = 220.0; // offset 10
        let columns = viewport.columns();
        let rows = viewport.rows();

        // A cell inside the visible range: recorded and extrapolated
        // placements must match.
        let visible_col = columns.cells.first().unwrap().index + 1;
        let recorded = columns.start_of(visible_col).unwrap();
        assert_eq!(viewport.extrapolate_x(visible_col), recorded);

        let visible_row = rows.cells.first().unwrap().index + 2;
        let recorded = rows.start_of(visible_row).unwrap();
        assert_eq!(viewport.extrapolate_y(visible_row), recorded);

        // A cell far off screen extrapolates linearly.
        let (x, _) = viewport.cell_origin(&columns, &rows, 105, 10);
        assert_eq!(x, ROW_HEADER_WIDTH + 100.0 * CELL_WIDTH);
    }

    #[test]
    fn header_band_hits_default_to_zero() {
        let viewport = Viewport::new(800.0, 600.0);
        let columns = viewport.columns();
        let rows = viewport.rows();
        assert_eq!(viewport.cell_at_point(&columns, &rows, 10.0, 10.0), (0, 0));
    }
}
