//! Per-axis visible cell spans.
//!
//! An [`AxisRange`] is the one-dimensional answer to "which cells are on
//! screen and where": an ordered, contiguous run of `(index, start, end)`
//! spans covering the visible pixel extent of one axis, starting at the
//! axis's first visible cell index.

/// One visible cell span on an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCell {
    /// Cell index on this axis.
    pub index: u32,
    /// Pixel start (left/top edge) in surface space.
    pub start: f32,
    /// Pixel end (right/bottom edge). May exceed the visible extent for
    /// the trailing, partially visible cell.
    pub end: f32,
}

/// Ordered visible spans for one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisRange {
    pub cells: Vec<VisibleCell>,
}

impl AxisRange {
    /// Compute the visible spans for an axis.
    ///
    /// Walks a pixel cursor from `header_offset` to `visible_extent` in
    /// `cell_size` steps, emitting one span per step starting at cell
    /// index `first_index`. The last span may be only partially visible;
    /// that is intentional, partial trailing cells still render and are
    /// hit-testable. Emits at least one span whenever
    /// `header_offset < visible_extent`.
    pub fn compute(cell_size: f32, visible_extent: f32, header_offset: f32, first_index: u32) -> Self {
        let mut cells = Vec::new();
        if cell_size <= 0.0 {
            return Self { cells };
        }

        let mut index = first_index;
        let mut cursor = header_offset;
        while cursor < visible_extent {
            cells.push(VisibleCell {
                index,
                start: cursor,
                end: cursor + cell_size,
            });
            index = index.saturating_add(1);
            cursor += cell_size;
        }
        Self { cells }
    }

    /// Cell index whose `[start, end]` span contains `coord`, if any.
    ///
    /// Spans are contiguous and ordered, so a binary search over start
    /// positions suffices. Coordinates inside the header band (before the
    /// first span) or past the last span return `None`.
    pub fn index_at(&self, coord: f32) -> Option<u32> {
        let pos = self
            .cells
            .partition_point(|cell| cell.start <= coord);
        let cell = self.cells.get(pos.checked_sub(1)?)?;
        (coord <= cell.end).then_some(cell.index)
    }

    /// Recorded pixel start for `index`, if it is on screen.
    pub fn start_of(&self, index: u32) -> Option<f32> {
        let first = self.cells.first()?.index;
        let offset = index.checked_sub(first)? as usize;
        self.cells.get(offset).map(|cell| cell.start)
    }

    pub fn first_index(&self) -> Option<u32> {
        self.cells.first().map(|cell| cell.index)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_contiguous_and_start_at_header() {
        let range = AxisRange::compute(100.0, 450.0, 50.0, 3);
        assert!(!range.cells.is_empty());
        assert_eq!(range.cells[0].start, 50.0);
        assert_eq!(range.cells[0].index, 3);
        for pair in range.cells.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_eq!(pair[0].index + 1, pair[1].index);
        }
    }

    #[test]
    fn trailing_cell_may_be_partial() {
        // 50 + 4*100 = 450 == extent, so the span starting at 350 is the
        // last full one; the cursor stops before 450.
        let range = AxisRange::compute(100.0, 460.0, 50.0, 0);
        let last = range.cells.last().unwrap();
        assert!(last.end > 460.0);
        assert!(last.start < 460.0);
    }

    #[test]
    fn index_at_uses_span_bounds() {
        let range = AxisRange::compute(100.0, 450.0, 50.0, 2);
        assert_eq!(range.index_at(49.0), None); // header band
        assert_eq!(range.index_at(50.0), Some(2));
        assert_eq!(range.index_at(149.0), Some(2));
        assert_eq!(range.index_at(151.0), Some(3));
    }

    #[test]
    fn start_of_visible_index() {
        let range = AxisRange::compute(100.0, 450.0, 50.0, 7);
        assert_eq!(range.start_of(7), Some(50.0));
        assert_eq!(range.start_of(8), Some(150.0));
        assert_eq!(range.start_of(6), None);
        assert_eq!(range.start_of(100), None);
    }

    #[test]
    fn degenerate_inputs_yield_empty_range() {
        assert!(AxisRange::compute(100.0, 40.0, 50.0, 0).is_empty());
        assert!(AxisRange::compute(0.0, 400.0, 50.0, 0).is_empty());
    }
}
