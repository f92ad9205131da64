//! Virtual scroll region with on-demand growth.
//!
//! The grid is conceptually unbounded, so the scrollable area backing the
//! DOM scroll container is a virtual extent that grows geometrically as
//! the user approaches it. The extent only ever grows.

/// Initial virtual extent per axis, in pixels.
pub const BASELINE_EXTENT: f32 = 5000.0;

/// Growth factor applied when a scroll position passes the current max.
pub const GROWTH_FACTOR: f32 = 1.5;

/// Extra spacer pixels past the current max, so growth triggers before the
/// user can physically reach the hard edge.
pub const EDGE_MARGIN: f32 = 2000.0;

/// Virtual scrollable extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    pub width: f32,
    pub height: f32,
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollRegion {
    pub fn new() -> Self {
        Self {
            width: BASELINE_EXTENT,
            height: BASELINE_EXTENT,
        }
    }

    /// Pure growth step: returns the region after observing a scroll
    /// position. An axis grows by [`GROWTH_FACTOR`] when the position has
    /// passed its current max; at most one step per call. A zero scroll
    /// position never grows (guards the division).
    #[must_use]
    pub fn grown(self, scroll_x: f32, scroll_y: f32) -> Self {
        let mut region = self;
        if scroll_x > 0.0 && region.width / scroll_x < 1.0 {
            region.width *= GROWTH_FACTOR;
        }
        if scroll_y > 0.0 && region.height / scroll_y < 1.0 {
            region.height *= GROWTH_FACTOR;
        }
        region
    }

    /// Spacer width for the scroll container, including the edge margin.
    pub fn spacer_width(&self) -> f32 {
        self.width + EDGE_MARGIN
    }

    /// Spacer height for the scroll container, including the edge margin.
    pub fn spacer_height(&self) -> f32 {
        self.height + EDGE_MARGIN
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn grows_by_factor_when_passed() {
        let region = ScrollRegion::new().grown(6000.0, 0.0);
        assert_eq!(region.width, 7500.0);
        assert_eq!(region.height, BASELINE_EXTENT);

        let region = region.grown(7600.0, 0.0);
        assert_eq!(region.width, 11250.0);
    }

    #[test]
    fn no_growth_below_max() {
        let region = ScrollRegion::new().grown(4999.0, 5000.0);
        assert_eq!(region.width, BASELINE_EXTENT);
        assert_eq!(region.height, BASELINE_EXTENT);
    }

    #[test]
    fn zero_scroll_is_guarded() {
        let region = ScrollRegion::new().grown(0.0, 0.0);
        assert_eq!(region, ScrollRegion::new());
    }

    #[test]
    fn axes_grow_independently() {
        let region = ScrollRegion::new().grown(100.0, 9000.0);
        assert_eq!(region.width, BASELINE_EXTENT);
        assert_eq!(region.height, 7500.0);
    }

    #[test]
    fn spacer_adds_edge_margin() {
        let region = ScrollRegion::new();
        assert_eq!(region.spacer_width(), BASELINE_EXTENT + EDGE_MARGIN);
        assert_eq!(region.spacer_height(), BASELINE_EXTENT + EDGE_MARGIN);
    }
}
