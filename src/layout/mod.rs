//! Layout engine: visible-range computation and viewport coordinate mapping.
//!
//! This module handles:
//! - Computing the visible cell spans for one axis from the scroll offset
//! - Managing viewport state (scroll position, logical extent)
//! - Binary search for cell hit testing at screen coordinates
//! - Pixel placement for cells, including linear extrapolation off-screen

mod viewport;
mod visible;

pub use viewport::Viewport;
pub use visible::{AxisRange, VisibleCell};

/// Cell width in logical pixels.
pub const CELL_WIDTH: f32 = 100.0;

/// Cell height in logical pixels.
pub const CELL_HEIGHT: f32 = 22.0;

/// Width of the row-number header band.
pub const ROW_HEADER_WIDTH: f32 = 50.0;

/// Height of the column-letter header band.
pub const COL_HEADER_HEIGHT: f32 = 22.0;
