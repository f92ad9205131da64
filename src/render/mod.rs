//! Frame rendering.
//!
//! Rendering is split in two: a pure frame builder that turns widget state
//! plus a data source into an ordered list of draw commands, and a Canvas
//! 2D executor that replays the list. Tests assert on the command list
//! directly, no drawing surface required.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use frame::render_frame;

/// Grid color palette - matches the classic sheet styling.
pub mod colors {
    /// Frame background.
    pub const BACKGROUND: &str = "white";
    /// Header band fill.
    pub const HEADER_BG: &str = "#f8f9fa";
    /// Grid and header separator lines.
    pub const GRID_LINE: &str = "#e2e3e3";
    /// Header label text.
    pub const HEADER_TEXT: &str = "#666666";
    /// Selection rectangle fill.
    pub const SELECTION_FILL: &str = "#e9f0fd";
    /// Selection rectangle border.
    pub const SELECTION_BORDER: &str = "#1b73e7";
    /// Cell content text.
    pub const CELL_TEXT: &str = "black";
}

/// Font for all grid text (headers and cell content).
pub const FONT: &str = "13px sans-serif";

/// Left padding for cell content text.
pub const CELL_TEXT_PADDING: f32 = 5.0;

/// Horizontal text alignment for a [`DrawCommand::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One immediate-mode drawing operation, in paint order.
///
/// Text is drawn with a middle baseline; `y` is the vertical center.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface with the background color.
    Clear { width: f32, height: f32 },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &'static str,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: &'static str,
        align: TextAlign,
    },
}
