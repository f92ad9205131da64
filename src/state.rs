//! Explicit widget state and event transitions.
//!
//! `GridState` owns everything the widget mutates: viewport, virtual
//! scroll region, selection model, and edit session. All input events are
//! synchronous transitions on this struct; each returns whether a redraw
//! is needed so the caller can schedule (or cancel and reschedule) a
//! frame. The struct is DOM-free and tests natively.

use crate::data::{CellChange, DataSource};
use crate::edit::EditSession;
use crate::layout::{Viewport, CELL_HEIGHT, CELL_WIDTH};
use crate::region::ScrollRegion;
use crate::selection::SelectionModel;

/// Placement for the edit input overlay, in logical surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditOverlayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// The virtual region grew; the scroll spacer needs resizing.
    pub region_grew: bool,
}

/// Widget action for a document-level keydown. `Ignore` leaves the event
/// to the browser's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CommitEdit,
    Copy,
    Paste,
    Ignore,
}

/// All mutable widget state.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    pub viewport: Viewport,
    pub region: ScrollRegion,
    pub selection: SelectionModel,
    pub edit: EditSession,
}

impl GridState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            region: ScrollRegion::new(),
            selection: SelectionModel::new(),
            edit: EditSession::new(),
        }
    }

    /// Cell under a surface-space point.
    pub fn cell_at_point(&self, x: f32, y: f32) -> (u32, u32) {
        let columns = self.viewport.columns();
        let rows = self.viewport.rows();
        self.viewport.cell_at_point(&columns, &rows, x, y)
    }

    /// Pointer-down: anchor a new selection at the hit cell.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let (col, row) = self.cell_at_point(x, y);
        self.selection.begin(col, row);
        true
    }

    /// Pointer-move: extend the selection focus while dragging.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.selection.in_progress() {
            return false;
        }
        let (col, row) = self.cell_at_point(x, y);
        self.selection.extend(col, row)
    }

    /// Pointer-up: the drag ends; the rectangle persists.
    pub fn pointer_up(&mut self) {
        self.selection.end();
    }

    /// Double-click: open an edit session on the hit cell, preloading the
    /// buffer, and return where to place the input overlay (inset one
    /// pixel inside the cell).
    pub fn begin_edit_at(&mut self, x: f32, y: f32, data: &dyn DataSource) -> EditOverlayRect {
        let (col, row) = self.cell_at_point(x, y);
        self.edit.begin(col, row, data);

        let columns = self.viewport.columns();
        let rows = self.viewport.rows();
        let (origin_x, origin_y) = self.viewport.cell_origin(&columns, &rows, col, row);
        EditOverlayRect {
            x: origin_x + 1.0,
            y: origin_y + 1.0,
            width: CELL_WIDTH - 2.0,
            height: CELL_HEIGHT - 2.0,
        }
    }

    /// Dispatch a document keydown. While an edit is open the overlay
    /// input owns every key except Enter - in particular the clipboard
    /// shortcuts must reach the input for native text copy/paste, not
    /// trigger a grid transfer underneath the open overlay.
    pub fn key_down(&self, key: &str, ctrl: bool) -> KeyAction {
        if self.edit.is_active() {
            if key == "Enter" {
                return KeyAction::CommitEdit;
            }
            return KeyAction::Ignore;
        }
        if ctrl && key.eq_ignore_ascii_case("c") {
            return KeyAction::Copy;
        }
        if ctrl && key.eq_ignore_ascii_case("v") {
            return KeyAction::Paste;
        }
        KeyAction::Ignore
    }

    /// Enter during an edit: commit the overlay's current text.
    pub fn commit_edit(&mut self, value: &str) -> Option<CellChange> {
        self.edit.set_buffer(value);
        self.edit.commit()
    }

    /// Scroll event: derive the new offsets and grow the virtual region
    /// when the position has passed it.
    pub fn on_scroll(&mut self, scroll_x: f32, scroll_y: f32) -> ScrollOutcome {
        self.viewport.scroll_x = scroll_x;
        self.viewport.scroll_y = scroll_y;
        let grown = self.region.grown(scroll_x, scroll_y);
        let region_grew = grown != self.region;
        self.region = grown;
        ScrollOutcome { region_grew }
    }

    /// Window resize: update the viewport extent.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }
}
