//! Single-cell edit session.
//!
//! At most one edit is active at a time: double-click opens a session with
//! the buffer preloaded from the data source, Enter commits through the
//! change sink and returns to idle. There is no user-facing cancel path;
//! beginning a new session discards any uncommitted buffer.

use crate::data::{CellChange, DataSource};

/// The active edit, if any: target cell plus working text buffer.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    cell: Option<(u32, u32)>,
    buffer: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin editing `(col, row)`, preloading the buffer from the data
    /// source (empty when the cell is absent). Any previous uncommitted
    /// buffer is discarded.
    pub fn begin(&mut self, col: u32, row: u32, data: &dyn DataSource) {
        self.cancel();
        self.cell = Some((col, row));
        self.buffer = data.get(row, col).unwrap_or_default();
    }

    /// Replace the working buffer (mirrors the overlay input's value).
    pub fn set_buffer(&mut self, text: &str) {
        if self.cell.is_some() {
            self.buffer = text.to_string();
        }
    }

    /// Commit the buffer: emits the change for the target cell and returns
    /// to idle. An empty buffer commits a clear. Returns `None` when no
    /// edit is active.
    pub fn commit(&mut self) -> Option<CellChange> {
        let (col, row) = self.cell.take()?;
        let value = std::mem::take(&mut self.buffer);
        Some(CellChange {
            row,
            col,
            value: (!value.is_empty()).then_some(value),
        })
    }

    /// Internal reset used when a new session displaces this one.
    pub fn cancel(&mut self) {
        self.cell = None;
        self.buffer.clear();
    }

    pub fn is_active(&self) -> bool {
        self.cell.is_some()
    }

    pub fn cell(&self) -> Option<(u32, u32)> {
        self.cell
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
