//! Cell data interfaces and the in-memory backing store.
//!
//! The grid core never owns the meaning of cell values; it reads text
//! through [`DataSource`] and pushes edits through [`ChangeSink`]. The
//! widget ships with [`TableData`], a sparse store the host seeds and the
//! editing/paste paths mutate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One cell edit: set `(row, col)` to `value`, or clear it when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub row: u32,
    pub col: u32,
    pub value: Option<String>,
}

/// Read access to cell text. Absent cells return `None`.
pub trait DataSource {
    fn get(&self, row: u32, col: u32) -> Option<String>;
}

/// Write access for committed edits.
///
/// Must tolerate duplicate `(row, col)` pairs; changes apply in sequence
/// order, later wins.
pub trait ChangeSink {
    fn apply(&mut self, changes: &[CellChange]);
}

/// Sparse in-memory cell store keyed by `(row, col)`.
#[derive(Debug, Default, Clone)]
pub struct TableData {
    cells: HashMap<(u32, u32), String>,
}

impl TableData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load seed data from a JSON object keyed by row index, each value an
    /// object keyed by column index: `{"0": {"0": "hello", "3": "x"}}`.
    ///
    /// Replaces the current contents.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let rows: HashMap<u32, HashMap<u32, String>> = serde_json::from_str(json)?;
        self.cells.clear();
        for (row, cols) in rows {
            for (col, value) in cols {
                if !value.is_empty() {
                    self.cells.insert((row, col), value);
                }
            }
        }
        Ok(())
    }

    /// Set a single cell. Empty text clears the cell.
    pub fn set(&mut self, row: u32, col: u32, value: &str) {
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl DataSource for TableData {
    fn get(&self, row: u32, col: u32) -> Option<String> {
        self.cells.get(&(row, col)).cloned()
    }
}

impl ChangeSink for TableData {
    fn apply(&mut self, changes: &[CellChange]) {
        for change in changes {
            match &change.value {
                Some(value) if !value.is_empty() => {
                    self.cells.insert((change.row, change.col), value.clone());
                }
                _ => {
                    self.cells.remove(&(change.row, change.col));
                }
            }
        }
    }
}
