//! Rectangular cell selection.
//!
//! A selection is an anchor corner plus a live focus corner; either may be
//! on either side of the other, and normalization to top-left/bottom-right
//! happens only when the rectangle is consumed (rendering, copy, paste).
//! The all-`-1` record means "no selection" and doubles as the clipboard
//! wire format, so the struct serializes as the four raw integers.

use serde::{Deserialize, Serialize};

/// Sentinel coordinate for "no selection".
pub const NO_SELECTION: i64 = -1;

/// Selection rectangle: `(x1, y1)` is the anchor, `(x2, y2)` the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Default for Selection {
    fn default() -> Self {
        Self::none()
    }
}

impl Selection {
    /// The empty selection.
    pub fn none() -> Self {
        Self {
            x1: NO_SELECTION,
            y1: NO_SELECTION,
            x2: NO_SELECTION,
            y2: NO_SELECTION,
        }
    }

    /// Selection covering a single cell.
    pub fn cell(col: u32, row: u32) -> Self {
        Self {
            x1: i64::from(col),
            y1: i64::from(row),
            x2: i64::from(col),
            y2: i64::from(row),
        }
    }

    /// Active iff none of the four raw coordinates is the sentinel.
    pub fn is_active(&self) -> bool {
        self.x1 != NO_SELECTION
            && self.y1 != NO_SELECTION
            && self.x2 != NO_SELECTION
            && self.y2 != NO_SELECTION
    }

    /// Normalized copy: `(x1, y1)` min corner, `(x2, y2)` max corner,
    /// per axis independently.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Normalized corners as cell indices, `None` when inactive or when a
    /// coordinate does not map to a valid index.
    pub fn cell_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        if !self.is_active() {
            return None;
        }
        let n = self.normalized();
        Some((
            u32::try_from(n.x1).ok()?,
            u32::try_from(n.y1).ok()?,
            u32::try_from(n.x2).ok()?,
            u32::try_from(n.y2).ok()?,
        ))
    }
}

/// Owns the current selection and the selection-in-progress flag.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selection: Selection,
    in_progress: bool,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down on a cell: anchor = focus = cell, drag begins.
    pub fn begin(&mut self, col: u32, row: u32) {
        self.selection = Selection::cell(col, row);
        self.in_progress = true;
    }

    /// Pointer-move while dragging: move the focus corner only.
    /// Ignored when no drag is in progress. Returns true if the focus moved.
    pub fn extend(&mut self, col: u32, row: u32) -> bool {
        if !self.in_progress {
            return false;
        }
        let (x2, y2) = (i64::from(col), i64::from(row));
        if self.selection.x2 == x2 && self.selection.y2 == y2 {
            return false;
        }
        self.selection.x2 = x2;
        self.selection.y2 = y2;
        true
    }

    /// Pointer-up: the drag ends, the rectangle persists.
    pub fn end(&mut self) {
        self.in_progress = false;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the rectangle wholesale (paste extends the focus corner).
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_idempotent_and_symmetric() {
        let raw = Selection {
            x1: 7,
            y1: 2,
            x2: 3,
            y2: 9,
        };
        let swapped = Selection {
            x1: raw.x2,
            y1: raw.y2,
            x2: raw.x1,
            y2: raw.y1,
        };
        let n = raw.normalized();
        assert_eq!(n, swapped.normalized());
        assert_eq!(n, n.normalized());
        assert_eq!((n.x1, n.y1, n.x2, n.y2), (3, 2, 7, 9));
    }

    #[test]
    fn sentinel_means_inactive() {
        assert!(!Selection::none().is_active());
        assert!(Selection::cell(0, 0).is_active());
        let partial = Selection {
            x1: 0,
            y1: 0,
            x2: NO_SELECTION,
            y2: 0,
        };
        assert!(!partial.is_active());
        assert_eq!(partial.cell_bounds(), None);
    }

    #[test]
    fn drag_lifecycle() {
        let mut model = SelectionModel::new();
        model.begin(2, 3);
        assert!(model.in_progress());
        assert_eq!(model.selection(), Selection::cell(2, 3));

        assert!(model.extend(5, 1));
        assert_eq!(model.selection().x2, 5);
        assert_eq!(model.selection().y2, 1);
        // anchor unchanged
        assert_eq!(model.selection().x1, 2);
        assert_eq!(model.selection().y1, 3);

        model.end();
        assert!(!model.in_progress());
        // rectangle persists after the drag ends
        assert!(model.selection().is_active());
        // extend after end is a no-op
        assert!(!model.extend(9, 9));
        assert_eq!(model.selection().x2, 5);
    }
}
