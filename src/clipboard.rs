//! Clipboard transfer of selection rectangles.
//!
//! Copy serializes the raw (unnormalized) selection coordinates as a JSON
//! record; no cell values travel through the clipboard. Paste parses the
//! record back, re-reads the source rectangle from the data source at
//! paste time, and replays it into a change-set at the current selection's
//! anchor. A record that fails to parse or does not map to cell indices is
//! silently ignored.

use crate::data::{CellChange, DataSource};
use crate::selection::Selection;

/// Result of a successful paste: the change-set to apply and the selection
/// with its focus corner extended by the pasted rectangle's extents.
#[derive(Debug, Clone, PartialEq)]
pub struct PasteOutcome {
    pub changes: Vec<CellChange>,
    pub selection: Selection,
}

/// Serialize the raw selection rectangle for the clipboard.
pub fn copy_payload(selection: &Selection) -> String {
    serde_json::to_string(selection).unwrap_or_default()
}

/// Replay a clipboard record into a change-set.
///
/// `selection` is the target: changes land at its raw anchor `(x1, y1)`.
/// Source values are read from `data` now, not from a copy-time snapshot,
/// so a source cell edited between copy and paste pastes its new value.
/// Returns `None` (no-op) when the payload is malformed, when its
/// coordinates do not map to cell indices, or when there is no active
/// target selection.
pub fn paste_changes(
    payload: &str,
    selection: Selection,
    data: &dyn DataSource,
) -> Option<PasteOutcome> {
    let record: Selection = serde_json::from_str(payload).ok()?;
    let (src_x1, src_y1, src_x2, src_y2) = record.cell_bounds()?;
    if !selection.is_active() {
        return None;
    }
    let anchor_x = u32::try_from(selection.x1).ok()?;
    let anchor_y = u32::try_from(selection.y1).ok()?;

    let x_len = src_x2 - src_x1;
    let y_len = src_y2 - src_y1;

    let mut changes = Vec::new();
    for dy in 0..=y_len {
        for dx in 0..=x_len {
            let value = data.get(src_y1 + dy, src_x1 + dx);
            changes.push(CellChange {
                row: anchor_y + dy,
                col: anchor_x + dx,
                value,
            });
        }
    }

    let selection = Selection {
        x1: selection.x1,
        y1: selection.y1,
        x2: selection.x2 + i64::from(x_len),
        y2: selection.y2 + i64::from(y_len),
    };

    Some(PasteOutcome { changes, selection })
}
