//! Clipboard copy/paste tests
//!
//! The clipboard carries a JSON selection record, not cell content; paste
//! re-reads the recorded source rectangle from the data source when it
//! runs and anchors the copy at the target selection's press corner.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::clipboard::{copy_payload, paste_changes};
use gridview::data::{CellChange, ChangeSink, DataSource, TableData};
use gridview::selection::Selection;

fn table(cells: &[(u32, u32, &str)]) -> TableData {
    let mut data = TableData::new();
    for &(row, col, value) in cells {
        data.set(row, col, value);
    }
    data
}

// =============================================================================
// Copy payload
// =============================================================================

#[test]
fn copy_writes_coordinates_not_content() {
    let payload = copy_payload(&Selection {
        x1: 1,
        y1: 2,
        x2: 3,
        y2: 4,
    });
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value["x1"], 1);
    assert_eq!(value["y1"], 2);
    assert_eq!(value["x2"], 3);
    assert_eq!(value["y2"], 4);
}

#[test]
fn copy_preserves_raw_drag_direction() {
    // An up-left drag serializes as-is; normalization happens on paste.
    let payload = copy_payload(&Selection {
        x1: 5,
        y1: 5,
        x2: 2,
        y2: 1,
    });
    let parsed: Selection = serde_json::from_str(&payload).unwrap();
    assert_eq!((parsed.x1, parsed.x2), (5, 2));
}

// =============================================================================
// Paste placement and content
// =============================================================================

#[test]
fn paste_reads_the_source_at_paste_time() {
    // Copy cell (0,0), then change it before pasting: the paste carries
    // the current value, not the value at copy time.
    let mut data = table(&[(0, 0, "old")]);
    let payload = copy_payload(&Selection::cell(0, 0));
    data.set(0, 0, "42");

    let target = Selection {
        x1: 0,
        y1: 0,
        x2: 1,
        y2: 1,
    };
    let outcome = paste_changes(&payload, target, &data).unwrap();

    assert_eq!(
        outcome.changes,
        vec![CellChange {
            row: 0,
            col: 0,
            value: Some("42".to_string()),
        }]
    );
}

#[test]
fn single_cell_copy_pastes_one_cell_regardless_of_target_size() {
    let data = table(&[(0, 0, "v")]);
    let payload = copy_payload(&Selection::cell(0, 0));
    let target = Selection {
        x1: 3,
        y1: 3,
        x2: 8,
        y2: 9,
    };

    let outcome = paste_changes(&payload, target, &data).unwrap();
    assert_eq!(outcome.changes.len(), 1);
    assert_eq!((outcome.changes[0].row, outcome.changes[0].col), (3, 3));
}

#[test]
fn rectangle_pastes_anchored_at_the_press_corner() {
    let data = table(&[(0, 0, "a"), (0, 1, "b"), (1, 0, "c"), (1, 1, "d")]);
    let payload = copy_payload(&Selection {
        x1: 0,
        y1: 0,
        x2: 1,
        y2: 1,
    });

    let outcome = paste_changes(&payload, Selection::cell(5, 10), &data).unwrap();
    assert_eq!(outcome.changes.len(), 4);

    let mut applied = TableData::new();
    applied.apply(&outcome.changes);
    assert_eq!(applied.get(10, 5).as_deref(), Some("a"));
    assert_eq!(applied.get(10, 6).as_deref(), Some("b"));
    assert_eq!(applied.get(11, 5).as_deref(), Some("c"));
    assert_eq!(applied.get(11, 6).as_deref(), Some("d"));
}

#[test]
fn empty_source_cells_clear_their_targets() {
    // The copied rectangle includes a hole; pasting writes the hole too.
    let data = table(&[(0, 0, "x")]);
    let payload = copy_payload(&Selection {
        x1: 0,
        y1: 0,
        x2: 1,
        y2: 0,
    });

    let mut target_data = table(&[(4, 3, "stale"), (4, 4, "stale")]);
    let outcome = paste_changes(&payload, Selection::cell(3, 4), &data).unwrap();
    target_data.apply(&outcome.changes);

    assert_eq!(target_data.get(4, 3).as_deref(), Some("x"));
    assert_eq!(target_data.get(4, 4), None);
}

#[test]
fn paste_extends_the_selection_by_the_source_size() {
    let data = TableData::new();
    let payload = copy_payload(&Selection {
        x1: 0,
        y1: 0,
        x2: 2,
        y2: 1,
    });
    let target = Selection {
        x1: 4,
        y1: 4,
        x2: 4,
        y2: 4,
    };

    let outcome = paste_changes(&payload, target, &data).unwrap();
    assert_eq!(
        outcome.selection,
        Selection {
            x1: 4,
            y1: 4,
            x2: 6,
            y2: 5,
        }
    );
}

#[test]
fn overlapping_paste_reads_before_writing() {
    // Paste one cell to the right of the source: every source value is
    // read before any change is applied, so nothing cascades.
    let mut data = table(&[(0, 0, "a"), (0, 1, "b")]);
    let payload = copy_payload(&Selection {
        x1: 0,
        y1: 0,
        x2: 1,
        y2: 0,
    });

    let outcome = paste_changes(&payload, Selection::cell(1, 0), &data).unwrap();
    data.apply(&outcome.changes);

    assert_eq!(data.get(0, 1).as_deref(), Some("a"));
    assert_eq!(data.get(0, 2).as_deref(), Some("b"));
}

// =============================================================================
// No-op conditions
// =============================================================================

#[test]
fn malformed_payload_is_ignored() {
    let data = TableData::new();
    assert!(paste_changes("not json", Selection::cell(0, 0), &data).is_none());
    assert!(paste_changes("[1,2,3]", Selection::cell(0, 0), &data).is_none());
}

#[test]
fn sentinel_payload_is_ignored() {
    let data = TableData::new();
    let payload = copy_payload(&Selection::none());
    assert!(paste_changes(&payload, Selection::cell(0, 0), &data).is_none());
}

#[test]
fn paste_without_a_target_selection_is_ignored() {
    let data = table(&[(0, 0, "x")]);
    let payload = copy_payload(&Selection::cell(0, 0));
    assert!(paste_changes(&payload, Selection::none(), &data).is_none());
}
