//! Pure frame builder.
//!
//! `render_frame` is a function of (widget state, data source) to an
//! ordered draw-command list; it never mutates state. Paint order matters:
//! the selection fill goes under the grid lines, header bands are redrawn
//! over the grid so they never scroll, and the selection border goes over
//! the headers so it stays visible where it crosses them.

use crate::data::DataSource;
use crate::layout::{CELL_HEIGHT, CELL_WIDTH, COL_HEADER_HEIGHT, ROW_HEADER_WIDTH};
use crate::labels::{column_label, row_label};
use crate::state::GridState;

use super::{colors, DrawCommand, TextAlign, CELL_TEXT_PADDING};

/// Build one frame.
pub fn render_frame(state: &GridState, data: &dyn DataSource) -> Vec<DrawCommand> {
    let viewport = &state.viewport;
    let columns = viewport.columns();
    let rows = viewport.rows();
    let width = viewport.width;
    let height = viewport.height;

    let mut commands = Vec::new();

    commands.push(DrawCommand::Clear { width, height });

    // Selection rectangle in surface pixels. The bottom-right corner is
    // pushed out by one full cell so the focus cell is fully highlighted.
    let selection = state.selection.selection();
    let selection_rect = selection.cell_bounds().map(|(x1, y1, x2, y2)| {
        let (left, top) = viewport.cell_origin(&columns, &rows, x1, y1);
        let (right, bottom) = viewport.cell_origin(&columns, &rows, x2, y2);
        (
            left,
            top,
            right + CELL_WIDTH - left,
            bottom + CELL_HEIGHT - top,
        )
    });

    // 1. Selection fill, under the grid lines.
    if let Some((x, y, w, h)) = selection_rect {
        commands.push(DrawCommand::FillRect {
            x,
            y,
            width: w,
            height: h,
            color: colors::SELECTION_FILL,
        });
    }

    // 2. Row and column separator lines across the visible ranges.
    for row in &rows.cells {
        commands.push(DrawCommand::Line {
            x1: ROW_HEADER_WIDTH,
            y1: row.start,
            x2: width,
            y2: row.start,
            color: colors::GRID_LINE,
        });
    }
    for col in &columns.cells {
        commands.push(DrawCommand::Line {
            x1: col.start,
            y1: COL_HEADER_HEIGHT,
            x2: col.start,
            y2: height,
            color: colors::GRID_LINE,
        });
    }

    // 3. Header bands, opaque, over the grid so they never scroll.
    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: ROW_HEADER_WIDTH,
        height,
        color: colors::HEADER_BG,
    });
    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width,
        height: COL_HEADER_HEIGHT,
        color: colors::HEADER_BG,
    });

    // 4. Separator lines within each band.
    for row in &rows.cells {
        commands.push(DrawCommand::Line {
            x1: 0.0,
            y1: row.start,
            x2: ROW_HEADER_WIDTH,
            y2: row.start,
            color: colors::GRID_LINE,
        });
    }
    for col in &columns.cells {
        commands.push(DrawCommand::Line {
            x1: col.start,
            y1: 0.0,
            x2: col.start,
            y2: COL_HEADER_HEIGHT,
            color: colors::GRID_LINE,
        });
    }

    // 5. Header labels, centered in their header cell.
    for col in &columns.cells {
        commands.push(DrawCommand::Text {
            text: column_label(col.index),
            x: col.start + CELL_WIDTH * 0.5,
            y: COL_HEADER_HEIGHT * 0.5,
            color: colors::HEADER_TEXT,
            align: TextAlign::Center,
        });
    }
    for row in &rows.cells {
        commands.push(DrawCommand::Text {
            text: row_label(row.index),
            x: ROW_HEADER_WIDTH * 0.5,
            y: row.start + CELL_HEIGHT * 0.5,
            color: colors::HEADER_TEXT,
            align: TextAlign::Center,
        });
    }

    // 6. Selection border, over the headers.
    if let Some((x, y, w, h)) = selection_rect {
        commands.push(DrawCommand::StrokeRect {
            x,
            y,
            width: w,
            height: h,
            color: colors::SELECTION_BORDER,
        });
    }

    // 7. Cell content. Absent cells draw nothing; long text is not clipped
    // and may overflow into neighboring cells.
    for row in &rows.cells {
        for col in &columns.cells {
            let Some(content) = data.get(row.index, col.index) else {
                continue;
            };
            if content.is_empty() {
                continue;
            }
            commands.push(DrawCommand::Text {
                text: content,
                x: col.start + CELL_TEXT_PADDING,
                y: row.start + CELL_HEIGHT * 0.5,
                color: colors::CELL_TEXT,
                align: TextAlign::Left,
            });
        }
    }

    commands
}
