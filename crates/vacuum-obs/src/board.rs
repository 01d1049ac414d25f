//! Board layout: one entry per cell, for drawing the grid.

use vacuum_space::Room;

use crate::projection::{cell_offset, PixelOffset};

/// One drawable cell of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardCell {
    /// Logical column.
    pub x: i32,
    /// Logical row.
    pub y: i32,
    /// Top-left corner on the canvas.
    pub offset: PixelOffset,
    /// Coordinate label drawn in the cell corner, e.g. `(1, 2)`.
    pub label: String,
}

/// Every cell of `room` in visual order: top row first, left to right.
///
/// # Examples
///
/// ```
/// use vacuum_obs::board_cells;
/// use vacuum_space::Room;
///
/// let cells = board_cells(&Room::new(2, 2).unwrap(), 10);
/// let labels: Vec<_> = cells.iter().map(|c| c.label.as_str()).collect();
/// assert_eq!(labels, ["(0, 1)", "(1, 1)", "(0, 0)", "(1, 0)"]);
/// ```
pub fn board_cells(room: &Room, cell_size: u32) -> Vec<BoardCell> {
    let mut out = Vec::with_capacity(room.cell_count());
    for y in (0..room.height() as i32).rev() {
        for x in 0..room.width() as i32 {
            if let Some(offset) = cell_offset(room, cell_size, x, y) {
                out.push(BoardCell {
                    x,
                    y,
                    offset,
                    label: format!("({x}, {y})"),
                });
            }
        }
    }
    out
}
