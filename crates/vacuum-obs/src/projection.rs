//! Logical-to-pixel projection.
//!
//! `left = x * cell_size` and `top = (height - 1 - y) * cell_size`, so
//! that moving north moves the marker up the screen.

use vacuum_core::{Direction, Pose};
use vacuum_space::Room;

use crate::board::{board_cells, BoardCell};
use crate::indicator::{FacingIndicator, MarkerStyle};

/// Top-left corner of something on the canvas, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PixelOffset {
    /// Distance from the canvas' left edge.
    pub left: u32,
    /// Distance from the canvas' top edge.
    pub top: u32,
}

/// An axis-aligned rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    /// Left edge.
    pub left: u32,
    /// Top edge.
    pub top: u32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

/// Pixel offset of cell `(x, y)`, or `None` if the cell is outside the room.
pub fn cell_offset(room: &Room, cell_size: u32, x: i32, y: i32) -> Option<PixelOffset> {
    let (x, y) = room.check_bounds(x.into(), y.into()).ok()?;
    let row_from_top = room.height() - 1 - y as u32;
    Some(PixelOffset {
        left: (x as u32).saturating_mul(cell_size),
        top: row_from_top.saturating_mul(cell_size),
    })
}

/// Pixel offset of the agent's cell, or `None` while unplaced.
///
/// # Examples
///
/// ```
/// use vacuum_core::{Direction, PlacedPose, Pose};
/// use vacuum_obs::{project, PixelOffset};
/// use vacuum_space::Room;
///
/// let room = Room::new(5, 5).unwrap();
/// let pose = Pose::Placed(PlacedPose::new(1, 0, Direction::North));
/// assert_eq!(project(&pose, &room, 160), Some(PixelOffset { left: 160, top: 640 }));
/// assert_eq!(project(&Pose::Unplaced, &room, 160), None);
/// ```
pub fn project(pose: &Pose, room: &Room, cell_size: u32) -> Option<PixelOffset> {
    let p = pose.placed()?;
    cell_offset(room, cell_size, p.x, p.y)
}

/// Canvas size `(width, height)` in pixels.
pub fn canvas_size(room: &Room, cell_size: u32) -> (u32, u32) {
    (
        room.width().saturating_mul(cell_size),
        room.height().saturating_mul(cell_size),
    )
}

/// Everything needed to draw the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Offset of the agent's cell.
    pub cell: PixelOffset,
    /// The marker's absolute rectangle, centred in its cell.
    pub bounds: PixelRect,
    /// Heading being drawn.
    pub direction: Direction,
    /// Facing bar, relative to `bounds`' top-left corner.
    pub facing: FacingIndicator,
}

/// A room, a cell size and a marker style bundled for repeated projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projection {
    room: Room,
    cell_size: u32,
    style: MarkerStyle,
}

impl Projection {
    /// Bundle the projection inputs. The style is not checked against
    /// the cell size here; see [`MarkerStyle::fits`].
    pub fn new(room: Room, cell_size: u32, style: MarkerStyle) -> Self {
        Self {
            room,
            cell_size,
            style,
        }
    }

    /// The room being projected.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Side length of one cell, in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The marker style in use.
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    /// Canvas size `(width, height)` in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        canvas_size(&self.room, self.cell_size)
    }

    /// Marker geometry for `pose`, or `None` while unplaced.
    pub fn marker(&self, pose: &Pose) -> Option<Marker> {
        let p = pose.placed()?;
        let cell = cell_offset(&self.room, self.cell_size, p.x, p.y)?;
        let margin = self.cell_size.saturating_sub(self.style.size) / 2;
        Some(Marker {
            cell,
            bounds: PixelRect {
                left: cell.left.saturating_add(margin),
                top: cell.top.saturating_add(margin),
                width: self.style.size,
                height: self.style.size,
            },
            direction: p.direction,
            facing: self.style.indicator(p.direction),
        })
    }

    /// All board cells in visual order.
    pub fn board(&self) -> Vec<BoardCell> {
        board_cells(&self.room, self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::MarkerEdge;
    use proptest::prelude::*;
    use vacuum_core::PlacedPose;
    use vacuum_test_utils::{placed, room_5x5};

    #[test]
    fn origin_is_bottom_left() {
        let room = room_5x5();
        assert_eq!(
            cell_offset(&room, 160, 0, 0),
            Some(PixelOffset { left: 0, top: 640 })
        );
        assert_eq!(
            cell_offset(&room, 160, 0, 4),
            Some(PixelOffset { left: 0, top: 0 })
        );
        assert_eq!(
            cell_offset(&room, 160, 4, 4),
            Some(PixelOffset { left: 640, top: 0 })
        );
    }

    #[test]
    fn outside_cells_have_no_offset() {
        let room = room_5x5();
        assert_eq!(cell_offset(&room, 160, 5, 0), None);
        assert_eq!(cell_offset(&room, 160, 0, -1), None);
    }

    #[test]
    fn unplaced_projects_nothing() {
        let room = room_5x5();
        assert_eq!(project(&Pose::Unplaced, &room, 160), None);
        let proj = Projection::new(room, 160, MarkerStyle::default());
        assert_eq!(proj.marker(&Pose::Unplaced), None);
    }

    #[test]
    fn non_square_room_inverts_rows_by_height() {
        let room = vacuum_space::Room::new(3, 7).unwrap();
        assert_eq!(
            cell_offset(&room, 10, 2, 1),
            Some(PixelOffset { left: 20, top: 50 })
        );
        assert_eq!(canvas_size(&room, 10), (30, 70));
    }

    #[test]
    fn marker_is_centred_in_cell() {
        let proj = Projection::new(room_5x5(), 160, MarkerStyle::default());
        let m = proj.marker(&placed(1, 2, Direction::East)).unwrap();
        assert_eq!(m.cell, PixelOffset { left: 160, top: 320 });
        assert_eq!(
            m.bounds,
            PixelRect {
                left: 162,
                top: 322,
                width: 156,
                height: 156
            }
        );
        assert_eq!(m.direction, Direction::East);
        assert_eq!(m.facing.edge, MarkerEdge::Right);
    }

    #[test]
    fn projection_is_deterministic() {
        let room = room_5x5();
        let pose = Pose::Placed(PlacedPose::new(3, 1, Direction::West));
        assert_eq!(project(&pose, &room, 64), project(&pose, &room, 64));
    }

    proptest! {
        #[test]
        fn moving_north_moves_up(x in 0i32..5, y in 0i32..4, cell in 1u32..200) {
            let room = room_5x5();
            let below = cell_offset(&room, cell, x, y).unwrap();
            let above = cell_offset(&room, cell, x, y + 1).unwrap();
            prop_assert_eq!(below.left, above.left);
            prop_assert_eq!(below.top, above.top + cell);
        }
    }
}
