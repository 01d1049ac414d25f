//! Rectangular room with bottom-left origin.

use crate::error::SpaceError;
use vacuum_core::Direction;

/// A `width × height` grid of cells.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`. The origin is the bottom-left cell; `y` grows
/// northwards. There is no wrap or clamp at the edges: a step that
/// would leave the room simply has no target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    width: u32,
    height: u32,
}

impl Room {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a room with `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacuum_core::Direction;
    /// use vacuum_space::Room;
    ///
    /// let room = Room::new(5, 5).unwrap();
    /// assert_eq!(room.cell_count(), 25);
    /// assert_eq!(room.step(4, 2, Direction::North), Some((4, 3)));
    /// assert_eq!(room.step(4, 2, Direction::East), None);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` is a cell of this room.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < i64::from(self.width) && y >= 0 && y < i64::from(self.height)
    }

    /// Check that `(x, y)` is in bounds and return it as `i32`s.
    pub fn check_bounds(&self, x: i64, y: i64) -> Result<(i32, i32), SpaceError> {
        if !self.contains(x, y) {
            return Err(SpaceError::CoordOutOfBounds {
                coord: (x, y),
                bounds: format!("[0, {}) x [0, {})", self.width, self.height),
            });
        }
        // In range of [0, MAX_DIM) so the casts are lossless.
        Ok((x as i32, y as i32))
    }

    /// The cell one step from `(x, y)` along `direction`, or `None` if
    /// that step leaves the room.
    pub fn step(&self, x: i32, y: i32, direction: Direction) -> Option<(i32, i32)> {
        let (dx, dy) = direction.offset();
        let nx = i64::from(x) + i64::from(dx);
        let ny = i64::from(y) + i64::from(dy);
        self.check_bounds(nx, ny).ok()
    }

    /// Row-major ordering from the origin: `(0,0), (1,0), ..., (w-1,h-1)`.
    pub fn canonical_ordering(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::with_capacity(self.cell_count());
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                out.push((x, y));
            }
        }
        out
    }
}
