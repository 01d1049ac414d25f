//! Error types for room construction and bounds checks.

use std::fmt;

/// Errors arising from room construction or coordinate checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the room.
    CoordOutOfBounds {
        /// The offending `(x, y)`.
        coord: (i64, i64),
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a room with zero cells.
    EmptySpace,
    /// A dimension exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "room must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
