//! Room and pose fixtures.

use vacuum_core::{Direction, PlacedPose, Pose};
use vacuum_space::Room;

/// The 5×5 room used throughout the scenario tests.
pub fn room_5x5() -> Room {
    room(5, 5)
}

/// A room of the given size. Panics on invalid dimensions.
pub fn room(width: u32, height: u32) -> Room {
    Room::new(width, height).expect("fixture room dimensions must be valid")
}

/// A placed pose, without any bounds check.
pub fn placed_pose(x: i32, y: i32, direction: Direction) -> PlacedPose {
    PlacedPose::new(x, y, direction)
}

/// [`placed_pose`] wrapped in [`Pose::Placed`].
pub fn placed(x: i32, y: i32, direction: Direction) -> Pose {
    Pose::Placed(placed_pose(x, y, direction))
}
