//! Pose transitions: move, rotate and the pure command handler.
//!
//! Nothing here mutates. Every function takes the current pose by value
//! and returns the next one; on rejection the returned pose is the
//! input pose.

use vacuum_core::{
    BoundaryViolation, Command, CommandError, CommandKind, PlacedPose, Pose, Rotation,
};
use vacuum_space::Room;

use crate::placement::validate_placement;

/// Step one cell along the current heading.
///
/// The heading never changes. A step that would leave the room is
/// refused with a [`BoundaryViolation`] naming the blocked heading.
pub fn apply_move(pose: PlacedPose, room: &Room) -> Result<PlacedPose, BoundaryViolation> {
    room.step(pose.x, pose.y, pose.direction)
        .map(|(x, y)| pose.at(x, y))
        .ok_or(BoundaryViolation {
            from: pose,
            direction: pose.direction,
        })
}

/// Turn 90° in place. Total over placed poses.
pub fn apply_rotation(pose: PlacedPose, rotation: Rotation) -> PlacedPose {
    pose.rotated(rotation)
}

/// Result of applying one command to a pose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The pose after the command. Equal to the input pose on error.
    pub pose: Pose,
    /// Whether the command was accepted.
    pub result: Result<(), CommandError>,
}

impl Transition {
    fn accept(pose: impl Into<Pose>) -> Self {
        Self {
            pose: pose.into(),
            result: Ok(()),
        }
    }

    fn reject(pose: Pose, error: impl Into<CommandError>) -> Self {
        Self {
            pose,
            result: Err(error.into()),
        }
    }

    /// Whether the command was accepted.
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Apply `command` to `pose` inside `room`.
///
/// # Examples
///
/// ```
/// use vacuum_core::{Command, Direction, PlacedPose, Pose, Rotation};
/// use vacuum_engine::handle;
/// use vacuum_space::Room;
///
/// let room = Room::new(5, 5).unwrap();
/// let t = handle(Pose::Unplaced, &Command::place(1, 2, "east"), &room);
/// let t = handle(t.pose, &Command::Rotate(Rotation::Left), &room);
/// assert_eq!(t.pose, Pose::Placed(PlacedPose::new(1, 2, Direction::North)));
///
/// let blocked = handle(Pose::Unplaced, &Command::Move, &room);
/// assert!(blocked.result.is_err());
/// assert_eq!(blocked.pose, Pose::Unplaced);
/// ```
pub fn handle(pose: Pose, command: &Command, room: &Room) -> Transition {
    match command {
        Command::Place(request) => match validate_placement(request, room) {
            Ok(placed) => Transition::accept(placed),
            Err(e) => Transition::reject(pose, e),
        },
        Command::Reset => Transition::accept(Pose::Unplaced),
        Command::Move => match require_placed(pose, CommandKind::Move) {
            Ok(placed) => match apply_move(placed, room) {
                Ok(next) => Transition::accept(next),
                Err(v) => Transition::reject(pose, v),
            },
            Err(e) => Transition::reject(pose, e),
        },
        Command::Rotate(rotation) => match require_placed(pose, CommandKind::Rotate) {
            Ok(placed) => Transition::accept(apply_rotation(placed, *rotation)),
            Err(e) => Transition::reject(pose, e),
        },
        Command::Report => match require_placed(pose, CommandKind::Report) {
            Ok(_) => Transition::accept(pose),
            Err(e) => Transition::reject(pose, e),
        },
    }
}

fn require_placed(pose: Pose, command: CommandKind) -> Result<PlacedPose, CommandError> {
    pose.placed().ok_or(CommandError::NotPlaced { command })
}
