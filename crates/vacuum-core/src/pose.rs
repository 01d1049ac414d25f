//! The agent pose.

use crate::direction::{Direction, Rotation};

/// A complete pose: a cell plus a heading.
///
/// A `PlacedPose` on its own says nothing about room bounds. Producing
/// one that lies inside the room is the engine's job; the engine never
/// hands out a pose outside the room it was validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacedPose {
    /// Column, increasing eastwards from 0.
    pub x: i32,
    /// Row, increasing northwards from 0.
    pub y: i32,
    /// Current heading.
    pub direction: Direction,
}

impl PlacedPose {
    /// Build a pose from its parts.
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Same cell, heading turned by `rotation`.
    pub fn rotated(self, rotation: Rotation) -> Self {
        Self {
            direction: self.direction.rotate(rotation),
            ..self
        }
    }

    /// Same heading, moved to `(x, y)`.
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

/// Current state of the agent.
///
/// `Unplaced` is the start-of-session state and the state after a reset.
/// It renders nothing and rejects move, rotate and report.
///
/// # Examples
///
/// ```
/// use vacuum_core::{Direction, PlacedPose, Pose};
///
/// let pose = Pose::Placed(PlacedPose::new(1, 2, Direction::East));
/// assert_eq!(pose.x(), Some(1));
/// assert_eq!(Pose::Unplaced.direction(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Pose {
    /// No valid placement has been accepted yet.
    #[default]
    Unplaced,
    /// The agent occupies a cell and faces a direction.
    Placed(PlacedPose),
}

impl Pose {
    /// Whether a placement is in effect.
    pub fn is_placed(&self) -> bool {
        matches!(self, Pose::Placed(_))
    }

    /// The placed pose, if any.
    pub fn placed(&self) -> Option<PlacedPose> {
        match self {
            Pose::Placed(p) => Some(*p),
            Pose::Unplaced => None,
        }
    }

    /// Column, or `None` while unplaced.
    pub fn x(&self) -> Option<i32> {
        self.placed().map(|p| p.x)
    }

    /// Row, or `None` while unplaced.
    pub fn y(&self) -> Option<i32> {
        self.placed().map(|p| p.y)
    }

    /// Heading, or `None` while unplaced.
    pub fn direction(&self) -> Option<Direction> {
        self.placed().map(|p| p.direction)
    }
}

impl From<PlacedPose> for Pose {
    fn from(p: PlacedPose) -> Self {
        Pose::Placed(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unplaced_is_default_and_empty() {
        let p = Pose::default();
        assert_eq!(p, Pose::Unplaced);
        assert!(!p.is_placed());
        assert_eq!((p.x(), p.y(), p.direction()), (None, None, None));
    }

    #[test]
    fn placed_exposes_fields() {
        let p: Pose = PlacedPose::new(3, 0, Direction::South).into();
        assert!(p.is_placed());
        assert_eq!((p.x(), p.y()), (Some(3), Some(0)));
        assert_eq!(p.direction(), Some(Direction::South));
    }

    #[test]
    fn rotated_keeps_cell() {
        let p = PlacedPose::new(1, 2, Direction::East).rotated(Rotation::Left);
        assert_eq!(p, PlacedPose::new(1, 2, Direction::North));
    }

    #[test]
    fn at_keeps_heading() {
        let p = PlacedPose::new(1, 2, Direction::East).at(2, 2);
        assert_eq!(p, PlacedPose::new(2, 2, Direction::East));
    }
}
