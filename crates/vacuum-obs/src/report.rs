//! The report: a read-only snapshot of the pose for display.

use std::fmt;

use vacuum_core::{Direction, PlacedPose, Pose};

/// Displayable pose snapshot.
///
/// Renders as three lines: `X: <x>`, `Y: <y>`, `Direction: <HEADING>`.
///
/// # Examples
///
/// ```
/// use vacuum_core::{Direction, PlacedPose};
/// use vacuum_obs::Report;
///
/// let report = Report::from(PlacedPose::new(1, 2, Direction::East));
/// assert_eq!(report.to_string(), "X: 1\nY: 2\nDirection: EAST");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Heading.
    pub direction: Direction,
}

impl Report {
    /// Report for `pose`, or `None` while unplaced.
    pub fn from_pose(pose: &Pose) -> Option<Self> {
        pose.placed().map(Self::from)
    }

    /// The three display lines.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("X: {}", self.x),
            format!("Y: {}", self.y),
            format!("Direction: {}", self.direction.as_str().to_uppercase()),
        ]
    }
}

impl From<PlacedPose> for Report {
    fn from(p: PlacedPose) -> Self {
        Self {
            x: p.x,
            y: p.y,
            direction: p.direction,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, d] = self.lines();
        write!(f, "{x}\n{y}\n{d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_uppercased_heading() {
        let r = Report::from(PlacedPose::new(0, 4, Direction::West));
        assert_eq!(r.lines(), ["X: 0", "Y: 4", "Direction: WEST"]);
    }

    #[test]
    fn unplaced_has_no_report() {
        assert_eq!(Report::from_pose(&Pose::Unplaced), None);
        let placed = Pose::Placed(PlacedPose::new(2, 3, Direction::South));
        assert_eq!(
            Report::from_pose(&placed).map(|r| r.to_string()),
            Some("X: 2\nY: 3\nDirection: SOUTH".to_string())
        );
    }
}
