//! Cardinal headings and the rotation table.
//!
//! [`Direction`] only has the four cardinal values. The "unset" heading
//! of a freshly started session is not a `Direction`: it is represented
//! by [`Pose::Unplaced`](crate::Pose::Unplaced) on state and by
//! `Option<Direction>` on input, so it can never reach [`Direction::rotate`].

use std::fmt;
use std::str::FromStr;

/// Cardinal heading of the agent.
///
/// Logical coordinates have their origin at the bottom-left cell, so
/// north increases `y` and east increases `x`.
///
/// # Examples
///
/// ```
/// use vacuum_core::{Direction, Rotation};
///
/// let heading: Direction = "East".parse().unwrap();
/// assert_eq!(heading.rotate(Rotation::Left), Direction::North);
/// assert_eq!(heading.offset(), (1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards increasing `y`.
    North,
    /// Towards decreasing `y`.
    South,
    /// Towards increasing `x`.
    East,
    /// Towards decreasing `x`.
    West,
}

impl Direction {
    /// All four headings, in the order the placement form lists them.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Heading after turning 90° in the given sense.
    ///
    /// The table is fixed and total over the cardinal values.
    pub fn rotate(self, rotation: Rotation) -> Direction {
        match (self, rotation) {
            (Direction::North, Rotation::Left) => Direction::West,
            (Direction::North, Rotation::Right) => Direction::East,
            (Direction::South, Rotation::Left) => Direction::East,
            (Direction::South, Rotation::Right) => Direction::West,
            (Direction::West, Rotation::Left) => Direction::South,
            (Direction::West, Rotation::Right) => Direction::North,
            (Direction::East, Rotation::Left) => Direction::North,
            (Direction::East, Rotation::Right) => Direction::South,
        }
    }

    /// Returns the `(dx, dy)` step for one move along this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Lowercase wire name (`"north"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Human-facing label (`"North"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    /// Parse an optional heading from form input.
    ///
    /// Blank input means "no heading selected" and yields `Ok(None)`.
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse_optional(input: &str) -> Result<Option<Direction>, ParseDirectionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
                expected: "one of north, south, east, west",
            })
    }
}

/// A 90° turn that leaves the agent's cell unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl Rotation {
    /// The opposite turn.
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
        }
    }

    /// Lowercase wire name (`"left"` or `"right"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Rotation::Left => "left",
            Rotation::Right => "right",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rotation {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("left") {
            Ok(Rotation::Left)
        } else if trimmed.eq_ignore_ascii_case("right") {
            Ok(Rotation::Right)
        } else {
            Err(ParseDirectionError {
                input: s.to_string(),
                expected: "left or right",
            })
        }
    }
}

/// Input string did not name a known heading or rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input, verbatim.
    pub input: String,
    /// Description of the accepted values.
    pub expected: &'static str,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised value {:?}: expected {}", self.input, self.expected)
    }
}

impl std::error::Error for ParseDirectionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::North),
            Just(Direction::South),
            Just(Direction::East),
            Just(Direction::West),
        ]
    }

    fn arb_rotation() -> impl Strategy<Value = Rotation> {
        prop_oneof![Just(Rotation::Left), Just(Rotation::Right)]
    }

    #[test]
    fn rotation_table_matches_convention() {
        assert_eq!(Direction::North.rotate(Rotation::Left), Direction::West);
        assert_eq!(Direction::North.rotate(Rotation::Right), Direction::East);
        assert_eq!(Direction::South.rotate(Rotation::Left), Direction::East);
        assert_eq!(Direction::South.rotate(Rotation::Right), Direction::West);
        assert_eq!(Direction::West.rotate(Rotation::Left), Direction::South);
        assert_eq!(Direction::West.rotate(Rotation::Right), Direction::North);
        assert_eq!(Direction::East.rotate(Rotation::Left), Direction::North);
        assert_eq!(Direction::East.rotate(Rotation::Right), Direction::South);
    }

    #[test]
    fn four_turns_return_to_start() {
        for d in Direction::ALL {
            let mut left = d;
            let mut right = d;
            for _ in 0..4 {
                left = left.rotate(Rotation::Left);
                right = right.rotate(Rotation::Right);
            }
            assert_eq!(left, d);
            assert_eq!(right, d);
        }
    }

    #[test]
    fn offsets_are_unit_steps() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert_eq!(dx.abs() + dy.abs(), 1, "{d} offset is not a unit step");
        }
        assert_eq!(Direction::North.offset(), (0, 1));
        assert_eq!(Direction::West.offset(), (-1, 0));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("South".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!(" EAST ".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!("Right".parse::<Rotation>().unwrap(), Rotation::Right);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "up".parse::<Direction>().unwrap_err();
        assert_eq!(err.input, "up");
        assert!("sideways".parse::<Rotation>().is_err());
    }

    #[test]
    fn blank_heading_is_unset() {
        assert_eq!(Direction::parse_optional("").unwrap(), None);
        assert_eq!(Direction::parse_optional("   ").unwrap(), None);
        assert_eq!(
            Direction::parse_optional("West").unwrap(),
            Some(Direction::West)
        );
        assert!(Direction::parse_optional("nowhere").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
        }
    }

    proptest! {
        #[test]
        fn left_then_right_is_identity(d in arb_direction(), r in arb_rotation()) {
            prop_assert_eq!(d.rotate(r).rotate(r.inverse()), d);
        }

        #[test]
        fn rotation_never_keeps_heading(d in arb_direction(), r in arb_rotation()) {
            prop_assert_ne!(d.rotate(r), d);
        }
    }
}
