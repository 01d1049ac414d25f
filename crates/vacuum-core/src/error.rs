//! Error types for the Vacuum simulator.
//!
//! Three kinds of rejection exist, mirrored by [`CommandError`]:
//! placement validation, boundary violation on move, and operations
//! issued while no pose is placed. None of them are fatal; each leaves
//! the current pose untouched.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;

use crate::command::CommandKind;
use crate::direction::Direction;
use crate::pose::PlacedPose;

/// A field of the placement form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// The column input.
    X,
    /// The row input.
    Y,
    /// The heading selector.
    Direction,
}

impl FormField {
    /// Label used at the start of validation messages.
    pub fn label(self) -> &'static str {
        match self {
            FormField::X => "X",
            FormField::Y => "Y",
            FormField::Direction => "Direction",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single form field was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// No value was supplied.
    Required,
    /// The text could not be read as an integer.
    NotAWholeNumber {
        /// The rejected input.
        input: String,
    },
    /// The value is below the lowest valid coordinate.
    BelowMinimum {
        /// Smallest accepted value.
        min: i64,
    },
    /// The value is at or past the room edge.
    NotBelow {
        /// Exclusive upper bound (the room width or height).
        limit: u32,
    },
    /// The heading text is not one of the four cardinal names.
    UnknownDirection {
        /// The rejected input.
        input: String,
    },
}

impl FieldError {
    /// User-facing message for this error on `field`.
    ///
    /// ```
    /// use vacuum_core::{FieldError, FormField};
    ///
    /// let e = FieldError::NotBelow { limit: 5 };
    /// assert_eq!(e.message(FormField::X), "X must be less than 5");
    /// ```
    pub fn message(&self, field: FormField) -> String {
        let label = field.label();
        match self {
            Self::Required => format!("{label} is required"),
            Self::NotAWholeNumber { .. } => format!("{label} must be a whole number"),
            Self::BelowMinimum { min } => format!("{label} must not be less than {min}"),
            Self::NotBelow { limit } => format!("{label} must be less than {limit}"),
            Self::UnknownDirection { .. } => {
                format!("{label} must be one of North, South, East, West")
            }
        }
    }
}

/// A rejected placement, with one error per failing form field.
///
/// Fields keep the order in which they were reported, which for the
/// engine is form order: X, Y, Direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementError {
    fields: IndexMap<FormField, FieldError>,
}

impl PlacementError {
    /// An empty error, to be filled with [`push`](Self::push).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first error recorded for a field wins.
    pub fn push(&mut self, field: FormField, error: FieldError) {
        self.fields.entry(field).or_insert(error);
    }

    /// Whether no field has failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The error for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.fields.get(&field)
    }

    /// Failing fields and their errors, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.fields.iter().map(|(f, e)| (*f, e))
    }

    /// The message shown next to `field`, if it failed.
    pub fn message_for(&self, field: FormField) -> Option<String> {
        self.get(field).map(|e| e.message(field))
    }

    /// All messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.iter().map(|(f, e)| e.message(f)).collect()
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "invalid placement");
        }
        write!(f, "{}", self.messages().join("; "))
    }
}

impl Error for PlacementError {}

/// A move refused because the cell ahead lies outside the room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryViolation {
    /// The pose the move was attempted from. It is also the pose after
    /// the refusal.
    pub from: PlacedPose,
    /// The blocked heading.
    pub direction: Direction,
}

impl BoundaryViolation {
    /// Notification text for the presentation layer.
    ///
    /// ```
    /// use vacuum_core::{BoundaryViolation, Direction, PlacedPose};
    ///
    /// let v = BoundaryViolation {
    ///     from: PlacedPose::new(0, 4, Direction::North),
    ///     direction: Direction::North,
    /// };
    /// assert_eq!(v.message(), "Cannot move North, please rotate to a valid direction");
    /// ```
    pub fn message(&self) -> String {
        format!(
            "Cannot move {}, please rotate to a valid direction",
            self.direction.label()
        )
    }
}

impl fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Error for BoundaryViolation {}

/// Why a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The placement request failed validation.
    Placement(PlacementError),
    /// The move would leave the room.
    Boundary(BoundaryViolation),
    /// The command needs a placed pose and there is none.
    NotPlaced {
        /// The rejected command.
        command: CommandKind,
    },
}

impl CommandError {
    /// The boundary violation, if that is what this error is.
    pub fn as_boundary(&self) -> Option<&BoundaryViolation> {
        match self {
            Self::Boundary(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placement(e) => write!(f, "placement rejected: {e}"),
            Self::Boundary(v) => write!(f, "boundary violation: {v}"),
            Self::NotPlaced { command } => {
                write!(f, "cannot {command} before the vacuum is placed")
            }
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Placement(e) => Some(e),
            Self::Boundary(v) => Some(v),
            Self::NotPlaced { .. } => None,
        }
    }
}

impl From<PlacementError> for CommandError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

impl From<BoundaryViolation> for CommandError {
    fn from(v: BoundaryViolation) -> Self {
        Self::Boundary(v)
    }
}
