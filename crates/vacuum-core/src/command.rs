//! Commands accepted from the control surface, and their receipts.

use std::fmt;

use crate::direction::Rotation;
use crate::error::CommandError;
use crate::id::CommandSeq;
use crate::pose::PlacedPose;

/// Raw value of a numeric form field.
///
/// The control surface may deliver text straight from an input box, an
/// already-parsed number, or nothing at all. Parsing and range checks
/// happen in the engine's placement validator.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FieldInput {
    /// The field was left empty.
    #[default]
    Missing,
    /// Unparsed text.
    Text(String),
    /// A number supplied directly.
    Number(i64),
}

impl From<i64> for FieldInput {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for FieldInput {
    fn from(v: i32) -> Self {
        Self::Number(v.into())
    }
}

impl From<u32> for FieldInput {
    fn from(v: u32) -> Self {
        Self::Number(v.into())
    }
}

impl From<&str> for FieldInput {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<FieldInput>> From<Option<T>> for FieldInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Missing, Into::into)
    }
}

impl fmt::Display for FieldInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A candidate placement as collected by the form.
///
/// # Examples
///
/// ```
/// use vacuum_core::{FieldInput, PlacementRequest};
///
/// let req = PlacementRequest::new("1", 2, "East");
/// assert_eq!(req.x, FieldInput::Text("1".into()));
/// assert_eq!(req.y, FieldInput::Number(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PlacementRequest {
    /// Column input.
    pub x: FieldInput,
    /// Row input.
    pub y: FieldInput,
    /// Heading input; blank means none selected.
    pub direction: String,
}

impl PlacementRequest {
    /// Build a request from anything convertible to field inputs.
    pub fn new(x: impl Into<FieldInput>, y: impl Into<FieldInput>, direction: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            direction: direction.into(),
        }
    }

    /// The empty form.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A request that would re-place the agent exactly at `pose`.
    pub fn from_pose(pose: PlacedPose) -> Self {
        Self::new(pose.x, pose.y, pose.direction.as_str())
    }
}

/// Discriminant of a [`Command`], for receipts, errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// See [`Command::Place`].
    Place,
    /// See [`Command::Move`].
    Move,
    /// See [`Command::Rotate`].
    Rotate,
    /// See [`Command::Reset`].
    Reset,
    /// See [`Command::Report`].
    Report,
}

impl CommandKind {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::Move => "move",
            Self::Rotate => "rotate",
            Self::Reset => "reset",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command issued by the control surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Validate a candidate pose and make it current.
    Place(PlacementRequest),
    /// Step one cell along the current heading.
    Move,
    /// Turn 90° without changing cell.
    Rotate(Rotation),
    /// Return to the unplaced state.
    Reset,
    /// Read-only request for the current pose.
    Report,
}

impl Command {
    /// Shorthand for `Command::Place(PlacementRequest::new(..))`.
    pub fn place(x: impl Into<FieldInput>, y: impl Into<FieldInput>, direction: impl Into<String>) -> Self {
        Self::Place(PlacementRequest::new(x, y, direction))
    }

    /// The command's kind.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Place(_) => CommandKind::Place,
            Self::Move => CommandKind::Move,
            Self::Rotate(_) => CommandKind::Rotate,
            Self::Reset => CommandKind::Reset,
            Self::Report => CommandKind::Report,
        }
    }
}

/// Outcome of one submitted command.
///
/// # Examples
///
/// ```
/// use vacuum_core::{CommandKind, CommandSeq, Receipt};
///
/// let receipt = Receipt::accepted(CommandSeq(0), CommandKind::Move);
/// assert!(receipt.accepted);
/// assert!(receipt.reason.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Sequence number the session assigned to the command.
    pub seq: CommandSeq,
    /// What kind of command this was.
    pub command: CommandKind,
    /// Whether the command changed (or, for report, read) the state.
    pub accepted: bool,
    /// Why the command was rejected, if it was.
    pub reason: Option<CommandError>,
}

impl Receipt {
    /// Receipt for an accepted command.
    pub fn accepted(seq: CommandSeq, command: CommandKind) -> Self {
        Self {
            seq,
            command,
            accepted: true,
            reason: None,
        }
    }

    /// Receipt for a rejected command.
    pub fn rejected(seq: CommandSeq, command: CommandKind, reason: CommandError) -> Self {
        Self {
            seq,
            command,
            accepted: false,
            reason: Some(reason),
        }
    }

    /// Build a receipt from a handler result.
    pub fn from_result(seq: CommandSeq, command: CommandKind, result: Result<(), CommandError>) -> Self {
        match result {
            Ok(()) => Self::accepted(seq, command),
            Err(e) => Self::rejected(seq, command, e),
        }
    }
}
