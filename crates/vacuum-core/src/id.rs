//! Strongly-typed identifiers.

use std::fmt;

/// Per-session command sequence number.
///
/// Assigned by the session in submission order, starting at 0. Reset
/// does not rewind it, so a sequence number identifies one command for
/// the whole life of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CommandSeq(pub u64);

impl CommandSeq {
    /// The sequence number following this one.
    pub fn next(self) -> CommandSeq {
        CommandSeq(self.0 + 1)
    }
}

impl fmt::Display for CommandSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CommandSeq {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
