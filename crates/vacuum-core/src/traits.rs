//! Collaborator traits.

use crate::id::CommandSeq;

/// A user-facing notification raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// The command that caused the notice.
    pub seq: CommandSeq,
    /// Text to show.
    pub message: String,
}

/// Receives notifications for the presentation layer.
///
/// The session calls [`notify`](NotificationSink::notify) once per
/// refused move. Implementations decide how many notices to keep and
/// for how long; they must not block.
pub trait NotificationSink: Send {
    /// Deliver one notice.
    fn notify(&mut self, notice: Notice);
}
