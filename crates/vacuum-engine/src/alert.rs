//! The edge alert: a transient boundary-violation flag.
//!
//! A refused move raises the alert with a deadline. The alert is
//! dropped when the deadline passes, or earlier when any later command
//! supersedes it. Scheduled clears carry the [`CommandSeq`] of the
//! violation that raised them, so a clear scheduled for an old
//! violation cannot drop a newer one.

use std::time::{Duration, Instant};

use vacuum_core::{CommandSeq, Direction};

/// Token for a scheduled clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PendingClear {
    /// The violation this clear belongs to.
    pub seq: CommandSeq,
    /// When the clear should run.
    pub deadline: Instant,
}

/// The currently raised alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveAlert {
    /// The refused move.
    pub seq: CommandSeq,
    /// The blocked heading.
    pub direction: Direction,
    /// When the alert clears on its own.
    pub deadline: Instant,
}

impl ActiveAlert {
    /// The clear token for this alert.
    pub fn pending_clear(&self) -> PendingClear {
        PendingClear {
            seq: self.seq,
            deadline: self.deadline,
        }
    }
}

/// At most one active alert.
#[derive(Clone, Debug, Default)]
pub struct EdgeAlert {
    active: Option<ActiveAlert>,
}

impl EdgeAlert {
    /// A lowered alert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise (or re-raise) the alert for violation `seq`.
    ///
    /// Any previous alert and its pending clear are replaced.
    pub fn raise(
        &mut self,
        seq: CommandSeq,
        direction: Direction,
        now: Instant,
        clear_after: Duration,
    ) -> PendingClear {
        let alert = ActiveAlert {
            seq,
            direction,
            deadline: now + clear_after,
        };
        self.active = Some(alert);
        alert.pending_clear()
    }

    /// Drop the alert unconditionally. Returns whether one was active.
    pub fn clear(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Run a scheduled clear. Only drops the alert if `token` still
    /// belongs to it.
    pub fn clear_if(&mut self, token: PendingClear) -> bool {
        match self.active {
            Some(a) if a.seq == token.seq => self.clear(),
            _ => false,
        }
    }

    /// Drop the alert if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.active {
            Some(a) if a.deadline <= now => self.clear(),
            _ => false,
        }
    }

    /// Whether an alert is raised.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The raised alert, if any.
    pub fn active(&self) -> Option<&ActiveAlert> {
        self.active.as_ref()
    }

    /// The clear scheduled for the raised alert, if any.
    pub fn pending(&self) -> Option<PendingClear> {
        self.active.map(|a| a.pending_clear())
    }
}
