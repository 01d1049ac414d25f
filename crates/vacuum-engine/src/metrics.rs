//! Cumulative session counters.
//!
//! [`SessionMetrics`] is updated by [`Session`](crate::Session) on every
//! submitted command and every alert clear.

/// Counters collected over the life of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    /// Every command submitted, accepted or not.
    pub commands_submitted: u64,
    /// Commands that were accepted.
    pub commands_accepted: u64,
    /// Placements rejected by validation.
    pub placement_rejections: u64,
    /// Moves refused at the room edge.
    pub boundary_violations: u64,
    /// Move, rotate or report issued while unplaced.
    pub invalid_operations: u64,
    /// Accepted resets.
    pub resets: u64,
    /// Edge alerts cleared, by timeout or by a superseding command.
    pub alert_clears: u64,
}

impl SessionMetrics {
    /// Commands that were rejected for any reason.
    pub fn commands_rejected(&self) -> u64 {
        self.commands_submitted - self.commands_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SessionMetrics::default();
        assert_eq!(m.commands_submitted, 0);
        assert_eq!(m.commands_accepted, 0);
        assert_eq!(m.placement_rejections, 0);
        assert_eq!(m.boundary_violations, 0);
        assert_eq!(m.invalid_operations, 0);
        assert_eq!(m.resets, 0);
        assert_eq!(m.alert_clears, 0);
    }

    #[test]
    fn rejected_is_the_difference() {
        let m = SessionMetrics {
            commands_submitted: 7,
            commands_accepted: 4,
            ..SessionMetrics::default()
        };
        assert_eq!(m.commands_rejected(), 3);
    }
}
