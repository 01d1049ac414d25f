//! A single simulation session.
//!
//! [`Session`] threads the pose through [`handle`] and commits whatever
//! it returns. On top of the pure transition it keeps the bookkeeping a
//! presentation layer needs: command numbering, the edge alert, the
//! notification sink, the last accepted placement and metrics.
//!
//! Time is always passed in. A session never reads the clock itself,
//! so tests can drive alert deadlines deterministically.

use std::time::Instant;

use log::{debug, info, trace, warn};
use vacuum_core::{
    Command, CommandError, CommandSeq, Notice, NotificationSink, PlacementRequest, Pose, Receipt,
};
use vacuum_obs::{BoardCell, Marker, Projection, Report};
use vacuum_space::Room;

use crate::alert::{ActiveAlert, EdgeAlert, PendingClear};
use crate::config::{ConfigError, SessionConfig};
use crate::metrics::SessionMetrics;
use crate::notify::NoticeQueue;
use crate::transition::handle;

/// Which controls the presentation layer should enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// The placement form. Always enabled.
    pub place: bool,
    /// The move button.
    pub move_forward: bool,
    /// Both rotate buttons.
    pub rotate: bool,
    /// The report button.
    pub report: bool,
}

impl ControlState {
    /// Controls for `pose`: everything but placement needs a placed pose.
    pub fn for_pose(pose: &Pose) -> Self {
        let placed = pose.is_placed();
        Self {
            place: true,
            move_forward: placed,
            rotate: placed,
            report: placed,
        }
    }
}

/// Snapshot of everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    /// Current pose.
    pub pose: Pose,
    /// Report lines, while placed.
    pub report: Option<Report>,
    /// Marker geometry, while placed.
    pub marker: Option<Marker>,
    /// Canvas size in pixels.
    pub canvas_size: (u32, u32),
    /// Enabled controls.
    pub controls: ControlState,
    /// Values to pre-fill the placement form with.
    pub form_defaults: PlacementRequest,
    /// The raised edge alert, if any.
    pub edge_alert: Option<ActiveAlert>,
    /// Sequence number the next command will receive.
    pub next_seq: CommandSeq,
}

/// A pose state machine with its room, alert and notification sink.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use vacuum_core::{Command, Rotation};
/// use vacuum_engine::{Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default()).unwrap();
/// let now = Instant::now();
///
/// assert!(session.submit(Command::place("1", "2", "East"), now).accepted);
/// session.submit(Command::Rotate(Rotation::Left), now);
/// assert_eq!(
///     session.report().map(|r| r.to_string()).as_deref(),
///     Some("X: 1\nY: 2\nDirection: NORTH")
/// );
/// ```
#[derive(Debug)]
pub struct Session<S: NotificationSink = NoticeQueue> {
    config: SessionConfig,
    room: Room,
    projection: Projection,
    pose: Pose,
    next_seq: CommandSeq,
    alert: EdgeAlert,
    sink: S,
    metrics: SessionMetrics,
    last_placement: Option<PlacementRequest>,
}

impl Session<NoticeQueue> {
    /// Validate `config` and start an unplaced session that keeps
    /// notices in a [`NoticeQueue`] of `max_notices`.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let sink = NoticeQueue::new(config.max_notices);
        Self::with_sink(config, sink)
    }

    /// The kept notices, oldest first.
    pub fn notices(&self) -> &NoticeQueue {
        &self.sink
    }
}

impl<S: NotificationSink> Session<S> {
    /// Validate `config` and start an unplaced session reporting to `sink`.
    pub fn with_sink(config: SessionConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let room = config.room()?;
        let projection = Projection::new(room, config.cell_size, config.marker_style());
        Ok(Self {
            config,
            room,
            projection,
            pose: Pose::Unplaced,
            next_seq: CommandSeq::default(),
            alert: EdgeAlert::new(),
            sink,
            metrics: SessionMetrics::default(),
            last_placement: None,
        })
    }

    /// Apply one command at time `now`.
    ///
    /// Any command supersedes a raised edge alert: a refused move
    /// re-raises it, everything else clears it.
    pub fn submit(&mut self, command: Command, now: Instant) -> Receipt {
        let seq = self.next_seq;
        self.next_seq = seq.next();
        self.metrics.commands_submitted += 1;

        let kind = command.kind();
        let transition = handle(self.pose, &command, &self.room);
        self.pose = transition.pose;

        match &transition.result {
            Ok(()) => {
                self.metrics.commands_accepted += 1;
                debug!("{seq}: {kind} accepted, pose now {:?}", self.pose);
                match command {
                    Command::Place(request) => self.last_placement = Some(request),
                    Command::Reset => {
                        self.metrics.resets += 1;
                        info!("{seq}: session reset");
                    }
                    _ => {}
                }
            }
            Err(CommandError::Placement(e)) => {
                self.metrics.placement_rejections += 1;
                debug!("{seq}: placement rejected: {e}");
            }
            Err(CommandError::Boundary(v)) => {
                self.metrics.boundary_violations += 1;
                warn!("{seq}: {v}");
            }
            Err(e @ CommandError::NotPlaced { .. }) => {
                self.metrics.invalid_operations += 1;
                debug!("{seq}: {e}");
            }
        }

        match transition.result.as_ref().err().and_then(CommandError::as_boundary) {
            Some(v) => {
                self.alert
                    .raise(seq, v.direction, now, self.config.alert_clear_after());
                self.sink.notify(Notice {
                    seq,
                    message: v.message(),
                });
            }
            None => {
                if self.alert.clear() {
                    self.metrics.alert_clears += 1;
                    trace!("{seq}: edge alert superseded");
                }
            }
        }

        Receipt::from_result(seq, kind, transition.result)
    }

    /// Clear the edge alert if its deadline has passed. Returns whether
    /// it was cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        let cleared = self.alert.poll(now);
        if cleared {
            self.metrics.alert_clears += 1;
            trace!("edge alert timed out");
        }
        cleared
    }

    /// Run a scheduled clear. A token from a superseded alert is ignored.
    pub fn clear_alert(&mut self, token: PendingClear) -> bool {
        let cleared = self.alert.clear_if(token);
        if cleared {
            self.metrics.alert_clears += 1;
            trace!("{}: edge alert cleared", token.seq);
        }
        cleared
    }

    /// When the raised alert clears on its own.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.alert.pending().map(|p| p.deadline)
    }

    /// The clear scheduled for the raised alert.
    pub fn pending_clear(&self) -> Option<PendingClear> {
        self.alert.pending()
    }

    /// Whether the edge alert is raised.
    pub fn edge_alert_active(&self) -> bool {
        self.alert.is_active()
    }

    /// The raised edge alert.
    pub fn edge_alert(&self) -> Option<&ActiveAlert> {
        self.alert.active()
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The room.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The validated configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Report for the current pose, or `None` while unplaced.
    pub fn report(&self) -> Option<Report> {
        Report::from_pose(&self.pose)
    }

    /// Marker geometry for the current pose, or `None` while unplaced.
    pub fn marker(&self) -> Option<Marker> {
        self.projection.marker(&self.pose)
    }

    /// Board cells in visual order.
    pub fn board(&self) -> Vec<BoardCell> {
        self.projection.board()
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        self.projection.canvas_size()
    }

    /// Which controls are enabled.
    pub fn controls(&self) -> ControlState {
        ControlState::for_pose(&self.pose)
    }

    /// The last accepted placement request, or a blank form.
    ///
    /// Reset keeps it, so the form offers the previous placement again.
    pub fn form_defaults(&self) -> PlacementRequest {
        self.last_placement
            .clone()
            .unwrap_or_else(PlacementRequest::blank)
    }

    /// Sequence number the next command will receive.
    pub fn next_seq(&self) -> CommandSeq {
        self.next_seq
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// The notification sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the notification sink, e.g. to dismiss notices.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Snapshot of everything the presentation layer renders.
    pub fn view(&self) -> SessionView {
        SessionView {
            pose: self.pose,
            report: self.report(),
            marker: self.marker(),
            canvas_size: self.canvas_size(),
            controls: self.controls(),
            form_defaults: self.form_defaults(),
            edge_alert: self.alert.active().copied(),
            next_seq: self.next_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vacuum_core::{CommandKind, Direction, PlacedPose, Rotation};
    use vacuum_test_utils::{placed, RecordingSink};

    fn session() -> Session<RecordingSink> {
        Session::with_sink(SessionConfig::default(), RecordingSink::new()).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SessionConfig {
            width: 0,
            ..SessionConfig::default()
        };
        assert!(matches!(Session::new(cfg), Err(ConfigError::Space(_))));
    }

    #[test]
    fn sequence_numbers_are_monotonic_across_reset() {
        let mut s = session();
        let now = Instant::now();
        let seqs: Vec<_> = [Command::Move, Command::Reset, Command::place(0, 0, "north")]
            .into_iter()
            .map(|c| s.submit(c, now).seq)
            .collect();
        assert_eq!(seqs, [CommandSeq(0), CommandSeq(1), CommandSeq(2)]);
        assert_eq!(s.next_seq(), CommandSeq(3));
    }

    #[test]
    fn boundary_violation_raises_alert_and_notifies() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(Command::place(4, 2, "east"), t0);
        let receipt = s.submit(Command::Move, t0);

        assert!(!receipt.accepted);
        assert_eq!(receipt.command, CommandKind::Move);
        assert_eq!(s.pose(), placed(4, 2, Direction::East));
        assert!(s.edge_alert_active());
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_secs(1)));
        assert_eq!(
            s.sink().messages(),
            ["Cannot move East, please rotate to a valid direction"]
        );
        assert_eq!(s.sink().notices()[0].seq, receipt.seq);
    }

    #[test]
    fn alert_times_out_on_poll() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(Command::place(0, 0, "south"), t0);
        s.submit(Command::Move, t0);

        assert!(!s.poll(t0 + Duration::from_millis(500)));
        assert!(s.poll(t0 + Duration::from_millis(1000)));
        assert!(!s.edge_alert_active());
        assert_eq!(s.next_deadline(), None);
        assert_eq!(s.metrics().alert_clears, 1);
    }

    #[test]
    fn next_command_supersedes_alert() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(Command::place(0, 4, "north"), t0);
        s.submit(Command::Move, t0);
        let stale = s.pending_clear().unwrap();

        s.submit(Command::Rotate(Rotation::Right), t0);
        assert!(!s.edge_alert_active());

        s.submit(Command::Rotate(Rotation::Left), t0);
        s.submit(Command::Move, t0 + Duration::from_millis(200));
        assert!(s.edge_alert_active());
        assert!(!s.clear_alert(stale));
        assert!(s.edge_alert_active());

        let fresh = s.pending_clear().unwrap();
        assert_eq!(fresh.deadline, t0 + Duration::from_millis(1200));
        assert!(s.clear_alert(fresh));
    }

    #[test]
    fn controls_follow_placement() {
        let mut s = session();
        let now = Instant::now();
        let unplaced = s.controls();
        assert!(unplaced.place);
        assert!(!unplaced.move_forward && !unplaced.rotate && !unplaced.report);

        s.submit(Command::place(2, 2, "west"), now);
        assert_eq!(
            s.controls(),
            ControlState {
                place: true,
                move_forward: true,
                rotate: true,
                report: true
            }
        );
    }

    #[test]
    fn form_defaults_remember_last_accepted_placement() {
        let mut s = session();
        let now = Instant::now();
        assert_eq!(s.form_defaults(), PlacementRequest::blank());

        s.submit(Command::place("3", "1", "South"), now);
        s.submit(Command::place("9", "1", "South"), now);
        s.submit(Command::Reset, now);
        assert_eq!(s.form_defaults(), PlacementRequest::new("3", "1", "South"));
    }

    #[test]
    fn metrics_count_each_outcome() {
        let mut s = session();
        let now = Instant::now();
        s.submit(Command::Report, now);
        s.submit(Command::place("", 0, "north"), now);
        s.submit(Command::place(0, 0, "north"), now);
        s.submit(Command::Rotate(Rotation::Left), now);
        s.submit(Command::Move, now);
        s.submit(Command::Reset, now);

        let m = s.metrics();
        assert_eq!(m.commands_submitted, 6);
        assert_eq!(m.commands_accepted, 3);
        assert_eq!(m.invalid_operations, 1);
        assert_eq!(m.placement_rejections, 1);
        assert_eq!(m.boundary_violations, 1);
        assert_eq!(m.resets, 1);
        assert_eq!(m.alert_clears, 1);
        assert_eq!(m.commands_rejected(), 3);
    }

    #[test]
    fn view_matches_accessors() {
        let mut s = Session::new(SessionConfig::default()).unwrap();
        let now = Instant::now();
        s.submit(Command::place(1, 2, "east"), now);
        let view = s.view();
        assert_eq!(view.pose, Pose::Placed(PlacedPose::new(1, 2, Direction::East)));
        assert_eq!(view.report, s.report());
        assert_eq!(view.marker, s.marker());
        assert_eq!(view.canvas_size, (800, 800));
        assert_eq!(view.edge_alert, None);
        assert!(s.notices().is_empty());
        assert_eq!(s.board().len(), 25);
    }
}
