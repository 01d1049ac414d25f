//! Vacuum: a directional agent on a bounded 2D grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Vacuum sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Instant;
//! use vacuum::prelude::*;
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//! let now = Instant::now();
//!
//! session.submit(Command::place("4", "2", "East"), now);
//! let receipt = session.submit(Command::Move, now);
//! assert!(!receipt.accepted);
//! assert!(session.edge_alert_active());
//!
//! session.submit(Command::Rotate(Rotation::Left), now);
//! session.submit(Command::Move, now);
//! assert_eq!(session.pose(), Pose::Placed(PlacedPose::new(4, 3, Direction::North)));
//! assert!(!session.edge_alert_active());
//!
//! let marker = session.marker().unwrap();
//! assert_eq!(marker.cell, PixelOffset { left: 640, top: 160 });
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vacuum-core` | Directions, poses, commands, receipts, errors, sink trait |
//! | [`space`] | `vacuum-space` | The `Room` grid |
//! | [`obs`] | `vacuum-obs` | Pixel projection, marker geometry, board layout, report |
//! | [`engine`] | `vacuum-engine` | Placement, transitions, sessions, realtime driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`vacuum-core`).
pub use vacuum_core as types;

/// Room bounds (`vacuum-space`).
pub use vacuum_space as space;

/// Render projection and report formatting (`vacuum-obs`).
pub use vacuum_obs as obs;

/// Pose state machine and session drivers (`vacuum-engine`).
///
/// [`engine::Session`] for caller-driven use, [`engine::RealtimeSession`]
/// for a session on its own thread.
pub use vacuum_engine as engine;

/// Common imports for typical Vacuum usage.
///
/// ```rust
/// use vacuum::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vacuum_core::{
        Command, CommandKind, CommandSeq, Direction, FieldInput, Notice, NotificationSink,
        PlacedPose, PlacementRequest, Pose, Receipt, Rotation,
    };

    // Errors
    pub use vacuum_core::{BoundaryViolation, CommandError, PlacementError};

    // Space
    pub use vacuum_space::Room;

    // Rendering
    pub use vacuum_obs::{Marker, MarkerStyle, PixelOffset, Report};

    // Engine
    pub use vacuum_engine::{
        handle, ConfigError, NoticeQueue, RealtimeSession, Session, SessionConfig,
        SessionMetrics, SessionView, SubmitError,
    };
}
