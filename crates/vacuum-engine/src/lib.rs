//! Pose state machine and session driver for Vacuum simulations.
//!
//! The engine is layered:
//!
//! - [`placement`] and [`transition`] are pure functions on a
//!   [`Pose`](vacuum_core::Pose) and a [`Room`](vacuum_space::Room).
//!   [`handle`] applies one command and returns the next pose.
//! - [`Session`] threads the pose through [`handle`] and adds command
//!   numbering, the [`EdgeAlert`], notifications and metrics.
//! - [`RealtimeSession`] runs a session on its own thread so the edge
//!   alert clears on wall-clock time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alert;
pub mod config;
pub mod metrics;
pub mod notify;
pub mod placement;
pub mod realtime;
pub mod session;
pub mod transition;

pub use alert::{ActiveAlert, EdgeAlert, PendingClear};
pub use config::{ConfigError, SessionConfig};
pub use metrics::SessionMetrics;
pub use notify::NoticeQueue;
pub use placement::{place, validate_placement};
pub use realtime::{RealtimeSession, SubmitError};
pub use session::{ControlState, Session, SessionView};
pub use transition::{apply_move, apply_rotation, handle, Transition};
