//! Core types and traits for the Vacuum grid simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: headings and
//! rotations, the agent pose, commands and receipts, error types, and
//! the notification sink trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod direction;
pub mod error;
pub mod id;
pub mod pose;
pub mod traits;

pub use command::{Command, CommandKind, FieldInput, PlacementRequest, Receipt};
pub use direction::{Direction, ParseDirectionError, Rotation};
pub use error::{BoundaryViolation, CommandError, FieldError, FormField, PlacementError};
pub use id::CommandSeq;
pub use pose::{PlacedPose, Pose};
pub use traits::{Notice, NotificationSink};
