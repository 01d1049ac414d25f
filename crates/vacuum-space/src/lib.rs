//! Room bounds for Vacuum simulations.
//!
//! [`Room`] is the immutable grid the agent lives on. It answers two
//! questions for the engine: is a cell inside the room, and which cell
//! lies one step ahead along a heading.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod room;

pub use error::SpaceError;
pub use room::Room;
