//! Render projection and report formatting for Vacuum simulations.
//!
//! Everything here is a pure function of a [`Pose`](vacuum_core::Pose),
//! a [`Room`](vacuum_space::Room) and a cell size. Logical coordinates
//! have their origin at the bottom-left with `y` growing north; pixel
//! coordinates have their origin at the top-left with `top` growing
//! down. [`projection`] does the conversion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod indicator;
pub mod projection;
pub mod report;

pub use board::{board_cells, BoardCell};
pub use indicator::{FacingIndicator, MarkerEdge, MarkerStyle};
pub use projection::{canvas_size, cell_offset, project, Marker, PixelOffset, PixelRect, Projection};
pub use report::Report;
