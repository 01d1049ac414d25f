//! Test utilities and mock types for Vacuum development.
//!
//! Provides room and pose fixtures, a tiny command script parser, and
//! mock [`NotificationSink`] implementations that record what the
//! session reports.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod script;

use std::sync::{Arc, Mutex, PoisonError};

use vacuum_core::{Notice, NotificationSink};

pub use fixtures::{placed, placed_pose, room, room_5x5};
pub use script::parse_script;

/// Mock implementation of [`NotificationSink`] that keeps every notice.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Vec<Notice>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notice received, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Messages of every notice received, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.notices.iter().map(|n| n.message.clone()).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Recording sink whose log can be read from another thread.
///
/// Clones share the same log, so a test can keep one handle while the
/// session (and another handle) moves to a driver thread.
#[derive(Clone, Debug, Default)]
pub struct SharedSink {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notice received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationSink for SharedSink {
    fn notify(&mut self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
