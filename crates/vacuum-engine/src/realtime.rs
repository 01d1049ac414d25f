//! A session confined to its own thread.
//!
//! # Architecture
//!
//! ```text
//! Caller thread(s)                 Session thread
//!     |                                 |
//!     |--submit()---------------------->| select! {
//!     |   [req_tx: bounded(capacity)]   |   recv(req_rx)  -> session.submit(cmd, now)
//!     |<--receipt via reply channel-----|   recv(at(deadline)) -> session.poll(now)
//!     |                                 | }
//!     |--view() / metrics()------------>|
//!     |<--snapshot via reply channel----|
//! ```
//!
//! Requests are served strictly one at a time in arrival order. The
//! timer arm is rebuilt on every iteration from
//! [`Session::next_deadline`], so a command that supersedes the alert
//! also cancels its scheduled clear.

use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{bounded, select, Receiver, Sender, TrySendError};
use log::info;
use vacuum_core::{Command, NotificationSink, Receipt};

use crate::config::ConfigError;
use crate::metrics::SessionMetrics;
use crate::notify::NoticeQueue;
use crate::session::{Session, SessionView};

// ── Error types ──────────────────────────────────────────────────

/// Error sending a request to the session thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The session thread has shut down.
    Shutdown,
    /// The request channel is full (back-pressure).
    ChannelFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "session thread has shut down"),
            Self::ChannelFull => write!(f, "request channel full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── Requests ─────────────────────────────────────────────────────

enum Request {
    Submit {
        command: Command,
        reply: Sender<Receipt>,
    },
    View {
        reply: Sender<SessionView>,
    },
    Metrics {
        reply: Sender<SessionMetrics>,
    },
}

// ── RealtimeSession ──────────────────────────────────────────────

/// A [`Session`] running on a dedicated thread.
///
/// The edge alert clears on wall-clock time without anyone polling.
/// Dropping the handle stops the thread; [`shutdown`](Self::shutdown)
/// stops it and hands the session back.
pub struct RealtimeSession<S: NotificationSink + 'static = NoticeQueue> {
    req_tx: Option<Sender<Request>>,
    thread: Option<JoinHandle<Session<S>>>,
}

impl<S: NotificationSink + 'static> RealtimeSession<S> {
    /// Request queue capacity used by [`spawn`](Self::spawn).
    pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

    /// Move `session` onto a new thread.
    pub fn spawn(session: Session<S>) -> Result<Self, ConfigError> {
        Self::spawn_with_capacity(session, Self::DEFAULT_QUEUE_CAPACITY)
    }

    /// Move `session` onto a new thread with a request queue of
    /// `capacity` entries.
    pub fn spawn_with_capacity(session: Session<S>, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::QueueCapacityZero);
        }
        let (req_tx, req_rx) = bounded(capacity);
        let thread = thread::Builder::new()
            .name("vacuum-session".into())
            .spawn(move || run(session, req_rx))
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("session thread: {e}"),
            })?;
        info!("session thread started (queue capacity {capacity})");
        Ok(Self {
            req_tx: Some(req_tx),
            thread: Some(thread),
        })
    }

    /// Submit a command and wait for its receipt.
    pub fn submit(&self, command: Command) -> Result<Receipt, SubmitError> {
        self.request(|reply| Request::Submit { command, reply })
    }

    /// Snapshot of the session's render state.
    pub fn view(&self) -> Result<SessionView, SubmitError> {
        self.request(|reply| Request::View { reply })
    }

    /// Snapshot of the session's counters.
    pub fn metrics(&self) -> Result<SessionMetrics, SubmitError> {
        self.request(|reply| Request::Metrics { reply })
    }

    /// Stop the thread and return the session.
    ///
    /// Requests already queued are served first.
    pub fn shutdown(mut self) -> Result<Session<S>, ConfigError> {
        self.req_tx.take();
        let thread = self
            .thread
            .take()
            .ok_or(ConfigError::SessionRecoveryFailed)?;
        let session = thread
            .join()
            .map_err(|_| ConfigError::SessionRecoveryFailed)?;
        info!("session thread stopped");
        Ok(session)
    }

    fn request<T>(&self, make: impl FnOnce(Sender<T>) -> Request) -> Result<T, SubmitError> {
        let tx = self.req_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        let (reply_tx, reply_rx) = bounded(1);
        tx.try_send(make(reply_tx)).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::ChannelFull,
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })?;
        reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }
}

impl<S: NotificationSink + 'static> Drop for RealtimeSession<S> {
    fn drop(&mut self) {
        self.req_tx.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run<S: NotificationSink>(mut session: Session<S>, req_rx: Receiver<Request>) -> Session<S> {
    loop {
        let timer = match session.next_deadline() {
            Some(deadline) => crossbeam_channel::at(deadline),
            None => crossbeam_channel::never(),
        };
        select! {
            recv(req_rx) -> msg => match msg {
                Ok(req) => serve(&mut session, req),
                Err(_) => break,
            },
            recv(timer) -> _ => {
                session.poll(Instant::now());
            }
        }
    }
    session
}

fn serve<S: NotificationSink>(session: &mut Session<S>, req: Request) {
    // A caller that gave up waiting has dropped its receiver; ignore it.
    match req {
        Request::Submit { command, reply } => {
            let _ = reply.send(session.submit(command, Instant::now()));
        }
        Request::View { reply } => {
            let _ = reply.send(session.view());
        }
        Request::Metrics { reply } => {
            let _ = reply.send(session.metrics().clone());
        }
    }
}
