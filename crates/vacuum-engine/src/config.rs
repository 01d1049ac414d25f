//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the builder-input for a [`Session`](crate::Session).
//! [`validate()`](SessionConfig::validate) checks every structural
//! invariant up front so that a constructed session never has to.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use vacuum_obs::MarkerStyle;
use vacuum_space::{Room, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`] or while
/// starting and stopping a realtime session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Room dimensions are invalid.
    Space(SpaceError),
    /// `cell_size` is zero.
    ZeroCellSize,
    /// The canvas would be wider or taller than `u32::MAX` pixels.
    CanvasOverflow {
        /// Which axis overflowed (`"width"` or `"height"`).
        axis: &'static str,
        /// Cells along that axis.
        cells: u32,
        /// Configured cell size.
        cell_size: u32,
    },
    /// `alert_clear_ms` is zero.
    ZeroAlertClear,
    /// `max_notices` is zero.
    ZeroNotices,
    /// The marker style cannot be drawn inside one cell.
    MarkerDoesNotFit {
        /// The configured style.
        style: MarkerStyle,
        /// Configured cell size.
        cell_size: u32,
    },
    /// The realtime request queue capacity is zero.
    QueueCapacityZero,
    /// A background thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
    /// The session could not be recovered from its thread (it panicked).
    SessionRecoveryFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "room: {e}"),
            Self::ZeroCellSize => write!(f, "cell_size must be at least 1"),
            Self::CanvasOverflow {
                axis,
                cells,
                cell_size,
            } => write!(
                f,
                "canvas {axis} of {cells} cells x {cell_size} px exceeds u32::MAX"
            ),
            Self::ZeroAlertClear => write!(f, "alert_clear_ms must be at least 1"),
            Self::ZeroNotices => write!(f, "max_notices must be at least 1"),
            Self::MarkerDoesNotFit { style, cell_size } => write!(
                f,
                "marker of size {} with {}px bar does not fit a {cell_size}px cell",
                style.size, style.bar_length
            ),
            Self::QueueCapacityZero => write!(f, "queue capacity must be at least 1"),
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
            Self::SessionRecoveryFailed => {
                write!(f, "session could not be recovered from its thread")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SessionConfig ──────────────────────────────────────────────────

/// Configuration for a [`Session`](crate::Session).
///
/// The defaults reproduce the reference playground: a 5×5 room drawn
/// with 160 px cells, a one second edge alert and two notices on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Room columns. Default: 5.
    pub width: u32,
    /// Room rows. Default: 5.
    pub height: u32,
    /// Side of one cell in pixels. Default: 160.
    pub cell_size: u32,
    /// How long the edge alert stays raised. Default: 1000.
    pub alert_clear_ms: u64,
    /// Notices kept by the default queue. Default: 2.
    pub max_notices: usize,
    /// Marker style. `None` scales the default style to `cell_size`.
    pub marker: Option<MarkerStyle>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            cell_size: 160,
            alert_clear_ms: 1000,
            max_notices: 2,
            marker: None,
        }
    }
}

impl SessionConfig {
    /// Check every invariant. Called by [`Session::new`](crate::Session::new).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.room()?;
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        for (axis, cells) in [("width", self.width), ("height", self.height)] {
            if cells.checked_mul(self.cell_size).is_none() {
                return Err(ConfigError::CanvasOverflow {
                    axis,
                    cells,
                    cell_size: self.cell_size,
                });
            }
        }
        if self.alert_clear_ms == 0 {
            return Err(ConfigError::ZeroAlertClear);
        }
        if self.max_notices == 0 {
            return Err(ConfigError::ZeroNotices);
        }
        let style = self.marker_style();
        if !style.fits(self.cell_size) {
            return Err(ConfigError::MarkerDoesNotFit {
                style,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// The room described by `width` and `height`.
    pub fn room(&self) -> Result<Room, ConfigError> {
        Ok(Room::new(self.width, self.height)?)
    }

    /// The configured marker style, or the default scaled to `cell_size`.
    pub fn marker_style(&self) -> MarkerStyle {
        self.marker
            .unwrap_or_else(|| MarkerStyle::scaled(self.cell_size))
    }

    /// `alert_clear_ms` as a [`Duration`].
    pub fn alert_clear_after(&self) -> Duration {
        Duration::from_millis(self.alert_clear_ms)
    }
}
