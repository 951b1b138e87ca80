//! Pinch gesture to zoom factor mapping.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decimation_step;

/// Output event of a pinch recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureEvent {
    /// The pinch began.
    Start,
    /// The pinch moved. `scale_delta` is relative to the scale at gesture start.
    Update {
        /// Multiplicative scale relative to the gesture start.
        scale_delta: f64,
    },
    /// The pinch ended.
    End,
}

/// Phase of the zoom state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomPhase {
    /// No gesture in progress; live equals committed.
    Idle,
    /// A gesture is in progress.
    Gesturing {
        /// Live factor, `committed * scale_delta` of the latest update.
        live: f64,
        /// Whether at least one update arrived since the gesture started.
        updated: bool,
    },
}

/// Outcome of feeding an event to [`ZoomState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomTransition {
    /// The event had no effect.
    Ignored,
    /// A gesture started.
    Started,
    /// The live factor changed. Decimation must not re-run.
    Live {
        /// The new live factor.
        live: f64,
    },
    /// The gesture ended and a new committed factor took effect.
    Committed {
        /// Committed factor before the gesture.
        previous: f64,
        /// Committed factor after the gesture.
        current: f64,
    },
    /// The gesture ended without producing a usable factor.
    Cancelled,
    /// The zoom was reset to 1.
    Reset {
        /// Committed factor before the reset.
        previous: f64,
    },
}

impl ZoomTransition {
    /// Returns true if the committed factor may have changed.
    #[must_use]
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::Committed { .. } | Self::Reset { .. })
    }
}

/// Live and committed zoom factor.
///
/// The committed factor only changes on gesture end or reset, and is always
/// at least 1. Live updates are recomputed from the committed baseline on
/// every event, so out-of-order or repeated updates cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    committed: f64,
    phase: ZoomPhase,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomState {
    /// Creates an idle zoom state with committed factor 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            committed: 1.0,
            phase: ZoomPhase::Idle,
        }
    }

    /// Returns the committed factor used for decimation.
    #[must_use]
    pub const fn committed(&self) -> f64 {
        self.committed
    }

    /// Returns the live factor (equal to committed while idle).
    #[must_use]
    pub const fn live(&self) -> f64 {
        match self.phase {
            ZoomPhase::Idle => self.committed,
            ZoomPhase::Gesturing { live, .. } => live,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> ZoomPhase {
        self.phase
    }

    /// Returns true while a gesture is in progress.
    #[must_use]
    pub const fn is_gesturing(&self) -> bool {
        matches!(self.phase, ZoomPhase::Gesturing { .. })
    }

    /// Returns the decimation step for the committed factor.
    #[must_use]
    pub fn step(&self) -> usize {
        decimation_step(self.committed)
    }

    /// Feeds a gesture event to the state machine.
    pub fn apply(&mut self, event: GestureEvent) -> ZoomTransition {
        match event {
            GestureEvent::Start => self.begin(),
            GestureEvent::Update { scale_delta } => self.update(scale_delta),
            GestureEvent::End => self.end(),
        }
    }

    /// Starts a gesture from the committed baseline.
    ///
    /// A start received mid-gesture restarts the gesture.
    pub fn begin(&mut self) -> ZoomTransition {
        if self.is_gesturing() {
            debug!(committed = self.committed, "gesture restarted before end");
        }
        self.phase = ZoomPhase::Gesturing {
            live: self.committed,
            updated: false,
        };
        ZoomTransition::Started
    }

    /// Applies a gesture update: `live = committed * scale_delta`.
    ///
    /// Non-finite or non-positive deltas are ignored. An update while idle
    /// implicitly starts a gesture.
    pub fn update(&mut self, scale_delta: f64) -> ZoomTransition {
        if !scale_delta.is_finite() || scale_delta <= 0.0 {
            warn!(scale_delta, "ignoring invalid gesture scale");
            return ZoomTransition::Ignored;
        }
        if !self.is_gesturing() {
            debug!("gesture update without start");
        }

        let live = self.committed * scale_delta;
        self.phase = ZoomPhase::Gesturing {
            live,
            updated: true,
        };
        ZoomTransition::Live { live }
    }

    /// Ends the gesture, committing `max(live, 1)`.
    ///
    /// Ending a gesture that saw no update, or ending while idle, leaves the
    /// committed factor unchanged.
    pub fn end(&mut self) -> ZoomTransition {
        let ZoomPhase::Gesturing { live, updated } = self.phase else {
            return ZoomTransition::Ignored;
        };
        self.phase = ZoomPhase::Idle;

        if !updated {
            return ZoomTransition::Cancelled;
        }
        if !live.is_finite() {
            warn!(live, "discarding non-finite zoom factor");
            return ZoomTransition::Cancelled;
        }

        let previous = self.committed;
        self.committed = live.max(1.0);
        debug!(previous, committed = self.committed, "zoom committed");
        ZoomTransition::Committed {
            previous,
            current: self.committed,
        }
    }

    /// Resets committed and live factors to 1, abandoning any gesture.
    pub fn reset(&mut self) -> ZoomTransition {
        let previous = self.committed;
        self.committed = 1.0;
        self.phase = ZoomPhase::Idle;
        ZoomTransition::Reset { previous }
    }
}
