use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::NormalizedPoint;
use crate::input::PointerSample;

/// Hold duration after which a press becomes a drag candidate.
pub const HOLD_THRESHOLD_MS: u64 = 200;
/// Longest press still considered a tap.
pub const TAP_MAX_MS: u64 = 250;
/// Maximum gap between two tap releases forming a double-tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureTimingConfig {
    pub hold_threshold_ms: u64,
    pub tap_max_ms: u64,
    pub double_tap_window_ms: u64,
}

impl Default for GestureTimingConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: HOLD_THRESHOLD_MS,
            tap_max_ms: TAP_MAX_MS,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    Press,
    HoldStart,
    Release,
    /// Lone tap, confirmed once the double-tap window elapsed without a
    /// second tap.
    Tap,
    DoubleTap,
}

/// Discrete gesture with the pointer position it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub position: NormalizedPoint,
    pub timestamp_ms: u64,
}

pub type GestureEvents = SmallVec<[GestureEvent; 4]>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTap {
    released_at: u64,
    position: NormalizedPoint,
}

/// Folds the timestamped pointer stream into discrete gesture events.
///
/// Lone taps are reported late on purpose: a tap is only a `Tap` once no
/// second tap followed within the double-tap window.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureClassifier {
    timing: GestureTimingConfig,
    was_active: bool,
    press_started_at: Option<u64>,
    hold_emitted: bool,
    pending_tap: Option<PendingTap>,
}

impl GestureClassifier {
    #[must_use]
    pub fn new(timing: GestureTimingConfig) -> Self {
        Self {
            timing,
            was_active: false,
            press_started_at: None,
            hold_emitted: false,
            pending_tap: None,
        }
    }

    #[must_use]
    pub fn timing(&self) -> GestureTimingConfig {
        self.timing
    }

    pub(crate) fn set_timing(&mut self, timing: GestureTimingConfig) {
        self.timing = timing;
    }

    #[must_use]
    pub fn press_started_at(&self) -> Option<u64> {
        self.press_started_at
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.was_active
    }

    /// Forgets any press or pending tap, e.g. after a pointer source switch.
    pub fn reset(&mut self) {
        self.was_active = false;
        self.press_started_at = None;
        self.hold_emitted = false;
        self.pending_tap = None;
    }

    /// Lets a skipped `HoldStart` fire again while the same press lasts.
    pub(crate) fn rearm_hold(&mut self) {
        if self.was_active {
            self.hold_emitted = false;
        }
    }

    pub fn fold(&mut self, sample: PointerSample) -> GestureEvents {
        let now = sample.timestamp_ms;
        let mut events = GestureEvents::new();

        if let Some(pending) = self.pending_tap {
            if now.saturating_sub(pending.released_at) >= self.timing.double_tap_window_ms {
                self.pending_tap = None;
                events.push(GestureEvent {
                    kind: GestureKind::Tap,
                    position: pending.position,
                    timestamp_ms: pending.released_at,
                });
            }
        }

        match (self.was_active, sample.active) {
            (false, true) => {
                self.press_started_at = Some(now);
                self.hold_emitted = false;
                events.push(event(GestureKind::Press, sample));
                self.maybe_emit_hold(sample, &mut events);
            }
            (true, true) => self.maybe_emit_hold(sample, &mut events),
            (true, false) => self.on_release(sample, &mut events),
            (false, false) => {}
        }

        self.was_active = sample.active;
        events
    }

    fn maybe_emit_hold(&mut self, sample: PointerSample, events: &mut GestureEvents) {
        if self.hold_emitted {
            return;
        }
        let Some(started) = self.press_started_at else {
            return;
        };
        if sample.timestamp_ms.saturating_sub(started) >= self.timing.hold_threshold_ms {
            self.hold_emitted = true;
            events.push(event(GestureKind::HoldStart, sample));
        }
    }

    fn on_release(&mut self, sample: PointerSample, events: &mut GestureEvents) {
        let now = sample.timestamp_ms;
        let hold_duration = self
            .press_started_at
            .map_or(u64::MAX, |started| now.saturating_sub(started));
        self.press_started_at = None;
        self.hold_emitted = false;
        events.push(event(GestureKind::Release, sample));

        if hold_duration >= self.timing.tap_max_ms {
            // Long presses never pair; a pending tap still confirms on expiry.
            return;
        }

        match self.pending_tap.take() {
            Some(pending)
                if now.saturating_sub(pending.released_at) < self.timing.double_tap_window_ms =>
            {
                events.push(event(GestureKind::DoubleTap, sample));
            }
            _ => {
                self.pending_tap = Some(PendingTap {
                    released_at: now,
                    position: sample.position,
                });
            }
        }
    }
}

fn event(kind: GestureKind, sample: PointerSample) -> GestureEvent {
    GestureEvent {
        kind,
        position: sample.position,
        timestamp_ms: sample.timestamp_ms,
    }
}
