//! Pointer sources fused into one abstract pointer.
//!
//! Exactly one source is live at a time. The engine polls the live source
//! once per tick and never waits on it.

mod hand;
mod mouse;

pub use hand::{
    ActivationDebouncer, GestureSourceConfig, HandLandmarks, HandPointerSource, Landmark,
    detect_grab,
};
pub use mouse::MousePointerSource;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::NormalizedPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PointerSourceMode {
    /// Mouse and touch input.
    #[default]
    Mouse,
    /// Camera-tracked hand landmarks.
    Gesture,
}

/// One polled pointer reading. Each sample supersedes the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub position: NormalizedPoint,
    pub active: bool,
    pub timestamp_ms: u64,
}

impl PointerSample {
    #[must_use]
    pub fn new(x: f64, y: f64, active: bool, timestamp_ms: u64) -> Self {
        Self {
            position: NormalizedPoint::new(x, y),
            active,
            timestamp_ms,
        }
    }
}

/// Selects between the mouse/touch source and the hand-tracking source.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSourceAdapter {
    mode: PointerSourceMode,
    mouse: MousePointerSource,
    hand: HandPointerSource,
}

impl PointerSourceAdapter {
    #[must_use]
    pub fn new(mode: PointerSourceMode, hand_config: GestureSourceConfig) -> Self {
        Self {
            mode,
            mouse: MousePointerSource::default(),
            hand: HandPointerSource::new(hand_config),
        }
    }

    #[must_use]
    pub fn mode(&self) -> PointerSourceMode {
        self.mode
    }

    /// Switches the live source. The source being left loses its smoothing
    /// and press state. Returns `true` when the mode actually changed.
    pub fn set_mode(&mut self, mode: PointerSourceMode) -> bool {
        if mode == self.mode {
            return false;
        }
        match self.mode {
            PointerSourceMode::Mouse => self.mouse.reset(),
            PointerSourceMode::Gesture => self.hand.reset(),
        }
        debug!(from = ?self.mode, to = ?mode, "pointer source mode switched");
        self.mode = mode;
        true
    }

    /// Latest reading of the live source stamped with `now_ms`.
    #[must_use]
    pub fn current_pointer(&self, now_ms: u64) -> PointerSample {
        let (position, active) = match self.mode {
            PointerSourceMode::Mouse => (self.mouse.position(), self.mouse.is_pressed()),
            PointerSourceMode::Gesture => (self.hand.position(), self.hand.is_active()),
        };
        PointerSample {
            position,
            active,
            timestamp_ms: now_ms,
        }
    }

    #[must_use]
    pub fn mouse(&self) -> &MousePointerSource {
        &self.mouse
    }

    pub fn mouse_mut(&mut self) -> &mut MousePointerSource {
        &mut self.mouse
    }

    #[must_use]
    pub fn hand(&self) -> &HandPointerSource {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut HandPointerSource {
        &mut self.hand
    }
}
