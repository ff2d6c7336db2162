//! Edge-proximity scrolling.
//!
//! Two mechanisms, never active together: proportional manual scroll while
//! an empty grab rests in an edge band, and latched cruise scroll while the
//! auto-scroll lock is engaged.

use serde::{Deserialize, Serialize};

use crate::core::{EdgeZone, ScreenZone};

/// Scroll speeds in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollBehavior {
    /// Manual speed right at the edge threshold.
    pub min_speed_px: f64,
    /// Manual speed at the screen edge.
    pub max_speed_px: f64,
    /// Fixed speed while the lock is engaged.
    pub cruise_speed_px: f64,
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self {
            min_speed_px: 8.0,
            max_speed_px: 45.0,
            cruise_speed_px: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollKind {
    Manual,
    Cruise,
}

/// Per-tick facts the controller decides on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInput {
    pub lock: Option<EdgeZone>,
    pub zone: ScreenZone,
    /// Depth past the edge threshold in `[0, 1]`.
    pub penetration: f64,
    pub pointer_active: bool,
    pub dragging: bool,
    pub modal_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScrollStep {
    /// Signed content offset change; negative scrolls towards the top.
    pub delta_px: f64,
    pub kind: Option<ScrollKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollController {
    behavior: ScrollBehavior,
}

impl ScrollController {
    #[must_use]
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    #[must_use]
    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    pub(crate) fn set_behavior(&mut self, behavior: ScrollBehavior) {
        self.behavior = behavior;
    }

    /// Manual speed for a given penetration depth, clamped to the floor/cap.
    #[must_use]
    pub fn manual_speed(&self, penetration: f64) -> f64 {
        let depth = penetration.clamp(0.0, 1.0);
        let b = self.behavior;
        b.min_speed_px + (b.max_speed_px - b.min_speed_px) * depth
    }

    #[must_use]
    pub fn step(&self, input: ScrollInput) -> ScrollStep {
        if input.modal_open {
            return ScrollStep::default();
        }
        if let Some(direction) = input.lock {
            return ScrollStep {
                delta_px: direction.sign() * self.behavior.cruise_speed_px,
                kind: Some(ScrollKind::Cruise),
            };
        }
        match input.zone.edge() {
            Some(edge) if input.pointer_active && !input.dragging => ScrollStep {
                delta_px: edge.sign() * self.manual_speed(input.penetration),
                kind: Some(ScrollKind::Manual),
            },
            _ => ScrollStep::default(),
        }
    }
}
