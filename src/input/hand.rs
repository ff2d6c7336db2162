use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::NormalizedPoint;
use crate::error::{ShopError, ShopResult};

const LANDMARK_COUNT: usize = 21;
const WRIST: usize = 0;
const THUMB_TIP: usize = 4;
const INDEX_TIP: usize = 8;
const PALM_BASE: usize = 9;
const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];
const FINGER_PIPS: [usize; 4] = [6, 10, 14, 18];

/// Tuning for the camera hand-tracking pointer source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSourceConfig {
    /// Exponential smoothing factor in `(0, 1]`. Lower is smoother but lags more.
    pub smoothing_alpha: f64,
    /// Thumb-to-index distance (normalized) below which the hand pinches.
    pub pinch_threshold: f64,
    /// Folded non-thumb fingers needed to count as a fist.
    pub folded_fingers_min: usize,
    /// Rolling majority-vote window over raw grab readings.
    pub debounce_window: usize,
    /// Mirrors x so the cursor follows a selfie-view camera.
    pub mirror_x: bool,
}

impl Default for GestureSourceConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: 0.15,
            pinch_threshold: 0.05,
            folded_fingers_min: 3,
            debounce_window: 5,
            mirror_x: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The 21 per-frame hand keypoints produced by the tracking model.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn from_points(points: &[Landmark]) -> ShopResult<Self> {
        let points: [Landmark; LANDMARK_COUNT] = points.try_into().map_err(|_| {
            ShopError::InvalidData(format!(
                "hand frame must carry {LANDMARK_COUNT} landmarks, got {}",
                points.len()
            ))
        })?;
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ShopError::InvalidData(
                "hand landmarks must be finite".to_owned(),
            ));
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    #[must_use]
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    fn palm_base(&self) -> Landmark {
        self.points[PALM_BASE]
    }
}

/// Pinch OR folded-fingers grab heuristic over one frame.
#[must_use]
pub fn detect_grab(hand: &HandLandmarks, config: &GestureSourceConfig) -> bool {
    let pinch = hand.point(THUMB_TIP).distance_to(hand.point(INDEX_TIP)) < config.pinch_threshold;
    if pinch {
        return true;
    }
    let wrist = hand.point(WRIST);
    let folded = FINGER_TIPS
        .iter()
        .zip(FINGER_PIPS.iter())
        .filter(|&(&tip, &pip)| {
            hand.point(tip).distance_to(wrist) < hand.point(pip).distance_to(wrist)
        })
        .count();
    folded >= config.folded_fingers_min
}

/// Majority vote over the last `window` raw readings.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationDebouncer {
    window: usize,
    readings: VecDeque<bool>,
}

impl ActivationDebouncer {
    #[must_use]
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            readings: VecDeque::with_capacity(window),
        }
    }

    /// Records a reading and returns the debounced value.
    pub fn push(&mut self, raw: bool) -> bool {
        if self.readings.len() == self.window {
            self.readings.pop_front();
        }
        self.readings.push_back(raw);
        self.value()
    }

    /// `true` only when a strict majority of the full window is `true`.
    #[must_use]
    pub fn value(&self) -> bool {
        let active = self.readings.iter().filter(|&&r| r).count();
        active * 2 > self.window
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }
}

/// Hand-tracking pointer. Frames arrive from an asynchronous capture
/// pipeline; only the latest frame matters.
#[derive(Debug, Clone, PartialEq)]
pub struct HandPointerSource {
    config: GestureSourceConfig,
    smoothed: NormalizedPoint,
    debouncer: ActivationDebouncer,
    active: bool,
    capture_available: bool,
}

impl HandPointerSource {
    #[must_use]
    pub fn new(config: GestureSourceConfig) -> Self {
        Self {
            config,
            smoothed: NormalizedPoint::CENTER,
            debouncer: ActivationDebouncer::new(config.debounce_window),
            active: false,
            capture_available: true,
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureSourceConfig {
        self.config
    }

    pub(crate) fn set_config(&mut self, config: GestureSourceConfig) {
        self.config = config;
        self.debouncer = ActivationDebouncer::new(config.debounce_window);
        self.active = false;
    }

    #[must_use]
    pub fn position(&self) -> NormalizedPoint {
        self.smoothed
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_capture_available(&self) -> bool {
        self.capture_available
    }

    /// Feeds one capture frame. `None` means no hand is visible: the cursor
    /// freezes and a released reading enters the debounce window.
    pub fn submit_frame(&mut self, hand: Option<&HandLandmarks>) {
        if !self.capture_available {
            return;
        }
        let raw_grab = match hand {
            Some(hand) => {
                let palm = hand.palm_base();
                let x = if self.config.mirror_x { 1.0 - palm.x } else { palm.x };
                let target = NormalizedPoint::new(x, palm.y);
                self.smoothed = self.smoothed.lerp(target, self.config.smoothing_alpha);
                detect_grab(hand, &self.config)
            }
            None => false,
        };
        self.active = self.debouncer.push(raw_grab);
        trace!(
            x = self.smoothed.x,
            y = self.smoothed.y,
            raw_grab,
            active = self.active,
            "hand frame"
        );
    }

    /// Capture device denied or missing. The source stays released for good
    /// and keeps reporting its last position.
    pub fn mark_capture_unavailable(&mut self) {
        if self.capture_available {
            warn!("hand capture unavailable; gesture pointer degraded to inactive");
        }
        self.capture_available = false;
        self.active = false;
        self.debouncer.clear();
    }

    /// Discards smoothing and debounce history.
    pub(crate) fn reset(&mut self) {
        self.smoothed = NormalizedPoint::CENTER;
        self.debouncer.clear();
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::ActivationDebouncer;

    #[test]
    fn debouncer_needs_majority_of_full_window() {
        let mut debouncer = ActivationDebouncer::new(5);
        assert!(!debouncer.push(true));
        assert!(!debouncer.push(true));
        assert!(debouncer.push(true));
        assert!(debouncer.push(false));
        assert!(debouncer.push(false));
        // window is now [t, t, t, f, f] -> next false evicts a true
        assert!(!debouncer.push(false));
    }

    #[test]
    fn single_flicker_does_not_flip_state() {
        let mut debouncer = ActivationDebouncer::new(5);
        for _ in 0..5 {
            debouncer.push(true);
        }
        assert!(debouncer.push(false));
        assert!(debouncer.push(true));
    }
}
