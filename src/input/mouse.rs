use crate::core::NormalizedPoint;

/// Mouse and touch input share one source: a touch start is a move plus a
/// press, a touch end is a release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MousePointerSource {
    position: NormalizedPoint,
    pressed: bool,
}

impl MousePointerSource {
    #[must_use]
    pub fn position(&self) -> NormalizedPoint {
        self.position
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = NormalizedPoint::new(x, y);
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.move_to(x, y);
        self.press();
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.move_to(x, y);
    }

    pub fn touch_end(&mut self) {
        self.release();
    }

    /// Drops a held press. The last position is kept.
    pub(crate) fn reset(&mut self) {
        self.pressed = false;
    }
}
