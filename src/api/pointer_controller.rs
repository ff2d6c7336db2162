use tracing::debug;

use crate::extensions::PluginEvent;
use crate::hit::LayoutProvider;
use crate::input::{HandLandmarks, PointerSample, PointerSourceMode};

use super::engine_core::EngineCore;
use super::{ShopEngine, TickReport};

impl<L: LayoutProvider> ShopEngine<L> {
    #[must_use]
    pub fn pointer_mode(&self) -> PointerSourceMode {
        self.core.input.pointer.mode()
    }

    /// Switches the live pointer source.
    ///
    /// Any in-flight drag is resolved first: a unit lifted from the cart is
    /// merged back, a shelf product is dropped. Returns `true` when the mode
    /// changed.
    pub fn set_pointer_mode(&mut self, mode: PointerSourceMode) -> bool {
        let before = self.core.model.interaction.mode();
        let changed = self.core.switch_pointer_mode(mode, None);
        self.core.emit_mode_change_since(before);
        changed
    }

    /// Latest pointer reading of the live source, without advancing the engine.
    #[must_use]
    pub fn current_pointer(&self, now_ms: u64) -> PointerSample {
        self.core.input.pointer.current_pointer(now_ms)
    }

    /// Normalized mouse position. Always stored; only read while the mouse
    /// source is live.
    pub fn mouse_move(&mut self, x: f64, y: f64) {
        self.core.input.pointer.mouse_mut().move_to(x, y);
    }

    /// Mouse position in client pixels of the current layout viewport.
    pub fn mouse_move_px(&mut self, x_px: f64, y_px: f64) {
        let point = self.layout.layout().viewport.normalize(x_px, y_px);
        self.core.input.pointer.mouse_mut().move_to(point.x, point.y);
    }

    pub fn mouse_down(&mut self) {
        self.core.input.pointer.mouse_mut().press();
    }

    pub fn mouse_up(&mut self) {
        self.core.input.pointer.mouse_mut().release();
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.core.input.pointer.mouse_mut().touch_start(x, y);
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.core.input.pointer.mouse_mut().touch_move(x, y);
    }

    pub fn touch_end(&mut self) {
        self.core.input.pointer.mouse_mut().touch_end();
    }

    /// Publishes the latest hand-tracking frame (`None` when no hand is
    /// visible). Only the most recent frame before a tick is observed.
    pub fn submit_hand_frame(&mut self, hand: Option<&HandLandmarks>) {
        self.core.input.pointer.hand_mut().submit_frame(hand);
    }

    /// Reports that the camera could not be opened. The gesture source then
    /// stays released; nothing is raised into the state machine.
    pub fn mark_capture_unavailable(&mut self) {
        self.core.input.pointer.hand_mut().mark_capture_unavailable();
    }

    #[must_use]
    pub fn is_capture_available(&self) -> bool {
        self.core.input.pointer.hand().is_capture_available()
    }
}

impl EngineCore {
    pub(super) fn switch_pointer_mode(
        &mut self,
        mode: PointerSourceMode,
        report: Option<&mut TickReport>,
    ) -> bool {
        if mode == self.input.pointer.mode() {
            return false;
        }
        self.cancel_drag(report);
        self.input.pointer.set_mode(mode);
        self.input.classifier.reset();
        debug!(?mode, "pointer mode applied");
        self.emit(PluginEvent::PointerModeChanged(mode));
        true
    }
}
