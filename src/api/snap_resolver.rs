use ordered_float::OrderedFloat;

use crate::core::NormalizedPoint;
use crate::hit::{ControlLayer, LayoutSnapshot};
use crate::input::PointerSample;
use crate::interaction::{CursorMode, CursorState};

use super::engine_core::EngineCore;

impl EngineCore {
    /// Effective cursor for this tick. In magnet mode the cursor jumps onto
    /// the centre of the closest magnetic control within the radius. A held
    /// drag always follows the raw pointer.
    pub(super) fn resolve_cursor(
        &self,
        sample: PointerSample,
        layout: &LayoutSnapshot,
    ) -> CursorState {
        let raw = sample.position;
        let snap = match self.behavior.cursor_mode {
            CursorMode::Magnet if !self.model.interaction.is_dragging() => {
                self.nearest_magnetic_center(raw, layout)
            }
            _ => None,
        };
        let position = snap.unwrap_or(raw);
        CursorState {
            raw,
            position,
            snapped: snap.is_some(),
            active: sample.active,
            zone: self.behavior.zones.classify(position.y),
        }
    }

    fn nearest_magnetic_center(
        &self,
        raw: NormalizedPoint,
        layout: &LayoutSnapshot,
    ) -> Option<NormalizedPoint> {
        let layer = if self.model.interaction.is_modal_open() {
            ControlLayer::Modal
        } else {
            ControlLayer::Page
        };
        let radius = self.behavior.magnet.radius_px;
        let cart_len = self.model.cart.len();
        let pointer_px = layout.viewport.to_pixels(raw);

        layout
            .controls
            .iter()
            .filter(|control| {
                control.magnetic
                    && control.layer == layer
                    && control.action.line_index().is_none_or(|index| index < cart_len)
            })
            .map(|control| {
                let center = control.rect.center();
                (OrderedFloat(center.distance_to(pointer_px)), center)
            })
            .filter(|(distance, _)| distance.0 <= radius)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, center)| layout.viewport.normalize(center.x, center.y))
    }
}
