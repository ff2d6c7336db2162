use crate::error::{ShopError, ShopResult};
use crate::hit::LayoutProvider;

use super::{EngineSnapshot, InteractionSnapshot, ShopEngine};

impl<L: LayoutProvider> ShopEngine<L> {
    /// Builds a deterministic snapshot. `now_ms` stamps the pointer sample.
    pub fn snapshot(&self, now_ms: u64) -> ShopResult<EngineSnapshot> {
        let interaction = &self.core.model.interaction;
        Ok(EngineSnapshot {
            pointer_mode: self.pointer_mode(),
            pointer: self.current_pointer(now_ms),
            cursor: self.core.input.cursor,
            capture_available: self.is_capture_available(),
            interaction: InteractionSnapshot {
                mode: interaction.mode(),
                drag_payload: interaction.drag_payload(),
                modal: interaction.modal(),
                auto_scroll_lock: interaction.auto_scroll_lock(),
                active_zone: interaction.active_zone(),
                grab_started_at: interaction.grab_started_at(),
                last_tap_at: interaction.last_tap_at(),
            },
            cart: self.cart_snapshot()?,
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self, now_ms: u64) -> ShopResult<String> {
        let snapshot = self.snapshot(now_ms)?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ShopError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
