use tracing::trace;

use crate::extensions::{PluginContext, PluginEvent};
use crate::interaction::{FeedbackCue, InteractionMode};

use super::TickReport;
use super::engine_core::EngineCore;

impl EngineCore {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            interaction_mode: self.model.interaction.mode(),
            pointer_mode: self.input.pointer.mode(),
            cursor: self.input.cursor,
            cart_lines: self.model.cart.len(),
            cart_item_count: self.model.cart.item_count(),
            auto_scroll_lock: self.model.interaction.auto_scroll_lock(),
        }
    }

    pub(super) fn emit(&mut self, event: PluginEvent) {
        if self.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.runtime.plugins {
            plugin.on_event(&event, context);
        }
    }

    pub(super) fn emit_cart_changed(&mut self) {
        let item_count = self.model.cart.item_count();
        self.emit(PluginEvent::CartChanged { item_count });
    }

    pub(super) fn emit_cue(&mut self, cue: FeedbackCue, report: Option<&mut TickReport>) {
        trace!(?cue, "feedback cue");
        if let Some(report) = report {
            report.cues.push(cue);
        }
        self.emit(PluginEvent::Feedback(cue));
    }

    /// Emits `ModeChanged` when the projected mode moved away from `before`.
    pub(super) fn emit_mode_change_since(&mut self, before: InteractionMode) -> bool {
        let after = self.model.interaction.mode();
        if after == before {
            return false;
        }
        self.emit(PluginEvent::ModeChanged {
            from: before,
            to: after,
        });
        true
    }
}
