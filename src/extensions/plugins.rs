use serde::{Deserialize, Serialize};

use crate::core::{EdgeZone, ProductId};
use crate::hit::ControlAction;
use crate::input::PointerSourceMode;
use crate::interaction::{
    CursorState, DragPayload, DropOutcome, FeedbackCue, GestureEvent, InteractionMode,
};
use crate::scroll::ScrollStep;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub interaction_mode: InteractionMode,
    pub pointer_mode: PointerSourceMode,
    pub cursor: CursorState,
    pub cart_lines: usize,
    pub cart_item_count: u64,
    pub auto_scroll_lock: Option<EdgeZone>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    Gesture(GestureEvent),
    ModeChanged {
        from: InteractionMode,
        to: InteractionMode,
    },
    DragStarted(DragPayload),
    DragResolved {
        payload: DragPayload,
        outcome: DropOutcome,
    },
    Feedback(FeedbackCue),
    CartChanged {
        item_count: u64,
    },
    ControlActivated(ControlAction),
    ModalOpened(ProductId),
    ModalClosed(ProductId),
    ScrollLockChanged(Option<EdgeZone>),
    Scrolled(ScrollStep),
    PointerModeChanged(PointerSourceMode),
}

/// Extension hook interface for host-side observers (sound, analytics,
/// haptics).
///
/// Plugins observe events and read engine context without mutating engine
/// state directly.
pub trait ShopPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
