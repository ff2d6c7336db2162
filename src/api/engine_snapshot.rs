use serde::{Deserialize, Serialize};

use crate::core::{CartSnapshot, EdgeZone, ScreenZone};
use crate::input::{PointerSample, PointerSourceMode};
use crate::interaction::{CursorState, DragPayload, InteractionMode, ModalState};

/// Flattened interaction state for rendering and fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionSnapshot {
    pub mode: InteractionMode,
    pub drag_payload: Option<DragPayload>,
    pub modal: Option<ModalState>,
    pub auto_scroll_lock: Option<EdgeZone>,
    pub active_zone: ScreenZone,
    pub grab_started_at: Option<u64>,
    pub last_tap_at: Option<u64>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// renderer bridges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub pointer_mode: PointerSourceMode,
    pub pointer: PointerSample,
    pub cursor: CursorState,
    pub capture_available: bool,
    pub interaction: InteractionSnapshot,
    pub cart: CartSnapshot,
}
