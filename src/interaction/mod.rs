//! Interaction state owned by the engine's state machine, plus the gesture
//! classifier feeding it.

mod gesture;

pub use gesture::{
    DOUBLE_TAP_WINDOW_MS, GestureClassifier, GestureEvent, GestureEvents, GestureKind,
    GestureTimingConfig, HOLD_THRESHOLD_MS, TAP_MAX_MS,
};

use serde::{Deserialize, Serialize};

use crate::core::{EdgeZone, LineKey, NormalizedPoint, ProductId, ProductSize, ScreenZone};

/// Public projection of the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    DraggingProduct,
    DraggingCartUnit,
    ModalOpen,
    /// Idle with cruise scrolling latched on.
    AutoScrollLocked,
}

/// Exactly one unit of a product in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPayload {
    /// Picked from the shelf; nothing was removed anywhere.
    Product { unit: LineKey },
    /// Lifted out of cart line `source_index`; the cart already excludes it.
    CartUnit { source_index: usize, unit: LineKey },
}

impl DragPayload {
    #[must_use]
    pub fn unit(self) -> LineKey {
        match self {
            Self::Product { unit } | Self::CartUnit { unit, .. } => unit,
        }
    }

    #[must_use]
    pub fn product_id(self) -> ProductId {
        self.unit().product_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalState {
    pub product_id: ProductId,
    pub selected_size: Option<ProductSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum InteractionPhase {
    #[default]
    Idle,
    Dragging(DragPayload),
    ModalOpen(ModalState),
}

/// Singleton interaction state. Drag payload and modal are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    phase: InteractionPhase,
    auto_scroll_lock: Option<EdgeZone>,
    active_zone: ScreenZone,
    grab_started_at: Option<u64>,
    last_tap_at: Option<u64>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self.phase {
            InteractionPhase::Dragging(DragPayload::Product { .. }) => {
                InteractionMode::DraggingProduct
            }
            InteractionPhase::Dragging(DragPayload::CartUnit { .. }) => {
                InteractionMode::DraggingCartUnit
            }
            InteractionPhase::ModalOpen(_) => InteractionMode::ModalOpen,
            InteractionPhase::Idle if self.auto_scroll_lock.is_some() => {
                InteractionMode::AutoScrollLocked
            }
            InteractionPhase::Idle => InteractionMode::Idle,
        }
    }

    #[must_use]
    pub fn drag_payload(&self) -> Option<DragPayload> {
        match self.phase {
            InteractionPhase::Dragging(payload) => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, InteractionPhase::Dragging(_))
    }

    #[must_use]
    pub fn modal(&self) -> Option<ModalState> {
        match self.phase {
            InteractionPhase::ModalOpen(modal) => Some(modal),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        matches!(self.phase, InteractionPhase::ModalOpen(_))
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, InteractionPhase::Idle)
    }

    #[must_use]
    pub fn auto_scroll_lock(&self) -> Option<EdgeZone> {
        self.auto_scroll_lock
    }

    #[must_use]
    pub fn active_zone(&self) -> ScreenZone {
        self.active_zone
    }

    #[must_use]
    pub fn grab_started_at(&self) -> Option<u64> {
        self.grab_started_at
    }

    #[must_use]
    pub fn last_tap_at(&self) -> Option<u64> {
        self.last_tap_at
    }

    pub(crate) fn begin_drag(&mut self, payload: DragPayload, started_at: Option<u64>) {
        debug_assert!(self.is_idle(), "drag pickup outside idle: {:?}", self.phase);
        self.phase = InteractionPhase::Dragging(payload);
        self.grab_started_at = started_at;
    }

    /// Ends the drag, returning the payload that was in flight.
    pub(crate) fn take_drag(&mut self) -> Option<DragPayload> {
        let payload = self.drag_payload()?;
        self.phase = InteractionPhase::Idle;
        self.grab_started_at = None;
        Some(payload)
    }

    pub(crate) fn open_modal(&mut self, product_id: ProductId) {
        debug_assert!(self.is_idle(), "modal opened outside idle: {:?}", self.phase);
        self.phase = InteractionPhase::ModalOpen(ModalState {
            product_id,
            selected_size: None,
        });
    }

    pub(crate) fn select_modal_size(&mut self, size: ProductSize) -> bool {
        match &mut self.phase {
            InteractionPhase::ModalOpen(modal) => {
                modal.selected_size = Some(size);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn close_modal(&mut self) -> Option<ModalState> {
        let modal = self.modal()?;
        self.phase = InteractionPhase::Idle;
        Some(modal)
    }

    pub(crate) fn set_auto_scroll_lock(&mut self, lock: Option<EdgeZone>) {
        self.auto_scroll_lock = lock;
    }

    pub(crate) fn set_active_zone(&mut self, zone: ScreenZone) {
        self.active_zone = zone;
    }

    pub(crate) fn record_tap(&mut self, timestamp_ms: u64) {
        self.last_tap_at = Some(timestamp_ms);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CursorMode {
    /// Cursor snaps onto nearby magnetic controls.
    #[default]
    Magnet,
    /// Cursor follows the raw pointer.
    Normal,
}

/// Magnetic snapping tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnetBehavior {
    /// Max distance in pixels between the raw pointer and a control centre.
    pub radius_px: f64,
}

impl Default for MagnetBehavior {
    fn default() -> Self {
        Self { radius_px: 48.0 }
    }
}

/// Effective cursor published to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CursorState {
    pub raw: NormalizedPoint,
    pub position: NormalizedPoint,
    pub snapped: bool,
    pub active: bool,
    pub zone: ScreenZone,
}

/// Audible/visual confirmation requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackCue {
    Pickup,
    DropIntoCart,
    ReturnToShelf,
}

/// How an in-flight unit was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Shelf product merged into the cart.
    AddedToCart,
    /// Shelf product released outside the cart; nothing changes.
    Discarded,
    /// Lifted cart unit dropped on the shelf; the removal stands.
    ReturnedToShelf,
    /// Lifted cart unit put back into the cart.
    RestoredToCart,
}
