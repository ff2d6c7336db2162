use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{EdgeZone, LineKey};
use crate::error::{ShopError, ShopResult};
use crate::extensions::PluginEvent;
use crate::hit::{
    ControlAction, DropZone, HitQuery, HitResolution, HitTarget, LayoutProvider, LayoutSnapshot,
    resolve,
};
use crate::interaction::{
    CursorState, DragPayload, DropOutcome, FeedbackCue, GestureEvent, GestureEvents, GestureKind,
    InteractionMode, InteractionState,
};
use crate::scroll::{ScrollInput, ScrollStep};

use super::ShopEngine;
use super::engine_core::EngineCore;

/// Mode change applied during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTransition {
    pub from: InteractionMode,
    pub to: InteractionMode,
}

/// Everything one tick produced, for hosts that prefer polling over plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub timestamp_ms: u64,
    pub gestures: GestureEvents,
    /// Target under the cursor after the tick, for hover rendering.
    pub hover: HitTarget,
    pub transition: Option<ModeTransition>,
    pub drop_outcome: Option<DropOutcome>,
    pub cues: SmallVec<[FeedbackCue; 2]>,
    pub scroll: ScrollStep,
}

impl TickReport {
    fn new(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            gestures: GestureEvents::new(),
            hover: HitTarget::None,
            transition: None,
            drop_outcome: None,
            cues: SmallVec::new(),
            scroll: ScrollStep::default(),
        }
    }
}

impl<L: LayoutProvider> ShopEngine<L> {
    #[must_use]
    pub fn interaction_state(&self) -> &InteractionState {
        &self.core.model.interaction
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.core.model.interaction.mode()
    }

    #[must_use]
    pub fn cursor_state(&self) -> CursorState {
        self.core.input.cursor
    }

    /// Resolves what sits under the current effective cursor.
    #[must_use]
    pub fn hit_test_cursor(&self) -> HitResolution {
        let layout = self.layout.layout();
        resolve(
            self.core.input.cursor.position,
            layout,
            self.core.hit_query(),
        )
    }

    /// Advances the engine by one animation frame.
    ///
    /// Reads the latest pointer sample, folds it through the gesture
    /// classifier, applies at most one state transition and computes this
    /// frame's scroll step. `now_ms` must not go backwards.
    pub fn tick(&mut self, now_ms: u64) -> ShopResult<TickReport> {
        let layout = self.layout.layout();
        self.core.step(now_ms, layout)
    }
}

impl EngineCore {
    pub(super) fn hit_query(&self) -> HitQuery {
        HitQuery {
            zones: self.behavior.zones,
            modal_open: self.model.interaction.is_modal_open(),
            cart_len: self.model.cart.len(),
        }
    }

    fn step(&mut self, now_ms: u64, layout: &LayoutSnapshot) -> ShopResult<TickReport> {
        if let Some(last) = self.runtime.last_tick_ms {
            if now_ms < last {
                return Err(ShopError::InvalidData(format!(
                    "tick timestamp went backwards: {now_ms} < {last}"
                )));
            }
        }
        layout.validate()?;
        self.runtime.last_tick_ms = Some(now_ms);

        let mut report = TickReport::new(now_ms);
        let mode_before = self.model.interaction.mode();

        let sample = self.input.pointer.current_pointer(now_ms);
        let cursor = self.resolve_cursor(sample, layout);
        self.input.cursor = cursor;
        self.model.interaction.set_active_zone(cursor.zone);

        let mut classified = sample;
        classified.position = cursor.position;
        let gestures = self.input.classifier.fold(classified);

        let mut consumed = false;
        for gesture in &gestures {
            self.emit(PluginEvent::Gesture(*gesture));
            if consumed {
                trace!(kind = ?gesture.kind, "gesture skipped: tick already transitioned");
                if gesture.kind == GestureKind::HoldStart {
                    // Still held: report the hold again next tick.
                    self.input.classifier.rearm_hold();
                }
                continue;
            }
            consumed = self.apply_gesture(*gesture, layout, &mut report)?;
        }
        report.gestures = gestures;

        let interaction = &self.model.interaction;
        let scroll = self.behavior.scroll.step(ScrollInput {
            lock: interaction.auto_scroll_lock(),
            zone: cursor.zone,
            penetration: self.behavior.zones.penetration(cursor.position.y),
            pointer_active: cursor.active,
            dragging: interaction.is_dragging(),
            modal_open: interaction.is_modal_open(),
        });
        if scroll.kind.is_some() {
            self.emit(PluginEvent::Scrolled(scroll));
        }
        report.scroll = scroll;

        if self.emit_mode_change_since(mode_before) {
            report.transition = Some(ModeTransition {
                from: mode_before,
                to: self.model.interaction.mode(),
            });
        }
        report.hover = resolve(cursor.position, layout, self.hit_query()).target;
        Ok(report)
    }

    /// Returns `true` when the gesture changed state or dispatched an action.
    fn apply_gesture(
        &mut self,
        gesture: GestureEvent,
        layout: &LayoutSnapshot,
        report: &mut TickReport,
    ) -> ShopResult<bool> {
        let hit = resolve(gesture.position, layout, self.hit_query());
        match gesture.kind {
            GestureKind::Press => Ok(false),
            GestureKind::HoldStart => self.try_pickup(&hit, report),
            GestureKind::Release => self.resolve_drop(&hit, report),
            GestureKind::DoubleTap => self.on_double_tap(&hit, gesture, report),
            GestureKind::Tap => self.on_tap(&hit, gesture, report),
        }
    }

    fn try_pickup(&mut self, hit: &HitResolution, report: &mut TickReport) -> ShopResult<bool> {
        let interaction = &self.model.interaction;
        if !interaction.is_idle() || interaction.auto_scroll_lock().is_some() || hit.zone.is_edge()
        {
            trace!(mode = ?interaction.mode(), zone = ?hit.zone, "pickup suppressed");
            return Ok(false);
        }
        let started_at = self.input.classifier.press_started_at();

        let payload = match hit.target {
            HitTarget::ProductCard(product_id) => {
                if !self.model.catalog.contains(product_id) {
                    warn!(product = %product_id, "product card references unknown product");
                    return Ok(false);
                }
                DragPayload::Product {
                    unit: LineKey::new(product_id, self.behavior.default_size),
                }
            }
            HitTarget::CartSlot(index) => {
                let removed = self.model.cart.remove_one_unit(index)?;
                self.emit_cart_changed();
                DragPayload::CartUnit {
                    source_index: index,
                    unit: removed.key,
                }
            }
            _ => return Ok(false),
        };

        debug!(?payload, "drag pickup");
        self.model.interaction.begin_drag(payload, started_at);
        self.emit(PluginEvent::DragStarted(payload));
        self.emit_cue(FeedbackCue::Pickup, Some(report));
        Ok(true)
    }

    fn resolve_drop(&mut self, hit: &HitResolution, report: &mut TickReport) -> ShopResult<bool> {
        let Some(payload) = self.model.interaction.take_drag() else {
            return Ok(false);
        };
        let outcome = match payload {
            DragPayload::Product { unit } => {
                if hit.drop_zone == Some(DropZone::Cart) {
                    self.model.cart.add_unit(unit);
                    self.emit_cart_changed();
                    self.emit_cue(FeedbackCue::DropIntoCart, Some(&mut *report));
                    DropOutcome::AddedToCart
                } else {
                    DropOutcome::Discarded
                }
            }
            DragPayload::CartUnit { .. } if hit.drop_zone == Some(DropZone::Shelf) => {
                self.emit_cue(FeedbackCue::ReturnToShelf, Some(&mut *report));
                DropOutcome::ReturnedToShelf
            }
            DragPayload::CartUnit { source_index, unit } => {
                self.model.cart.restore_unit(unit, source_index);
                self.emit_cart_changed();
                DropOutcome::RestoredToCart
            }
        };
        debug!(?payload, ?outcome, "drag resolved");
        report.drop_outcome = Some(outcome);
        self.emit(PluginEvent::DragResolved { payload, outcome });
        Ok(true)
    }

    fn on_double_tap(
        &mut self,
        hit: &HitResolution,
        gesture: GestureEvent,
        report: &mut TickReport,
    ) -> ShopResult<bool> {
        if self.model.interaction.is_dragging() {
            return Ok(false);
        }
        self.model.interaction.record_tap(gesture.timestamp_ms);

        if self.model.interaction.is_modal_open() {
            return match &hit.target {
                HitTarget::Control(action) => self.dispatch_control(action.clone(), Some(report)),
                HitTarget::ModalBackdrop => Ok(self.close_modal_internal()),
                _ => Ok(false),
            };
        }

        if self.model.interaction.auto_scroll_lock().is_some() {
            self.set_scroll_lock(None);
            return Ok(true);
        }

        match &hit.target {
            HitTarget::Control(action) => self.dispatch_control(action.clone(), Some(report)),
            _ if hit.zone.is_edge() => {
                self.set_scroll_lock(hit.zone.edge());
                Ok(true)
            }
            HitTarget::ProductCard(product_id) => {
                if !self.model.catalog.contains(*product_id) {
                    warn!(product = %product_id, "double-tap on unknown product");
                    return Ok(false);
                }
                self.open_modal_internal(*product_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn on_tap(
        &mut self,
        hit: &HitResolution,
        gesture: GestureEvent,
        report: &mut TickReport,
    ) -> ShopResult<bool> {
        if self.model.interaction.is_dragging() {
            return Ok(false);
        }
        self.model.interaction.record_tap(gesture.timestamp_ms);
        match &hit.target {
            HitTarget::Control(action) => self.dispatch_control(action.clone(), Some(report)),
            _ => Ok(false),
        }
    }

    fn set_scroll_lock(&mut self, lock: Option<EdgeZone>) {
        debug!(?lock, "auto-scroll lock toggled");
        self.model.interaction.set_auto_scroll_lock(lock);
        self.emit(PluginEvent::ScrollLockChanged(lock));
    }

    /// Runs a control's built-in effect. Every action is reported to plugins.
    pub(super) fn dispatch_control(
        &mut self,
        action: ControlAction,
        report: Option<&mut TickReport>,
    ) -> ShopResult<bool> {
        debug!(?action, "control activated");
        self.emit(PluginEvent::ControlActivated(action.clone()));
        match action {
            ControlAction::IncrementLine(index) => {
                self.model.cart.increment_line(index)?;
                self.emit_cart_changed();
            }
            ControlAction::DecrementLine(index) => {
                self.model.cart.remove_one_unit(index)?;
                self.emit_cart_changed();
            }
            ControlAction::ClearCart => {
                self.model.cart.clear();
                self.emit_cart_changed();
            }
            ControlAction::SelectSize(size) => {
                self.model.interaction.select_modal_size(size);
            }
            ControlAction::AddSelectionToCart => {
                if self.add_modal_selection_internal() {
                    self.emit_cue(FeedbackCue::DropIntoCart, report);
                }
            }
            ControlAction::CloseModal => {
                self.close_modal_internal();
            }
            ControlAction::SetPointerMode(mode) => {
                self.switch_pointer_mode(mode, report);
            }
            ControlAction::Custom(_) => {}
        }
        Ok(true)
    }

    /// Resolves an in-flight drag as abandoned: a lifted cart unit goes back
    /// into the cart, a shelf product is simply dropped.
    pub(super) fn cancel_drag(&mut self, report: Option<&mut TickReport>) -> Option<DropOutcome> {
        let payload = self.model.interaction.take_drag()?;
        let outcome = match payload {
            DragPayload::Product { .. } => DropOutcome::Discarded,
            DragPayload::CartUnit { source_index, unit } => {
                self.model.cart.restore_unit(unit, source_index);
                self.emit_cart_changed();
                DropOutcome::RestoredToCart
            }
        };
        debug!(?payload, ?outcome, "in-flight drag cancelled");
        if let Some(report) = report {
            report.drop_outcome = Some(outcome);
        }
        self.emit(PluginEvent::DragResolved { payload, outcome });
        Some(outcome)
    }
}
