use crate::core::{ProductSize, ZoneBounds};
use crate::error::ShopResult;
use crate::hit::LayoutProvider;
use crate::input::GestureSourceConfig;
use crate::interaction::{CursorMode, GestureTimingConfig, MagnetBehavior};
use crate::scroll::ScrollBehavior;

use super::validation::{
    validate_gesture_source, validate_gesture_timing, validate_magnet, validate_scroll_behavior,
    validate_zone_bounds,
};
use super::{ShopEngine, ShopEngineConfig};

impl<L: LayoutProvider> ShopEngine<L> {
    /// Current tuning expressed as a config value.
    #[must_use]
    pub fn config(&self) -> ShopEngineConfig {
        let behavior = &self.core.behavior;
        ShopEngineConfig {
            gesture_timing: self.core.input.classifier.timing(),
            zones: behavior.zones,
            scroll: behavior.scroll.behavior(),
            gesture_source: self.core.input.pointer.hand().config(),
            cursor_mode: behavior.cursor_mode,
            magnet: behavior.magnet,
            default_size: behavior.default_size,
            initial_pointer_mode: self.pointer_mode(),
        }
    }

    #[must_use]
    pub fn gesture_timing(&self) -> GestureTimingConfig {
        self.core.input.classifier.timing()
    }

    /// Takes effect for the next press; a press in progress keeps its start.
    pub fn set_gesture_timing(&mut self, timing: GestureTimingConfig) -> ShopResult<()> {
        validate_gesture_timing(timing)?;
        self.core.input.classifier.set_timing(timing);
        Ok(())
    }

    #[must_use]
    pub fn zone_bounds(&self) -> ZoneBounds {
        self.core.behavior.zones
    }

    pub fn set_zone_bounds(&mut self, zones: ZoneBounds) -> ShopResult<()> {
        validate_zone_bounds(zones)?;
        self.core.behavior.zones = zones;
        Ok(())
    }

    #[must_use]
    pub fn scroll_behavior(&self) -> ScrollBehavior {
        self.core.behavior.scroll.behavior()
    }

    pub fn set_scroll_behavior(&mut self, scroll: ScrollBehavior) -> ShopResult<()> {
        validate_scroll_behavior(scroll)?;
        self.core.behavior.scroll.set_behavior(scroll);
        Ok(())
    }

    #[must_use]
    pub fn gesture_source_config(&self) -> GestureSourceConfig {
        self.core.input.pointer.hand().config()
    }

    /// Replaces hand-tracking tuning. Debounce history restarts.
    pub fn set_gesture_source_config(&mut self, config: GestureSourceConfig) -> ShopResult<()> {
        validate_gesture_source(config)?;
        self.core.input.pointer.hand_mut().set_config(config);
        Ok(())
    }

    #[must_use]
    pub fn cursor_mode(&self) -> CursorMode {
        self.core.behavior.cursor_mode
    }

    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.core.behavior.cursor_mode = mode;
    }

    #[must_use]
    pub fn magnet_behavior(&self) -> MagnetBehavior {
        self.core.behavior.magnet
    }

    pub fn set_magnet_behavior(&mut self, magnet: MagnetBehavior) -> ShopResult<()> {
        validate_magnet(magnet)?;
        self.core.behavior.magnet = magnet;
        Ok(())
    }

    #[must_use]
    pub fn default_size(&self) -> ProductSize {
        self.core.behavior.default_size
    }

    pub fn set_default_size(&mut self, size: ProductSize) {
        self.core.behavior.default_size = size;
    }
}
