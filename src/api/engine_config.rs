use serde::{Deserialize, Serialize};

use crate::core::{ProductSize, ZoneBounds};
use crate::error::{ShopError, ShopResult};
use crate::input::{GestureSourceConfig, PointerSourceMode};
use crate::interaction::{CursorMode, GestureTimingConfig, MagnetBehavior};
use crate::scroll::ScrollBehavior;

use super::validation::validate_config;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship tuning presets as JSON. Every field falls
/// back to its default when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ShopEngineConfig {
    #[serde(default)]
    pub gesture_timing: GestureTimingConfig,
    #[serde(default)]
    pub zones: ZoneBounds,
    #[serde(default)]
    pub scroll: ScrollBehavior,
    #[serde(default)]
    pub gesture_source: GestureSourceConfig,
    #[serde(default)]
    pub cursor_mode: CursorMode,
    #[serde(default)]
    pub magnet: MagnetBehavior,
    #[serde(default)]
    pub default_size: ProductSize,
    #[serde(default)]
    pub initial_pointer_mode: PointerSourceMode,
}

impl ShopEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ShopResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ShopError::InvalidConfig(format!("failed to parse config: {e}")))?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ShopResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ShopError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    #[must_use]
    pub fn with_gesture_timing(mut self, timing: GestureTimingConfig) -> Self {
        self.gesture_timing = timing;
        self
    }

    #[must_use]
    pub fn with_zones(mut self, zones: ZoneBounds) -> Self {
        self.zones = zones;
        self
    }

    #[must_use]
    pub fn with_scroll_behavior(mut self, scroll: ScrollBehavior) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub fn with_gesture_source(mut self, source: GestureSourceConfig) -> Self {
        self.gesture_source = source;
        self
    }

    #[must_use]
    pub fn with_cursor_mode(mut self, mode: CursorMode) -> Self {
        self.cursor_mode = mode;
        self
    }

    #[must_use]
    pub fn with_magnet(mut self, magnet: MagnetBehavior) -> Self {
        self.magnet = magnet;
        self
    }

    #[must_use]
    pub fn with_default_size(mut self, size: ProductSize) -> Self {
        self.default_size = size;
        self
    }

    #[must_use]
    pub fn with_initial_pointer_mode(mut self, mode: PointerSourceMode) -> Self {
        self.initial_pointer_mode = mode;
        self
    }
}
