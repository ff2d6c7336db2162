use crate::core::ZoneBounds;
use crate::error::{ShopError, ShopResult};
use crate::input::GestureSourceConfig;
use crate::interaction::{GestureTimingConfig, MagnetBehavior};
use crate::scroll::ScrollBehavior;

use super::ShopEngineConfig;

pub(super) fn validate_config(config: &ShopEngineConfig) -> ShopResult<()> {
    validate_gesture_timing(config.gesture_timing)?;
    validate_zone_bounds(config.zones)?;
    validate_scroll_behavior(config.scroll)?;
    validate_gesture_source(config.gesture_source)?;
    validate_magnet(config.magnet)?;
    Ok(())
}

pub(super) fn validate_gesture_timing(timing: GestureTimingConfig) -> ShopResult<()> {
    if timing.hold_threshold_ms == 0 {
        return Err(ShopError::InvalidConfig(
            "hold threshold must be > 0 ms".to_owned(),
        ));
    }
    if timing.tap_max_ms == 0 || timing.double_tap_window_ms == 0 {
        return Err(ShopError::InvalidConfig(
            "tap max and double-tap window must be > 0 ms".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_zone_bounds(zones: ZoneBounds) -> ShopResult<()> {
    let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
    if !in_unit(zones.top_edge) || !in_unit(zones.bottom_edge) {
        return Err(ShopError::InvalidConfig(
            "zone edges must be finite and in [0, 1]".to_owned(),
        ));
    }
    if zones.top_edge >= zones.bottom_edge {
        return Err(ShopError::InvalidConfig(
            "top zone edge must be above bottom zone edge".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_scroll_behavior(scroll: ScrollBehavior) -> ShopResult<()> {
    let speeds = [scroll.min_speed_px, scroll.max_speed_px, scroll.cruise_speed_px];
    if speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
        return Err(ShopError::InvalidConfig(
            "scroll speeds must be finite and >= 0".to_owned(),
        ));
    }
    if scroll.min_speed_px > scroll.max_speed_px {
        return Err(ShopError::InvalidConfig(
            "scroll min speed must not exceed max speed".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_gesture_source(source: GestureSourceConfig) -> ShopResult<()> {
    if !source.smoothing_alpha.is_finite()
        || source.smoothing_alpha <= 0.0
        || source.smoothing_alpha > 1.0
    {
        return Err(ShopError::InvalidConfig(
            "smoothing alpha must be finite and in (0, 1]".to_owned(),
        ));
    }
    if !source.pinch_threshold.is_finite() || source.pinch_threshold < 0.0 {
        return Err(ShopError::InvalidConfig(
            "pinch threshold must be finite and >= 0".to_owned(),
        ));
    }
    if source.folded_fingers_min == 0 || source.folded_fingers_min > 4 {
        return Err(ShopError::InvalidConfig(
            "folded fingers minimum must be in 1..=4".to_owned(),
        ));
    }
    if source.debounce_window == 0 {
        return Err(ShopError::InvalidConfig(
            "debounce window must hold at least one sample".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_magnet(magnet: MagnetBehavior) -> ShopResult<()> {
    if !magnet.radius_px.is_finite() || magnet.radius_px < 0.0 {
        return Err(ShopError::InvalidConfig(
            "magnet radius must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
