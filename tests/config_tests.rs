use gesture_cart::api::{ShopEngine, ShopEngineConfig};
use gesture_cart::core::{Catalog, Decimal, Product, ProductSize, Viewport, ZoneBounds};
use gesture_cart::hit::{LayoutSnapshot, StaticLayout};
use gesture_cart::input::{GestureSourceConfig, PointerSourceMode};
use gesture_cart::interaction::{CursorMode, GestureTimingConfig, MagnetBehavior};
use gesture_cart::scroll::ScrollBehavior;

fn build_engine(config: ShopEngineConfig) -> ShopEngine<StaticLayout> {
    let catalog = Catalog::new(vec![Product::new(1, "Air Max 90", Decimal::new(156, 0))])
        .expect("valid catalog");
    ShopEngine::new(
        StaticLayout::new(LayoutSnapshot::new(Viewport::new(640, 480))),
        catalog,
        config,
    )
    .expect("engine init")
}

#[test]
fn empty_json_yields_defaults() {
    let config = ShopEngineConfig::from_json_str("{}").expect("empty config");
    assert_eq!(config, ShopEngineConfig::default());
    assert_eq!(config.gesture_timing.hold_threshold_ms, 200);
    assert_eq!(config.gesture_timing.double_tap_window_ms, 300);
    assert_eq!(config.default_size, ProductSize(9));
    assert_eq!(config.cursor_mode, CursorMode::Magnet);
    assert_eq!(config.initial_pointer_mode, PointerSourceMode::Mouse);
}

#[test]
fn partial_json_overrides_only_given_sections() {
    let config = ShopEngineConfig::from_json_str(
        r#"{
            "zones": {"top_edge": 0.1, "bottom_edge": 0.9},
            "default_size": 11,
            "initial_pointer_mode": "Gesture"
        }"#,
    )
    .expect("partial config");
    assert_eq!(
        config.zones,
        ZoneBounds {
            top_edge: 0.1,
            bottom_edge: 0.9
        }
    );
    assert_eq!(config.default_size, ProductSize(11));
    assert_eq!(config.initial_pointer_mode, PointerSourceMode::Gesture);
    assert_eq!(config.scroll, ScrollBehavior::default());
}

#[test]
fn invalid_json_values_are_rejected() {
    let err = ShopEngineConfig::from_json_str(r#"{"zones": {"top_edge": 0.9, "bottom_edge": 0.1}}"#)
        .expect_err("inverted zones");
    assert!(format!("{err}").contains("invalid config"));

    let err = ShopEngineConfig::from_json_str("not json").expect_err("garbage");
    assert!(format!("{err}").contains("failed to parse config"));
}

#[test]
fn engine_init_rejects_invalid_config() {
    let config = ShopEngineConfig::default().with_gesture_source(GestureSourceConfig {
        folded_fingers_min: 5,
        ..GestureSourceConfig::default()
    });
    let catalog = Catalog::new(Vec::new()).expect("empty catalog");
    let result = ShopEngine::new(
        StaticLayout::new(LayoutSnapshot::new(Viewport::new(640, 480))),
        catalog,
        config,
    );
    let err = result.err().expect("invalid config must fail");
    assert!(format!("{err}").contains("folded fingers"));
}

#[test]
fn engine_init_rejects_empty_viewport() {
    let catalog = Catalog::new(Vec::new()).expect("empty catalog");
    let result = ShopEngine::new(
        StaticLayout::new(LayoutSnapshot::new(Viewport::new(0, 480))),
        catalog,
        ShopEngineConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn runtime_setters_validate_and_show_up_in_config() {
    let mut engine = build_engine(ShopEngineConfig::default());

    engine
        .set_scroll_behavior(ScrollBehavior {
            min_speed_px: 5.0,
            max_speed_px: 60.0,
            cruise_speed_px: 30.0,
        })
        .expect("valid scroll");
    engine
        .set_magnet_behavior(MagnetBehavior { radius_px: 64.0 })
        .expect("valid magnet");
    engine
        .set_gesture_timing(GestureTimingConfig {
            hold_threshold_ms: 150,
            ..GestureTimingConfig::default()
        })
        .expect("valid timing");
    engine.set_default_size(ProductSize(12));
    engine.set_cursor_mode(CursorMode::Normal);

    let config = engine.config();
    assert_eq!(config.scroll.max_speed_px, 60.0);
    assert_eq!(config.magnet.radius_px, 64.0);
    assert_eq!(config.gesture_timing.hold_threshold_ms, 150);
    assert_eq!(config.default_size, ProductSize(12));
    assert_eq!(config.cursor_mode, CursorMode::Normal);

    let err = engine
        .set_zone_bounds(ZoneBounds {
            top_edge: 0.5,
            bottom_edge: 0.5,
        })
        .expect_err("degenerate zones");
    assert!(format!("{err}").contains("above bottom"));
    assert_eq!(engine.zone_bounds(), ZoneBounds::default());

    let err = engine
        .set_magnet_behavior(MagnetBehavior { radius_px: -1.0 })
        .expect_err("negative radius");
    assert!(format!("{err}").contains("magnet radius"));
}

#[test]
fn gesture_source_config_can_be_replaced_at_runtime() {
    let mut engine = build_engine(ShopEngineConfig::default());
    let tuned = GestureSourceConfig {
        smoothing_alpha: 0.5,
        debounce_window: 3,
        ..GestureSourceConfig::default()
    };
    engine.set_gesture_source_config(tuned).expect("valid tuning");
    assert_eq!(engine.gesture_source_config(), tuned);

    let err = engine
        .set_gesture_source_config(GestureSourceConfig {
            debounce_window: 0,
            ..GestureSourceConfig::default()
        })
        .expect_err("empty window");
    assert!(format!("{err}").contains("debounce window"));
}
