use approx::assert_relative_eq;
use gesture_cart::api::{ShopEngine, ShopEngineConfig};
use gesture_cart::core::{Catalog, Decimal, EdgeZone, Product, ProductId, Rect, Viewport};
use gesture_cart::hit::{LayoutSnapshot, StaticLayout};
use gesture_cart::interaction::InteractionMode;
use gesture_cart::scroll::ScrollKind;

fn build_engine() -> ShopEngine<StaticLayout> {
    let catalog = Catalog::new(vec![Product::new(3, "Dunk Low", Decimal::new(130, 0))])
        .expect("valid catalog");
    let layout = StaticLayout::new(
        LayoutSnapshot::new(Viewport::new(1000, 1000))
            .with_shelf_zone(Rect::new(0.0, 0.0, 700.0, 1000.0))
            .with_cart_zone(Rect::new(700.0, 0.0, 300.0, 1000.0))
            .with_product_card(3, Rect::new(350.0, 350.0, 300.0, 300.0)),
    );
    ShopEngine::new(layout, catalog, ShopEngineConfig::default()).expect("engine init")
}

/// Two quick taps at `(x, y)` starting at `start_ms`. Returns the time of
/// the second release tick.
fn double_tap(engine: &mut ShopEngine<StaticLayout>, x: f64, y: f64, start_ms: u64) -> u64 {
    engine.mouse_move(x, y);
    engine.mouse_down();
    engine.tick(start_ms).expect("tick");
    engine.mouse_up();
    engine.tick(start_ms + 100).expect("tick");
    engine.mouse_down();
    engine.tick(start_ms + 150).expect("tick");
    engine.mouse_up();
    engine.tick(start_ms + 250).expect("tick");
    start_ms + 250
}

#[test]
fn double_tap_in_top_band_latches_cruise_scroll_until_next_double_tap() {
    let mut engine = build_engine();

    let t = double_tap(&mut engine, 0.3, 0.05, 0);
    assert_eq!(engine.interaction_mode(), InteractionMode::AutoScrollLocked);
    assert_eq!(
        engine.interaction_state().auto_scroll_lock(),
        Some(EdgeZone::Top)
    );

    // Released pointer in the middle band keeps cruising upwards.
    engine.mouse_move(0.3, 0.5);
    let report = engine.tick(t + 16).expect("tick");
    assert_eq!(report.scroll.kind, Some(ScrollKind::Cruise));
    assert_relative_eq!(report.scroll.delta_px, -20.0);

    // Re-entering the top band with an active pointer does not add manual scroll.
    engine.mouse_move(0.3, 0.0);
    engine.mouse_down();
    let report = engine.tick(t + 32).expect("tick");
    assert_eq!(report.scroll.kind, Some(ScrollKind::Cruise));
    assert_relative_eq!(report.scroll.delta_px, -20.0);
    engine.mouse_up();
    engine.tick(t + 400).expect("tick");

    // Any double-tap releases the lock, even over a product card.
    let t = double_tap(&mut engine, 0.5, 0.5, t + 1_000);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(engine.modal().is_none());
    let report = engine.tick(t + 16).expect("tick");
    assert_eq!(report.scroll.kind, None);
    assert_relative_eq!(report.scroll.delta_px, 0.0);
}

#[test]
fn double_tap_in_bottom_band_cruises_downwards() {
    let mut engine = build_engine();
    let t = double_tap(&mut engine, 0.3, 0.95, 0);
    assert_eq!(
        engine.interaction_state().auto_scroll_lock(),
        Some(EdgeZone::Bottom)
    );
    let report = engine.tick(t + 16).expect("tick");
    assert_relative_eq!(report.scroll.delta_px, 20.0);
}

#[test]
fn empty_grab_in_edge_band_scrolls_proportionally_to_depth() {
    let mut engine = build_engine();
    engine.mouse_move(0.3, 0.0);
    engine.mouse_down();
    let at_edge = engine.tick(0).expect("tick");
    assert_eq!(at_edge.scroll.kind, Some(ScrollKind::Manual));
    assert_relative_eq!(at_edge.scroll.delta_px, -45.0);

    engine.mouse_move(0.3, 0.075);
    let halfway = engine.tick(16).expect("tick");
    assert_relative_eq!(halfway.scroll.delta_px, -26.5, epsilon = 1e-9);

    engine.mouse_move(0.3, 0.925);
    let bottom = engine.tick(32).expect("tick");
    assert_relative_eq!(bottom.scroll.delta_px, 26.5, epsilon = 1e-9);

    engine.mouse_move(0.3, 0.5);
    let middle = engine.tick(48).expect("tick");
    assert_eq!(middle.scroll.kind, None);
}

#[test]
fn released_pointer_in_edge_band_does_not_scroll() {
    let mut engine = build_engine();
    engine.mouse_move(0.3, 0.02);
    let report = engine.tick(0).expect("tick");
    assert_eq!(report.scroll.kind, None);
}

#[test]
fn carrying_a_product_through_edge_band_does_not_scroll() {
    let mut engine = build_engine();
    engine.mouse_move(0.5, 0.5);
    engine.mouse_down();
    engine.tick(0).expect("tick");
    engine.tick(220).expect("tick");
    assert_eq!(engine.interaction_mode(), InteractionMode::DraggingProduct);

    engine.mouse_move(0.5, 0.98);
    let report = engine.tick(240).expect("tick");
    assert_eq!(report.scroll.kind, None);
}

#[test]
fn lock_suppresses_pickup() {
    let mut engine = build_engine();
    let t = double_tap(&mut engine, 0.3, 0.05, 0);

    engine.mouse_move(0.5, 0.5);
    engine.mouse_down();
    engine.tick(t + 1_000).expect("tick");
    engine.tick(t + 1_300).expect("tick");
    assert_eq!(engine.interaction_mode(), InteractionMode::AutoScrollLocked);
    assert!(engine.interaction_state().drag_payload().is_none());
}

#[test]
fn open_modal_pauses_cruise_scroll() {
    let mut engine = build_engine();
    let t = double_tap(&mut engine, 0.3, 0.05, 0);
    engine.open_modal(ProductId(3)).expect("open modal");

    let paused = engine.tick(t + 16).expect("tick");
    assert_relative_eq!(paused.scroll.delta_px, 0.0);

    assert!(engine.close_modal());
    let resumed = engine.tick(t + 32).expect("tick");
    assert_relative_eq!(resumed.scroll.delta_px, -20.0);
}
