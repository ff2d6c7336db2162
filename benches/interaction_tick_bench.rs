use criterion::{Criterion, criterion_group, criterion_main};
use gesture_cart::api::{ShopEngine, ShopEngineConfig};
use gesture_cart::core::{Catalog, Decimal, NormalizedPoint, Product, Rect, Viewport, ZoneBounds};
use gesture_cart::hit::{ControlAction, ControlRegion, HitQuery, LayoutSnapshot, StaticLayout, resolve};
use std::hint::black_box;

/// Storefront-sized layout: a 4x6 product grid, 12 cart slots with +/-
/// controls.
fn storefront_layout() -> LayoutSnapshot {
    let mut layout = LayoutSnapshot::new(Viewport::new(1920, 1080))
        .with_shelf_zone(Rect::new(0.0, 0.0, 1400.0, 1080.0))
        .with_cart_zone(Rect::new(1400.0, 0.0, 520.0, 1080.0))
        .with_control(
            ControlRegion::new(Rect::new(1420.0, 1000.0, 200.0, 50.0), ControlAction::ClearCart)
                .magnetic(),
        );
    for row in 0..4 {
        for col in 0..6 {
            let id = row * 6 + col + 1;
            let rect = Rect::new(
                20.0 + f64::from(col) * 225.0,
                40.0 + f64::from(row) * 250.0,
                200.0,
                230.0,
            );
            layout = layout.with_product_card(id, rect);
        }
    }
    for index in 0..12usize {
        let top = 100.0 + 70.0 * index as f64;
        layout = layout
            .with_cart_slot(index, Rect::new(1420.0, top, 480.0, 60.0))
            .with_control(
                ControlRegion::new(
                    Rect::new(1800.0, top + 10.0, 40.0, 40.0),
                    ControlAction::IncrementLine(index),
                )
                .magnetic(),
            )
            .with_control(
                ControlRegion::new(
                    Rect::new(1850.0, top + 10.0, 40.0, 40.0),
                    ControlAction::DecrementLine(index),
                )
                .magnetic(),
            );
    }
    layout
}

fn catalog() -> Catalog {
    Catalog::new(
        (1..=24)
            .map(|id| Product::new(id, format!("Shoe {id}"), Decimal::new(99, 0)))
            .collect(),
    )
    .expect("valid catalog")
}

fn bench_hit_resolve(c: &mut Criterion) {
    let layout = storefront_layout();
    let query = HitQuery {
        zones: ZoneBounds::default(),
        modal_open: false,
        cart_len: 12,
    };

    c.bench_function("hit_resolve_storefront", |b| {
        b.iter(|| {
            let _ = resolve(
                black_box(NormalizedPoint::new(0.93, 0.41)),
                black_box(&layout),
                black_box(query),
            );
        })
    });
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut engine = ShopEngine::new(
        StaticLayout::new(storefront_layout()),
        catalog(),
        ShopEngineConfig::default(),
    )
    .expect("engine init");
    let mut now = 0u64;

    c.bench_function("engine_tick_hover", |b| {
        b.iter(|| {
            now += 16;
            engine.mouse_move(black_box(0.94), black_box(0.2));
            let _ = engine.tick(now).expect("tick");
        })
    });
}

fn bench_drag_cycle(c: &mut Criterion) {
    let mut engine = ShopEngine::new(
        StaticLayout::new(storefront_layout()),
        catalog(),
        ShopEngineConfig::default(),
    )
    .expect("engine init");
    let mut now = 0u64;

    c.bench_function("engine_drag_to_cart_cycle", |b| {
        b.iter(|| {
            engine.mouse_move(0.1, 0.2);
            engine.mouse_down();
            engine.tick(now).expect("press");
            engine.tick(now + 250).expect("hold");
            engine.mouse_move(0.8, 0.5);
            engine.mouse_up();
            let report = engine.tick(now + 300).expect("release");
            now += 1_000;
            black_box(report);
            engine.clear_cart().expect("clear");
        })
    });
}

criterion_group!(benches, bench_hit_resolve, bench_idle_tick, bench_drag_cycle);
criterion_main!(benches);
