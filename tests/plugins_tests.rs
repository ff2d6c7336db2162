use std::cell::RefCell;
use std::rc::Rc;

use gesture_cart::api::{ShopEngine, ShopEngineConfig};
use gesture_cart::core::{Catalog, Decimal, Product, Rect, Viewport};
use gesture_cart::extensions::{PluginContext, PluginEvent, ShopPlugin};
use gesture_cart::hit::{LayoutSnapshot, StaticLayout};
use gesture_cart::interaction::{DropOutcome, FeedbackCue, InteractionMode};

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<PluginEvent>>>,
    contexts: Rc<RefCell<Vec<PluginContext>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<PluginEvent>>>) -> Self {
        Self {
            id: id.into(),
            events,
            contexts: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ShopPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push(event.clone());
        self.contexts.borrow_mut().push(context);
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::Gesture(_) => "gesture",
        PluginEvent::ModeChanged { .. } => "mode",
        PluginEvent::DragStarted(_) => "drag_start",
        PluginEvent::DragResolved { .. } => "drag_end",
        PluginEvent::Feedback(_) => "cue",
        PluginEvent::CartChanged { .. } => "cart",
        PluginEvent::ControlActivated(_) => "control",
        PluginEvent::ModalOpened(_) => "modal_open",
        PluginEvent::ModalClosed(_) => "modal_close",
        PluginEvent::ScrollLockChanged(_) => "lock",
        PluginEvent::Scrolled(_) => "scroll",
        PluginEvent::PointerModeChanged(_) => "pointer_mode",
    }
}

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

#[test]
fn plugin_receives_deterministic_event_sequence_for_drag_to_cart() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    engine.mouse_move(0.5, 0.5);
    engine.mouse_down();
    engine.tick(0).expect("press");
    engine.tick(200).expect("hold");
    engine.mouse_move(0.85, 0.5);
    engine.mouse_up();
    engine.tick(300).expect("release");

    let kinds: Vec<&str> = events.borrow().iter().map(event_kind).collect();
    assert_eq!(
        kinds,
        vec![
            "gesture",
            "gesture",
            "drag_start",
            "cue",
            "mode",
            "gesture",
            "cart",
            "cue",
            "drag_end",
            "mode",
        ]
    );

    let recorded = events.borrow();
    assert!(recorded.contains(&PluginEvent::Feedback(FeedbackCue::Pickup)));
    assert!(recorded.contains(&PluginEvent::CartChanged { item_count: 1 }));
    assert!(recorded.iter().any(|event| matches!(
        event,
        PluginEvent::DragResolved {
            outcome: DropOutcome::AddedToCart,
            ..
        }
    )));
    assert!(recorded.contains(&PluginEvent::ModeChanged {
        from: InteractionMode::DraggingProduct,
        to: InteractionMode::Idle,
    }));
}

#[test]
fn plugin_context_reflects_state_after_mutation() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    let plugin = RecordingPlugin::new("ctx", events.clone());
    let contexts = plugin.contexts.clone();
    engine.register_plugin(Box::new(plugin)).expect("register");

    engine.open_modal(gesture_cart::core::ProductId(3)).expect("open modal");
    assert!(engine.add_modal_selection_to_cart());

    let recorded = events.borrow();
    let cart_event = recorded
        .iter()
        .position(|event| matches!(event, PluginEvent::CartChanged { .. }))
        .expect("cart changed");
    let context = contexts.borrow()[cart_event];
    assert_eq!(context.cart_item_count, 1);
    assert_eq!(context.cart_lines, 1);
}

#[test]
fn plugin_registry_rejects_empty_and_duplicate_ids() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));

    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("", events.clone())))
        .expect_err("empty id");
    assert!(format!("{err}").contains("must not be empty"));

    engine
        .register_plugin(Box::new(RecordingPlugin::new("sound", events.clone())))
        .expect("first registration");
    let err = engine
        .register_plugin(Box::new(RecordingPlugin::new("sound", events)))
        .expect_err("duplicate id");
    assert!(format!("{err}").contains("already registered"));

    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.has_plugin("sound"));
    assert_eq!(engine.plugin_ids().collect::<Vec<_>>(), vec!["sound"]);
    assert!(engine.unregister_plugin("sound"));
    assert!(!engine.unregister_plugin("sound"));
    assert_eq!(engine.plugin_count(), 0);
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let mut engine = build_engine();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register");
    engine.mouse_down();
    engine.tick(0).expect("tick");
    let seen = events.borrow().len();
    assert!(seen > 0);

    engine.unregister_plugin("recorder");
    engine.mouse_up();
    engine.tick(50).expect("tick");
    assert_eq!(events.borrow().len(), seen);
}
