use crate::core::{Cart, Catalog, ProductSize, ZoneBounds};
use crate::extensions::ShopPlugin;
use crate::input::PointerSourceAdapter;
use crate::interaction::{
    CursorMode, CursorState, GestureClassifier, InteractionState, MagnetBehavior,
};
use crate::scroll::ScrollController;

/// Catalog, cart and the singleton interaction state.
pub(super) struct ShopModel {
    pub(super) catalog: Catalog,
    pub(super) cart: Cart,
    pub(super) interaction: InteractionState,
}

/// Live pointer plumbing: source adapter, classifier, effective cursor.
pub(super) struct InputPipeline {
    pub(super) pointer: PointerSourceAdapter,
    pub(super) classifier: GestureClassifier,
    pub(super) cursor: CursorState,
}

/// Host-tunable behavior that is not owned by a sub-component.
pub(super) struct EngineBehavior {
    pub(super) zones: ZoneBounds,
    pub(super) cursor_mode: CursorMode,
    pub(super) magnet: MagnetBehavior,
    pub(super) default_size: ProductSize,
    pub(super) scroll: ScrollController,
}

#[derive(Default)]
pub(super) struct EngineRuntime {
    pub(super) plugins: Vec<Box<dyn ShopPlugin>>,
    pub(super) last_tick_ms: Option<u64>,
}

/// Internal engine core state used by the public facade (`ShopEngine`).
pub(super) struct EngineCore {
    pub(super) model: ShopModel,
    pub(super) input: InputPipeline,
    pub(super) behavior: EngineBehavior,
    pub(super) runtime: EngineRuntime,
}
