use tracing::debug;

use crate::core::{Cart, Catalog};
use crate::error::ShopResult;
use crate::hit::LayoutProvider;
use crate::input::PointerSourceAdapter;
use crate::interaction::{CursorState, GestureClassifier, InteractionState};
use crate::scroll::ScrollController;

use super::engine_core::{EngineBehavior, EngineCore, EngineRuntime, InputPipeline, ShopModel};
use super::validation::validate_config;
use super::{ShopEngine, ShopEngineConfig};

impl<L: LayoutProvider> ShopEngine<L> {
    /// Creates an engine with an empty cart.
    pub fn new(layout: L, catalog: Catalog, config: ShopEngineConfig) -> ShopResult<Self> {
        Self::with_cart(layout, catalog, Cart::new(), config)
    }

    /// Creates an engine seeded with an existing cart. Every cart line must
    /// reference a catalog product.
    pub fn with_cart(
        layout: L,
        catalog: Catalog,
        cart: Cart,
        config: ShopEngineConfig,
    ) -> ShopResult<Self> {
        validate_config(&config)?;
        layout.layout().validate()?;
        for line in cart.lines() {
            catalog.require(line.product_id)?;
        }

        debug!(
            products = catalog.len(),
            cart_lines = cart.len(),
            pointer_mode = ?config.initial_pointer_mode,
            "shop engine initialized"
        );

        Ok(Self {
            layout,
            core: EngineCore {
                model: ShopModel {
                    catalog,
                    cart,
                    interaction: InteractionState::default(),
                },
                input: InputPipeline {
                    pointer: PointerSourceAdapter::new(
                        config.initial_pointer_mode,
                        config.gesture_source,
                    ),
                    classifier: GestureClassifier::new(config.gesture_timing),
                    cursor: CursorState::default(),
                },
                behavior: EngineBehavior {
                    zones: config.zones,
                    cursor_mode: config.cursor_mode,
                    magnet: config.magnet,
                    default_size: config.default_size,
                    scroll: ScrollController::new(config.scroll),
                },
                runtime: EngineRuntime::default(),
            },
        })
    }
}
