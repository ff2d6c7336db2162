use crate::core::{Cart, Catalog};
use crate::hit::LayoutProvider;

use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `ShopEngine` fuses pointer input, classifies gestures, resolves hit
/// targets through the layout provider and drives the drag/cart/modal
/// state machine. It is single-threaded and advanced once per animation
/// frame via [`ShopEngine::tick`].
pub struct ShopEngine<L: LayoutProvider> {
    pub(super) layout: L,
    pub(super) core: EngineCore,
}

impl<L: LayoutProvider> ShopEngine<L> {
    #[must_use]
    pub fn layout_provider(&self) -> &L {
        &self.layout
    }

    /// Mutable access for hosts that push geometry into their provider.
    pub fn layout_provider_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.core.model.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.core.model.cart
    }

    #[must_use]
    pub fn into_layout_provider(self) -> L {
        self.layout
    }
}
