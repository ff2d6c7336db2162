use tracing::debug;

use crate::core::{LineKey, ProductId, ProductSize};
use crate::error::ShopResult;
use crate::extensions::PluginEvent;
use crate::hit::LayoutProvider;
use crate::interaction::ModalState;

use super::ShopEngine;
use super::engine_core::EngineCore;

impl<L: LayoutProvider> ShopEngine<L> {
    #[must_use]
    pub fn modal(&self) -> Option<ModalState> {
        self.core.model.interaction.modal()
    }

    /// Opens the product detail modal. An in-flight drag is resolved as
    /// abandoned first; an already open modal switches product.
    pub fn open_modal(&mut self, product_id: ProductId) -> ShopResult<()> {
        self.core.model.catalog.require(product_id)?;
        let before = self.core.model.interaction.mode();
        self.core.cancel_drag(None);
        self.core.close_modal_internal();
        self.core.open_modal_internal(product_id);
        self.core.emit_mode_change_since(before);
        Ok(())
    }

    /// Closes the modal. Returns `false` when none was open.
    pub fn close_modal(&mut self) -> bool {
        let before = self.core.model.interaction.mode();
        let closed = self.core.close_modal_internal();
        self.core.emit_mode_change_since(before);
        closed
    }

    /// Returns `false` when no modal is open.
    pub fn select_modal_size(&mut self, size: ProductSize) -> bool {
        self.core.model.interaction.select_modal_size(size)
    }

    /// Adds one unit of the modal's product at the selected size (or the
    /// configured default size) and closes the modal.
    pub fn add_modal_selection_to_cart(&mut self) -> bool {
        let before = self.core.model.interaction.mode();
        let added = self.core.add_modal_selection_internal();
        self.core.emit_mode_change_since(before);
        added
    }
}

impl EngineCore {
    pub(super) fn open_modal_internal(&mut self, product_id: ProductId) {
        debug!(product = %product_id, "modal opened");
        self.model.interaction.open_modal(product_id);
        self.emit(PluginEvent::ModalOpened(product_id));
    }

    /// Closing never leaves a unit in flight: the phase is either a drag or
    /// a modal, so there is nothing to resolve here.
    pub(super) fn close_modal_internal(&mut self) -> bool {
        let Some(modal) = self.model.interaction.close_modal() else {
            return false;
        };
        debug!(product = %modal.product_id, "modal closed");
        self.emit(PluginEvent::ModalClosed(modal.product_id));
        true
    }

    pub(super) fn add_modal_selection_internal(&mut self) -> bool {
        let Some(modal) = self.model.interaction.modal() else {
            return false;
        };
        let size = modal.selected_size.unwrap_or(self.behavior.default_size);
        self.model.cart.add_unit(LineKey::new(modal.product_id, size));
        debug!(product = %modal.product_id, %size, "modal selection added to cart");
        self.emit_cart_changed();
        self.close_modal_internal();
        true
    }
}
