use rust_decimal::Decimal;

use crate::core::{CartSnapshot, ProductId};
use crate::error::ShopResult;
use crate::hit::{ControlAction, LayoutProvider};
use crate::interaction::DragPayload;

use super::ShopEngine;

impl<L: LayoutProvider> ShopEngine<L> {
    /// Cart projection for rendering.
    pub fn cart_snapshot(&self) -> ShopResult<CartSnapshot> {
        self.core.model.cart.snapshot(&self.core.model.catalog)
    }

    pub fn cart_total(&self) -> ShopResult<Decimal> {
        self.core.model.cart.total(&self.core.model.catalog)
    }

    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.core.model.cart.item_count()
    }

    /// Units of `product_id` across all sizes, including a unit lifted out of
    /// the cart and still in flight.
    #[must_use]
    pub fn units_of(&self, product_id: ProductId) -> u64 {
        let in_cart: u64 = self
            .core
            .model
            .cart
            .lines()
            .iter()
            .filter(|line| line.product_id == product_id)
            .map(|line| u64::from(line.quantity))
            .sum();
        let in_flight = self
            .core
            .model
            .interaction
            .drag_payload()
            .filter(|payload| {
                matches!(payload, DragPayload::CartUnit { .. })
                    && payload.product_id() == product_id
            })
            .map_or(0, |_| 1);
        in_cart + in_flight
    }

    /// Empties the cart. No-op while a drag is in flight.
    pub fn clear_cart(&mut self) -> ShopResult<()> {
        self.activate_control(ControlAction::ClearCart)
    }

    /// Runs a control action as if it had been activated by a gesture.
    ///
    /// Rejected as a no-op while a drag is in flight, like gesture
    /// activation.
    pub fn activate_control(&mut self, action: ControlAction) -> ShopResult<()> {
        if self.core.model.interaction.is_dragging() {
            return Ok(());
        }
        let before = self.core.model.interaction.mode();
        self.core.dispatch_control(action, None)?;
        self.core.emit_mode_change_since(before);
        Ok(())
    }
}
