use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ShopError, ShopResult};

use super::{Catalog, ProductId, ProductSize};

/// Uniqueness key of a cart line. One unit in flight is also described by
/// this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: ProductSize,
}

impl LineKey {
    #[must_use]
    pub fn new(product_id: ProductId, size: ProductSize) -> Self {
        Self { product_id, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub size: ProductSize,
    pub quantity: u32,
}

impl CartLineItem {
    #[must_use]
    pub fn key(self) -> LineKey {
        LineKey::new(self.product_id, self.size)
    }

    /// Quantities saturate at `u32::MAX`.
    fn bump(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

/// Outcome of removing one unit from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedUnit {
    pub key: LineKey,
    /// `true` when the line reached zero and was deleted.
    pub line_removed: bool,
}

/// Ordered line items keyed by `(product_id, size)`.
///
/// Invariants: keys are unique, quantities are always `>= 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from explicit lines, merging duplicate keys and
    /// dropping zero quantities.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines.into_iter().filter(|line| line.quantity > 0) {
            match cart.position(line.key()) {
                Some(index) => {
                    let merged = &mut cart.lines[index].quantity;
                    *merged = merged.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&CartLineItem> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn position(&self, key: LineKey) -> Option<usize> {
        self.lines.iter().position(|line| line.key() == key)
    }

    /// Merges one unit: increments the matching line or appends a new one.
    /// Returns the index of the touched line.
    pub fn add_unit(&mut self, key: LineKey) -> usize {
        match self.position(key) {
            Some(index) => {
                self.lines[index].bump();
                index
            }
            None => {
                self.lines.push(CartLineItem {
                    product_id: key.product_id,
                    size: key.size,
                    quantity: 1,
                });
                self.lines.len() - 1
            }
        }
    }

    /// Puts a lifted unit back. Merges when its line still exists, otherwise
    /// re-inserts the line at `index_hint` (clamped to the current length).
    pub fn restore_unit(&mut self, key: LineKey, index_hint: usize) -> usize {
        if let Some(index) = self.position(key) {
            self.lines[index].bump();
            return index;
        }
        let index = index_hint.min(self.lines.len());
        self.lines.insert(
            index,
            CartLineItem {
                product_id: key.product_id,
                size: key.size,
                quantity: 1,
            },
        );
        index
    }

    pub fn increment_line(&mut self, index: usize) -> ShopResult<LineKey> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(ShopError::CartLineOutOfRange { index, len })?;
        line.bump();
        Ok(line.key())
    }

    /// Removes one unit from line `index`, deleting the line at zero.
    ///
    /// Indices of later lines shift down when a line is deleted.
    pub fn remove_one_unit(&mut self, index: usize) -> ShopResult<RemovedUnit> {
        let len = self.lines.len();
        let Some(line) = self.lines.get_mut(index) else {
            return Err(ShopError::CartLineOutOfRange { index, len });
        };
        let key = line.key();
        if line.quantity > 1 {
            line.quantity -= 1;
            return Ok(RemovedUnit {
                key,
                line_removed: false,
            });
        }
        self.lines.remove(index);
        debug!(product = %key.product_id, size = %key.size, index, "cart line removed");
        Ok(RemovedUnit {
            key,
            line_removed: true,
        })
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self, catalog: &Catalog) -> ShopResult<Decimal> {
        let mut total = Decimal::ZERO;
        for line in &self.lines {
            let product = catalog.require(line.product_id)?;
            total += product.price * Decimal::from(line.quantity);
        }
        Ok(total)
    }

    pub fn snapshot(&self, catalog: &Catalog) -> ShopResult<CartSnapshot> {
        Ok(CartSnapshot {
            lines: self.lines.clone(),
            item_count: self.item_count(),
            total: self.total(catalog)?,
        })
    }
}

/// Read-only cart projection consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLineItem>,
    pub item_count: u64,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::{Cart, LineKey};
    use crate::core::{ProductId, ProductSize};

    fn key(id: u32, size: u16) -> LineKey {
        LineKey::new(ProductId(id), ProductSize(size))
    }

    #[test]
    fn restore_unit_reinserts_removed_line_at_original_index() {
        let mut cart = Cart::new();
        cart.add_unit(key(1, 9));
        cart.add_unit(key(2, 9));
        cart.add_unit(key(3, 9));

        let removed = cart.remove_one_unit(1).expect("line 1 exists");
        assert!(removed.line_removed);
        assert_eq!(cart.len(), 2);

        let index = cart.restore_unit(removed.key, 1);
        assert_eq!(index, 1);
        assert_eq!(cart.line(1).map(|line| line.product_id), Some(ProductId(2)));
    }

    #[test]
    fn restore_unit_clamps_stale_hint() {
        let mut cart = Cart::new();
        let index = cart.restore_unit(key(5, 10), 7);
        assert_eq!(index, 0);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn from_lines_merges_duplicate_keys() {
        let line = super::CartLineItem {
            product_id: ProductId(4),
            size: ProductSize(8),
            quantity: 2,
        };
        let cart = Cart::from_lines([line, line]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn from_lines_skips_zero_quantities_and_saturates_huge_ones() {
        let line = |quantity| super::CartLineItem {
            product_id: ProductId(4),
            size: ProductSize(8),
            quantity,
        };
        let cart = Cart::from_lines([line(0), line(u32::MAX), line(u32::MAX)]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(0).map(|l| l.quantity), Some(u32::MAX));

        let mut empty = Cart::from_lines([line(0)]);
        assert!(empty.is_empty());
        empty.add_unit(key(4, 8));
        assert_eq!(empty.item_count(), 1);
    }

    #[test]
    fn increments_saturate_at_max_quantity() {
        let mut cart = Cart::from_lines([super::CartLineItem {
            product_id: ProductId(1),
            size: ProductSize(9),
            quantity: u32::MAX,
        }]);
        assert_eq!(cart.add_unit(key(1, 9)), 0);
        cart.restore_unit(key(1, 9), 0);
        cart.increment_line(0).expect("line 0 exists");
        assert_eq!(cart.line(0).map(|l| l.quantity), Some(u32::MAX));
    }

    #[test]
    fn remove_out_of_range_reports_length() {
        let mut cart = Cart::new();
        let err = cart.remove_one_unit(0).expect_err("empty cart");
        assert!(format!("{err}").contains("len=0"));
    }
}
