use serde::{Deserialize, Serialize};

use crate::core::{EdgeZone, NormalizedPoint, ProductId, ScreenZone, ZoneBounds};

use super::{ControlAction, ControlLayer, LayoutSnapshot};

/// Semantic target under a point, highest precedence first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    /// Inside the modal card (modal open).
    ModalContent,
    /// Outside the modal card while it is open; a dismiss candidate.
    ModalBackdrop,
    Control(ControlAction),
    CartSlot(usize),
    ProductCard(ProductId),
    CartZone,
    ShelfZone,
    EdgeZone(EdgeZone),
    None,
}

/// Drop area containing a point, independent of what is painted above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropZone {
    Cart,
    Shelf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitResolution {
    pub target: HitTarget,
    pub zone: ScreenZone,
    /// Cart area wins over shelf area where both overlap.
    pub drop_zone: Option<DropZone>,
}

/// Engine-side facts the resolver needs besides geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitQuery {
    pub zones: ZoneBounds,
    pub modal_open: bool,
    /// Slot and line-control indices at or past this length are stale.
    pub cart_len: usize,
}

/// Resolves `point` against `layout`.
///
/// Precedence: modal surface, control, cart slot, product card, drop zone,
/// edge zone. Cart slots and product cards never match inside an edge band.
#[must_use]
pub fn resolve(point: NormalizedPoint, layout: &LayoutSnapshot, query: HitQuery) -> HitResolution {
    let zone = query.zones.classify(point.y);
    let px = layout.viewport.to_pixels(point);

    if query.modal_open {
        let target = layout
            .controls
            .iter()
            .rev()
            .find(|c| c.layer == ControlLayer::Modal && c.rect.contains(px))
            .map(|c| HitTarget::Control(c.action.clone()))
            .unwrap_or_else(|| match layout.modal_card {
                Some(card) if card.contains(px) => HitTarget::ModalContent,
                _ => HitTarget::ModalBackdrop,
            });
        return HitResolution {
            target,
            zone,
            drop_zone: None,
        };
    }

    let drop_zone = if layout.cart_zone.is_some_and(|r| r.contains(px)) {
        Some(DropZone::Cart)
    } else if layout.shelf_zone.is_some_and(|r| r.contains(px)) {
        Some(DropZone::Shelf)
    } else {
        None
    };

    let control = layout.controls.iter().rev().find(|c| {
        c.layer == ControlLayer::Page
            && c.rect.contains(px)
            && c.action.line_index().is_none_or(|index| index < query.cart_len)
    });
    if let Some(control) = control {
        return HitResolution {
            target: HitTarget::Control(control.action.clone()),
            zone,
            drop_zone,
        };
    }

    if !zone.is_edge() {
        let slot = layout
            .cart_slots
            .iter()
            .rev()
            .find(|s| s.index < query.cart_len && s.rect.contains(px));
        if let Some(slot) = slot {
            return HitResolution {
                target: HitTarget::CartSlot(slot.index),
                zone,
                drop_zone,
            };
        }
        let card = layout
            .product_cards
            .iter()
            .rev()
            .find(|c| c.rect.contains(px));
        if let Some(card) = card {
            return HitResolution {
                target: HitTarget::ProductCard(card.product_id),
                zone,
                drop_zone,
            };
        }
    }

    let target = match (drop_zone, zone.edge()) {
        (Some(DropZone::Cart), _) => HitTarget::CartZone,
        (Some(DropZone::Shelf), _) => HitTarget::ShelfZone,
        (None, Some(edge)) => HitTarget::EdgeZone(edge),
        (None, None) => HitTarget::None,
    };
    HitResolution {
        target,
        zone,
        drop_zone,
    }
}
