use serde::{Deserialize, Serialize};

use crate::core::{ProductId, ProductSize, Rect, Viewport};
use crate::error::{ShopError, ShopResult};
use crate::input::PointerSourceMode;

/// What a button-like element does when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    IncrementLine(usize),
    DecrementLine(usize),
    ClearCart,
    SelectSize(ProductSize),
    AddSelectionToCart,
    CloseModal,
    SetPointerMode(PointerSourceMode),
    /// Host-defined action; the engine only reports it.
    Custom(String),
}

impl ControlAction {
    /// Cart line addressed by this action, if any.
    #[must_use]
    pub fn line_index(&self) -> Option<usize> {
        match self {
            Self::IncrementLine(index) | Self::DecrementLine(index) => Some(*index),
            _ => None,
        }
    }
}

/// Which surface a control is painted on. Page controls are covered while
/// the modal is open; modal controls only exist while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlLayer {
    #[default]
    Page,
    Modal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlRegion {
    pub rect: Rect,
    pub action: ControlAction,
    #[serde(default)]
    pub layer: ControlLayer,
    /// Attracts the cursor in magnet mode.
    #[serde(default)]
    pub magnetic: bool,
}

impl ControlRegion {
    #[must_use]
    pub fn new(rect: Rect, action: ControlAction) -> Self {
        Self {
            rect,
            action,
            layer: ControlLayer::Page,
            magnetic: false,
        }
    }

    #[must_use]
    pub fn in_modal(mut self) -> Self {
        self.layer = ControlLayer::Modal;
        self
    }

    #[must_use]
    pub fn magnetic(mut self) -> Self {
        self.magnetic = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartSlotRegion {
    pub index: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductCardRegion {
    pub product_id: ProductId,
    pub rect: Rect,
}

/// Per-frame geometry in viewport pixels. Regions later in each list are
/// painted on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    #[serde(default)]
    pub modal_card: Option<Rect>,
    #[serde(default)]
    pub controls: Vec<ControlRegion>,
    #[serde(default)]
    pub cart_slots: Vec<CartSlotRegion>,
    #[serde(default)]
    pub product_cards: Vec<ProductCardRegion>,
    #[serde(default)]
    pub cart_zone: Option<Rect>,
    #[serde(default)]
    pub shelf_zone: Option<Rect>,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            modal_card: None,
            controls: Vec::new(),
            cart_slots: Vec::new(),
            product_cards: Vec::new(),
            cart_zone: None,
            shelf_zone: None,
        }
    }

    #[must_use]
    pub fn with_product_card(mut self, product_id: u32, rect: Rect) -> Self {
        self.product_cards.push(ProductCardRegion {
            product_id: ProductId(product_id),
            rect,
        });
        self
    }

    #[must_use]
    pub fn with_cart_slot(mut self, index: usize, rect: Rect) -> Self {
        self.cart_slots.push(CartSlotRegion { index, rect });
        self
    }

    #[must_use]
    pub fn with_control(mut self, control: ControlRegion) -> Self {
        self.controls.push(control);
        self
    }

    #[must_use]
    pub fn with_cart_zone(mut self, rect: Rect) -> Self {
        self.cart_zone = Some(rect);
        self
    }

    #[must_use]
    pub fn with_shelf_zone(mut self, rect: Rect) -> Self {
        self.shelf_zone = Some(rect);
        self
    }

    #[must_use]
    pub fn with_modal_card(mut self, rect: Rect) -> Self {
        self.modal_card = Some(rect);
        self
    }

    /// Rejects empty viewports and non-finite or negative-size rectangles.
    pub fn validate(&self) -> ShopResult<()> {
        if !self.viewport.is_valid() {
            return Err(ShopError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let rects = self
            .modal_card
            .iter()
            .chain(self.cart_zone.iter())
            .chain(self.shelf_zone.iter())
            .chain(self.controls.iter().map(|c| &c.rect))
            .chain(self.cart_slots.iter().map(|s| &s.rect))
            .chain(self.product_cards.iter().map(|p| &p.rect));
        for rect in rects {
            let finite = [rect.left, rect.top, rect.width, rect.height]
                .iter()
                .all(|v| v.is_finite());
            if !finite || rect.width < 0.0 || rect.height < 0.0 {
                return Err(ShopError::InvalidData(format!(
                    "layout rectangle must be finite with non-negative size: {rect:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Hit-testing delegate implemented by the render collaborator.
pub trait LayoutProvider {
    /// Geometry as currently displayed.
    fn layout(&self) -> &LayoutSnapshot;
}

/// Headless provider holding a caller-managed snapshot. Used by tests and
/// hosts that push geometry instead of exposing it.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLayout {
    snapshot: LayoutSnapshot,
}

impl StaticLayout {
    #[must_use]
    pub fn new(snapshot: LayoutSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn set_snapshot(&mut self, snapshot: LayoutSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot_mut(&mut self) -> &mut LayoutSnapshot {
        &mut self.snapshot
    }
}

impl LayoutProvider for StaticLayout {
    fn layout(&self) -> &LayoutSnapshot {
        &self.snapshot
    }
}
