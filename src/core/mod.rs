pub mod cart;
pub mod catalog;
pub mod types;
pub mod zones;

pub use cart::{Cart, CartLineItem, CartSnapshot, LineKey, RemovedUnit};
pub use catalog::{Catalog, Product, ProductId, ProductSize};
pub use types::{NormalizedPoint, PixelPoint, Rect, Viewport};
pub use zones::{EdgeZone, ScreenZone, ZoneBounds};

pub use rust_decimal::Decimal;
