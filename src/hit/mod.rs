//! Hit resolution against the layout published by the render collaborator.
//!
//! The engine never lays anything out itself. Each tick it reads a
//! [`LayoutSnapshot`] through a [`LayoutProvider`] and resolves pointer
//! positions with the pure [`resolve`] function.

mod layout;
mod resolver;

pub use layout::{
    CartSlotRegion, ControlAction, ControlLayer, ControlRegion, LayoutProvider, LayoutSnapshot,
    ProductCardRegion, StaticLayout,
};
pub use resolver::{DropZone, HitQuery, HitResolution, HitTarget, resolve};
