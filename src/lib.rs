//! gesture-cart: headless pointer interaction engine for drag-to-cart
//! shopping UIs.
//!
//! Mouse, touch and camera hand-tracking input are fused into one abstract
//! pointer, classified into press/hold/tap/double-tap gestures, resolved
//! against renderer-supplied layout, and fed to a deterministic state
//! machine that owns drag pickup, drop resolution, cart mutation, the
//! product modal and edge auto-scroll.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod hit;
pub mod input;
pub mod interaction;
pub mod scroll;
pub mod telemetry;

pub use api::{ShopEngine, ShopEngineConfig};
pub use error::{ShopError, ShopResult};
