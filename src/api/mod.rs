//! Engine facade. `ShopEngine` is split across per-concern controller files
//! that all `impl` the same type.

mod behavior_controller;
mod cart_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod modal_controller;
mod plugin_dispatch;
mod plugin_registry;
mod pointer_controller;
mod snap_resolver;
mod snapshot_controller;
mod validation;

pub use engine::ShopEngine;
pub use engine_config::ShopEngineConfig;
pub use engine_snapshot::{EngineSnapshot, InteractionSnapshot};
pub use interaction_controller::{ModeTransition, TickReport};
