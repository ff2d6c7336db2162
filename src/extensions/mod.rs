//! Host-facing hooks that observe the engine without touching its state.

pub mod plugins;

pub use plugins::{PluginContext, PluginEvent, ShopPlugin};
