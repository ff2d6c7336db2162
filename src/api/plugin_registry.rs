use tracing::debug;

use crate::error::{ShopError, ShopResult};
use crate::extensions::ShopPlugin;
use crate::hit::LayoutProvider;

use super::ShopEngine;
use super::engine_core::EngineCore;

impl<L: LayoutProvider> ShopEngine<L> {
    /// Registers a plugin. Ids must be non-empty and unique; plugins receive
    /// events in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn ShopPlugin>) -> ShopResult<()> {
        self.core.check_plugin_id(plugin.id())?;
        debug!(plugin = plugin.id(), "plugin registered");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let Some(position) = self.core.plugin_position(plugin_id) else {
            return false;
        };
        self.core.runtime.plugins.remove(position);
        debug!(plugin = plugin_id, "plugin unregistered");
        true
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core.plugin_position(plugin_id).is_some()
    }

    /// Registered plugin ids in dispatch order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.core.runtime.plugins.iter().map(|plugin| plugin.id())
    }
}

impl EngineCore {
    fn plugin_position(&self, plugin_id: &str) -> Option<usize> {
        self.runtime
            .plugins
            .iter()
            .position(|plugin| plugin.id() == plugin_id)
    }

    fn check_plugin_id(&self, plugin_id: &str) -> ShopResult<()> {
        if plugin_id.is_empty() {
            return Err(ShopError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugin_position(plugin_id).is_some() {
            return Err(ShopError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        Ok(())
    }
}
