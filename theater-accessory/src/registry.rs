//! Accessory registry
//!
//! Replaces a plugin-style global registration hook with an explicit,
//! constructor-injected registry: the host owns the registry, accessories
//! register factories under their public names, and creation passes the
//! device client in as a capability instead of reaching for process-wide
//! state.

use std::collections::HashMap;

use atv_client::AppleTvClient;

use crate::{AccessoryConfig, AccessoryError, Result, TheaterModeAccessory};

/// Public name the theater-mode accessory registers under
pub const THEATER_MODE_ACCESSORY: &str = "AppleTVTheaterMode";

type AccessoryFactory =
    Box<dyn Fn(Box<dyn AppleTvClient>, AccessoryConfig) -> TheaterModeAccessory + Send + Sync>;

/// Registry of accessory factories
///
/// # Example
///
/// ```rust,ignore
/// let registry = AccessoryRegistry::with_defaults();
/// let accessory = registry.create(
///     theater_accessory::THEATER_MODE_ACCESSORY,
///     client,
///     AccessoryConfig::from_json(raw)?,
/// )?;
/// ```
pub struct AccessoryRegistry {
    factories: HashMap<String, AccessoryFactory>,
}

impl AccessoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the theater-mode accessory pre-registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(THEATER_MODE_ACCESSORY, |client, config| {
            TheaterModeAccessory::new(client, config)
        });
        registry
    }

    /// Register a factory under an accessory name
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Box<dyn AppleTvClient>, AccessoryConfig) -> TheaterModeAccessory
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Instantiate a registered accessory
    pub fn create(
        &self,
        name: &str,
        client: Box<dyn AppleTvClient>,
        config: AccessoryConfig,
    ) -> Result<TheaterModeAccessory> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| AccessoryError::NotRegistered(name.to_string()))?;
        Ok(factory(client, config))
    }

    /// Names of all registered accessories
    pub fn accessory_names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }
}

impl Default for AccessoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
