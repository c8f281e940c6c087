//! Accessory configuration

use serde::{Deserialize, Serialize};

use crate::Result;

/// Configuration for one theater-mode accessory
///
/// The host bridge hands this over as an opaque JSON blob. `credentials` is
/// the pairing credential string produced by the external pairing flow; its
/// structure is interpreted by `atv-client`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryConfig {
    /// Display name of the accessory (and of the paired device)
    pub name: String,
    /// Opaque pairing credential string
    pub credentials: String,
}

impl AccessoryConfig {
    /// Create a config from its parts
    pub fn new(name: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credentials: credentials.into(),
        }
    }

    /// Deserialize the host bridge's raw JSON config block
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
