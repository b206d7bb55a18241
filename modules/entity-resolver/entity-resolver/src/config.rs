//! Configuration for the entity resolver module.
//!
//! Loaded through [`modkit::config`]: a YAML file first, then
//! `ENTITY_RESOLVER__`-prefixed environment variables. The module reads its
//! `modules.entity_resolver.config` section:
//!
//! ```yaml
//! modules:
//!   entity_resolver:
//!     config:
//!       uuid_field: uuid
//!       priority: 100
//!       routes:
//!         node_canonical:
//!           path: /node/{node}
//!           options:
//!             parameters:
//!               node:
//!                 type: entity_uuid:node
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use entity_resolver_sdk::Route;
use modkit::config::{ConfigError, LayeredConfig, module_config_or_default};
use serde::Deserialize;

/// Name of this module's section under `modules`.
pub const MODULE_NAME: &str = "entity_resolver";

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "ENTITY_RESOLVER__";

/// Module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityResolverConfig {
    /// Field compared against the raw path value.
    pub uuid_field: String,

    /// Priority of the UUID converter (lower = consulted first).
    pub priority: i16,

    /// Route definitions keyed by route name.
    pub routes: BTreeMap<String, Route>,
}

impl Default for EntityResolverConfig {
    fn default() -> Self {
        Self {
            uuid_field: "uuid".to_owned(),
            priority: 100,
            routes: BTreeMap::new(),
        }
    }
}

impl EntityResolverConfig {
    /// Load this module's configuration from a YAML file plus environment.
    ///
    /// # Errors
    /// See [`module_config_or_default`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let layered = LayeredConfig::load(path, ENV_PREFIX)?;
        module_config_or_default(&layered, MODULE_NAME)
    }
}
