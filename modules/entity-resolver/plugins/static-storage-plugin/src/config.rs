//! Configuration for the static entity storage plugin.

use std::path::Path;

use entity_resolver_sdk::EntityKey;
use modkit::config::{ConfigError, LayeredConfig, module_config_or_default};
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Name of this plugin's section under `modules`.
pub const MODULE_NAME: &str = "static_storage_plugin";

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "STATIC_STORAGE_PLUGIN__";

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticStoragePluginConfig {
    /// Static category definitions.
    pub categories: Vec<CategoryConfig>,
}

impl StaticStoragePluginConfig {
    /// Load the `modules.static_storage_plugin.config` section from a YAML
    /// file plus environment. A missing section yields no categories.
    ///
    /// # Errors
    /// Returns an error if the sources cannot be read or the section is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let layered = LayeredConfig::load(path, ENV_PREFIX)?;
        module_config_or_default(&layered, MODULE_NAME)
    }
}

/// Configuration for a single entity category.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Category name, e.g. `node`.
    pub kind: String,

    /// Whether entities of this category are filtered by the caller's
    /// tenant scope. Unscoped categories are visible to every caller.
    #[serde(default)]
    pub tenant_scoped: bool,

    /// Entities in storage order.
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

/// Configuration for a single entity.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    /// Internal key, unique within the category.
    pub key: EntityKey,

    /// External identifier.
    pub uuid: String,

    /// Owning tenant.
    #[serde(default)]
    pub tenant_id: Option<Uuid>,

    /// Additional entity fields.
    #[serde(default)]
    pub fields: Map<String, Value>,
}
