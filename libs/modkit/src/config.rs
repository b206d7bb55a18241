//! Typed module configuration access.
//!
//! Configuration is layered with `figment`: a YAML file first, then
//! environment variables carrying a caller-chosen prefix (`__` separates
//! nesting levels). Each module reads its own `modules.<name>.config`
//! section:
//!
//! ```yaml
//! modules:
//!   my_module:
//!     config:
//!       some_key: value
//! ```

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::de::DeserializeOwned;

/// Configuration error for typed config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] Box<figment::Error>),
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Provider of module-specific configuration (raw JSON sections only).
pub trait ConfigProvider: Send + Sync {
    /// Returns raw JSON section for the module, if any.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

/// Configuration tree merged from a YAML file and the environment.
#[derive(Debug, Clone, Default)]
pub struct LayeredConfig {
    root: serde_json::Value,
}

impl LayeredConfig {
    /// Layered source for `path` with `env_prefix` overrides on top.
    ///
    /// A missing file is not an error; it contributes nothing.
    #[must_use]
    pub fn figment(path: &Path, env_prefix: &str) -> Figment {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(env_prefix).split("__"))
    }

    /// Read the YAML file at `path` and apply `env_prefix` overrides.
    ///
    /// # Errors
    /// Returns `ConfigError::Source` if the file or environment cannot be parsed.
    pub fn load(path: &Path, env_prefix: &str) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path, env_prefix))
    }

    /// # Errors
    /// Returns `ConfigError::Source` if the sources cannot be extracted.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let root = figment.extract().map_err(Box::new)?;
        Ok(Self { root })
    }
}

impl ConfigProvider for LayeredConfig {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.root.get("modules")?.get(module_name)
    }
}

/// Lenient configuration loader that falls back to defaults.
///
/// - If the module is not present in config → returns `Ok(T::default())`
/// - If the module value is not an object → returns `Ok(T::default())`
/// - If the module has no "config" field → returns `Ok(T::default())`
/// - If "config" is present but invalid → returns `Err(ConfigError::InvalidConfig)`
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let Some(config_section) = provider
        .get_module_config(module_name)
        .and_then(serde_json::Value::as_object)
        .and_then(|module| module.get("config"))
    else {
        return Ok(T::default());
    };

    serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}
