//! Entity resolver module bootstrap.

use std::sync::Arc;

use anyhow::bail;
use entity_resolver_sdk::EntityTypeManager;
use tracing::{info, warn};

use crate::config::EntityResolverConfig;
use crate::domain::{ENTITY_UUID_TAG, EntityUuidConverter, ParamConverterManager};

/// Entity Resolver module.
///
/// On init this module:
/// 1. Validates its configuration
/// 2. Builds the UUID converter over the injected storage engine
/// 3. Registers it in a fresh [`ParamConverterManager`] at the configured priority
pub struct EntityResolverModule;

impl EntityResolverModule {
    /// Build the converter registry for the routing layer.
    ///
    /// Routes whose `entity_uuid` parameters name categories unknown to the
    /// storage engine are reported but not rejected; they fail at request time.
    ///
    /// # Errors
    /// Returns an error if `uuid_field` is empty.
    #[tracing::instrument(skip_all, fields(uuid_field = %cfg.uuid_field, priority = cfg.priority))]
    pub fn init(
        cfg: &EntityResolverConfig,
        type_manager: Arc<dyn EntityTypeManager>,
    ) -> anyhow::Result<ParamConverterManager> {
        if cfg.uuid_field.is_empty() {
            bail!("uuid_field must not be empty");
        }

        for (route_name, route) in &cfg.routes {
            for (param, declaration) in route.parameters() {
                if !declaration.has_tag(ENTITY_UUID_TAG) {
                    continue;
                }
                match declaration.kind() {
                    Some(kind) if type_manager.has_definition(kind) => {}
                    kind => warn!(
                        route = %route_name,
                        param = %param,
                        kind = kind.unwrap_or_default(),
                        "route parameter names an unknown entity category"
                    ),
                }
            }
        }

        let converter =
            EntityUuidConverter::new(type_manager).with_uuid_field(&cfg.uuid_field);

        let mut manager = ParamConverterManager::new();
        manager.register(Arc::new(converter), cfg.priority);

        info!(
            routes = cfg.routes.len(),
            converters = manager.len(),
            "Initialized entity_resolver"
        );
        Ok(manager)
    }
}
