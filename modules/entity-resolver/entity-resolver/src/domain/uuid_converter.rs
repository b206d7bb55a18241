//! Route parameter converter for entities addressed by their UUID.

use std::sync::Arc;

use async_trait::async_trait;
use entity_resolver_sdk::{
    Entity, EntityTypeManager, ParamConverter, ParamConverterError, ParameterDeclaration, Route,
    RouteDefaults,
};
use modkit_security::SecurityContext;
use tracing::debug;

/// Tag claimed by [`EntityUuidConverter`] in `type: "entity_uuid:<kind>"`.
pub const ENTITY_UUID_TAG: &str = "entity_uuid";

/// Resolves a UUID path segment into the entity carrying that UUID.
///
/// ```yaml
/// my_module.route_name:
///   path: /some/path/to/{node}
///   options:
///     parameters:
///       node:
///         type: entity_uuid:node
/// ```
///
/// Lookup is a single equality condition on the UUID field, executed with the
/// caller's access scope. If the storage engine returns several keys, the
/// first entity of its bulk-load order is returned; no uniqueness is enforced.
pub struct EntityUuidConverter {
    type_manager: Arc<dyn EntityTypeManager>,
    uuid_field: String,
}

impl EntityUuidConverter {
    #[must_use]
    pub fn new(type_manager: Arc<dyn EntityTypeManager>) -> Self {
        Self {
            type_manager,
            uuid_field: Entity::UUID_FIELD.to_owned(),
        }
    }

    /// Match against a different field than `uuid`.
    #[must_use]
    pub fn with_uuid_field(mut self, field: &str) -> Self {
        field.clone_into(&mut self.uuid_field);
        self
    }

    #[must_use]
    pub fn uuid_field(&self) -> &str {
        &self.uuid_field
    }
}

#[async_trait]
impl ParamConverter for EntityUuidConverter {
    fn applies(&self, definition: &ParameterDeclaration, _name: &str, _route: &Route) -> bool {
        definition.has_tag(ENTITY_UUID_TAG)
    }

    async fn convert(
        &self,
        ctx: &SecurityContext,
        value: &str,
        definition: &ParameterDeclaration,
        name: &str,
        _defaults: &RouteDefaults,
    ) -> Result<Option<Entity>, ParamConverterError> {
        let kind = definition
            .kind()
            .ok_or_else(|| ParamConverterError::InvalidDeclaration {
                name: name.to_owned(),
                reason: format!(
                    "type '{}' does not name an entity category",
                    definition.param_type.as_deref().unwrap_or_default()
                ),
            })?;

        let storage = self.type_manager.storage(kind)?;
        let query = storage
            .query()
            .with_access_check(ctx)
            .where_equals(&self.uuid_field, value);

        let keys = storage.execute(&query).await?;
        if keys.is_empty() {
            debug!(kind, param = name, "no entity matched uuid");
            return Ok(None);
        }
        if keys.len() > 1 {
            debug!(
                kind,
                param = name,
                matches = keys.len(),
                "uuid matched several entities, taking the first"
            );
        }

        Ok(storage.load_many(&keys).await?.into_iter().next())
    }
}
