//! In-memory storage engine backed by plugin configuration.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::bail;
use async_trait::async_trait;
use entity_resolver_sdk::{
    AccessChecked, Entity, EntityKey, EntityQuery, EntityStorage, EntityStorageError,
    EntityTypeManager,
};
use modkit_security::AccessScope;
use tracing::{debug, info};

use crate::config::{CategoryConfig, StaticStoragePluginConfig};

/// Storage handle for one statically configured category.
///
/// Entities are kept in configuration order, which is the order queries
/// return keys in.
#[derive(Debug)]
pub struct StaticEntityStorage {
    kind: String,
    tenant_scoped: bool,
    entities: Vec<Entity>,
}

impl StaticEntityStorage {
    /// Build a storage handle from a category definition.
    ///
    /// # Errors
    /// Returns an error if two entities share the same key.
    pub fn from_config(cfg: CategoryConfig) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        let mut entities = Vec::with_capacity(cfg.entities.len());

        for e in cfg.entities {
            if !seen.insert(e.key.clone()) {
                bail!("duplicate key '{}' in category '{}'", e.key, cfg.kind);
            }
            entities.push(Entity {
                kind: cfg.kind.clone(),
                key: e.key,
                uuid: e.uuid,
                tenant_id: e.tenant_id,
                fields: e.fields,
            });
        }

        Ok(Self {
            kind: cfg.kind,
            tenant_scoped: cfg.tenant_scoped,
            entities,
        })
    }

    fn is_visible(&self, scope: &AccessScope, entity: &Entity) -> bool {
        !self.tenant_scoped || scope.permits_tenant(entity.tenant_id)
    }
}

#[async_trait]
impl EntityStorage for StaticEntityStorage {
    fn kind(&self) -> &str {
        &self.kind
    }

    async fn execute(
        &self,
        query: &EntityQuery<AccessChecked>,
    ) -> Result<Vec<EntityKey>, EntityStorageError> {
        if query.kind() != self.kind {
            return Err(EntityStorageError::Backend(format!(
                "query for category '{}' executed against '{}' storage",
                query.kind(),
                self.kind
            )));
        }

        let scope = query.scope();
        let keys: Vec<EntityKey> = self
            .entities
            .iter()
            .filter(|e| self.is_visible(scope, e) && query.matches(e))
            .map(|e| e.key.clone())
            .collect();

        debug!(kind = %self.kind, matched = keys.len(), "static storage query executed");
        Ok(keys)
    }

    async fn load_many(&self, keys: &[EntityKey]) -> Result<Vec<Entity>, EntityStorageError> {
        Ok(keys
            .iter()
            .filter_map(|key| self.entities.iter().find(|e| &e.key == key))
            .cloned()
            .collect())
    }
}

/// Static storage engine: one [`StaticEntityStorage`] per configured category.
#[derive(Debug, Default)]
pub struct StaticEntityTypeManager {
    storages: HashMap<String, Arc<StaticEntityStorage>>,
}

impl StaticEntityTypeManager {
    /// Build the engine from plugin configuration.
    ///
    /// # Errors
    /// Returns an error if a category is declared twice or contains duplicate keys.
    pub fn from_config(cfg: StaticStoragePluginConfig) -> anyhow::Result<Self> {
        let mut storages = HashMap::with_capacity(cfg.categories.len());

        for category in cfg.categories {
            let kind = category.kind.clone();
            if storages.contains_key(&kind) {
                bail!("category '{kind}' is declared more than once");
            }
            let storage = StaticEntityStorage::from_config(category)?;
            storages.insert(kind, Arc::new(storage));
        }

        let manager = Self { storages };
        info!(kinds = ?manager.kinds(), "Static entity storage initialized");
        Ok(manager)
    }

    /// Registered category names, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.storages.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl EntityTypeManager for StaticEntityTypeManager {
    fn storage(&self, kind: &str) -> Result<Arc<dyn EntityStorage>, EntityStorageError> {
        self.storages
            .get(kind)
            .map(|s| Arc::clone(s) as Arc<dyn EntityStorage>)
            .ok_or_else(|| EntityStorageError::UnknownCategory {
                kind: kind.to_owned(),
            })
    }
}
