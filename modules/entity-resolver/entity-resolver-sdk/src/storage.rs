//! Storage engine traits consumed by converters.
//!
//! Implementations own the entities they return; callers receive clones and
//! never hold on to engine state.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::EntityStorageError;
use crate::models::{Entity, EntityKey};
use crate::query::{AccessChecked, EntityQuery, Unchecked};

/// Entry point of a storage engine: hands out per-category storage handles.
pub trait EntityTypeManager: Send + Sync {
    /// Get the storage handle for a category.
    ///
    /// # Errors
    ///
    /// - `UnknownCategory` if `kind` is not registered
    fn storage(&self, kind: &str) -> Result<Arc<dyn EntityStorage>, EntityStorageError>;

    /// Returns true if `kind` is a registered category.
    fn has_definition(&self, kind: &str) -> bool {
        self.storage(kind).is_ok()
    }
}

/// Query and load access to the entities of one category.
#[async_trait]
pub trait EntityStorage: Send + Sync {
    /// Category served by this handle.
    fn kind(&self) -> &str;

    /// Start a new query over this category.
    fn query(&self) -> EntityQuery<Unchecked> {
        EntityQuery::new(self.kind())
    }

    /// Execute a query and return the keys of matching entities.
    ///
    /// Keys come back in the engine's stable order. The engine enforces the
    /// access scope attached to the query.
    ///
    /// # Errors
    ///
    /// - `Backend` if the engine fails to evaluate the query
    async fn execute(
        &self,
        query: &EntityQuery<AccessChecked>,
    ) -> Result<Vec<EntityKey>, EntityStorageError>;

    /// Load entities by key.
    ///
    /// Output follows the order of `keys`; unknown keys are silently skipped.
    ///
    /// # Errors
    ///
    /// - `Backend` if the engine fails to load
    async fn load_many(&self, keys: &[EntityKey]) -> Result<Vec<Entity>, EntityStorageError>;
}
