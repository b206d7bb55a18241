//! Route parameter converter contract.
//!
//! Every resolver in the routing layer implements [`ParamConverter`]. The
//! routing layer walks its registered converters in priority order and hands
//! each parameter to the first converter whose [`ParamConverter::applies`]
//! returns true.

use async_trait::async_trait;
use modkit_security::SecurityContext;

use crate::error::ParamConverterError;
use crate::models::{Entity, ParameterDeclaration, Route, RouteDefaults};

/// Transforms a raw path-segment string into an entity before a handler runs.
#[async_trait]
pub trait ParamConverter: Send + Sync {
    /// Check whether this converter handles the given parameter declaration.
    ///
    /// Must not fail on malformed or missing declarations; those simply do
    /// not apply.
    fn applies(&self, definition: &ParameterDeclaration, name: &str, route: &Route) -> bool;

    /// Convert a raw value into an entity.
    ///
    /// Returns `Ok(None)` when nothing matches. Callers must have checked
    /// [`applies`](Self::applies) first.
    ///
    /// # Errors
    ///
    /// - `Storage` if the storage engine fails, including unknown categories
    /// - `InvalidDeclaration` if the declaration does not name a category
    async fn convert(
        &self,
        ctx: &SecurityContext,
        value: &str,
        definition: &ParameterDeclaration,
        name: &str,
        defaults: &RouteDefaults,
    ) -> Result<Option<Entity>, ParamConverterError>;
}
