//! Entity query builder with typestate-enforced access checks.
//!
//! A query starts [`Unchecked`] and can only be handed to
//! [`EntityStorage::execute`](crate::EntityStorage::execute) once it has been
//! moved to [`AccessChecked`] via [`EntityQuery::with_access_check`]:
//!
//! ```ignore
//! let keys = storage
//!     .execute(
//!         &storage
//!             .query()
//!             .with_access_check(&ctx)
//!             .where_equals("uuid", value),
//!     )
//!     .await?;
//! ```

use std::marker::PhantomData;

use modkit_security::{AccessScope, SecurityContext};

use crate::models::Entity;

/// Typestate marker: no access check applied yet.
/// Cannot execute queries in this state.
#[derive(Debug, Clone, Copy)]
pub struct Unchecked;

/// Typestate marker: the caller's access scope is attached.
#[derive(Debug, Clone, Copy)]
pub struct AccessChecked;

/// Single equality condition: `field == value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub value: String,
}

impl Condition {
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        entity.field_str(&self.field) == Some(self.value.as_str())
    }
}

/// Query over the entities of one category.
#[must_use]
#[derive(Clone, Debug)]
pub struct EntityQuery<S> {
    kind: String,
    conditions: Vec<Condition>,
    scope: AccessScope,
    _state: PhantomData<S>,
}

impl EntityQuery<Unchecked> {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            conditions: Vec::new(),
            scope: AccessScope::default(),
            _state: PhantomData,
        }
    }

    /// Attach the caller's access scope, transitioning to `AccessChecked`.
    ///
    /// The storage engine decides how the scope is enforced.
    pub fn with_access_check(self, ctx: &SecurityContext) -> EntityQuery<AccessChecked> {
        EntityQuery {
            kind: self.kind,
            conditions: self.conditions,
            scope: ctx.access_scope(),
            _state: PhantomData,
        }
    }
}

impl<S> EntityQuery<S> {
    /// Add an equality condition. Conditions are AND-ed.
    pub fn where_equals(mut self, field: &str, value: &str) -> Self {
        self.conditions.push(Condition {
            field: field.to_owned(),
            value: value.to_owned(),
        });
        self
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl EntityQuery<AccessChecked> {
    #[must_use]
    pub fn scope(&self) -> &AccessScope {
        &self.scope
    }

    /// Returns true if the entity satisfies every condition.
    ///
    /// Access is not evaluated here.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        self.conditions.iter().all(|c| c.matches(entity))
    }
}
