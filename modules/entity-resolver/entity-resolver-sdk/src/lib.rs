//! Entity Resolver SDK
//!
//! This crate provides the public API for the `entity-resolver` module:
//!
//! - [`ParamConverter`] - Route parameter converter contract shared by all resolvers
//! - [`EntityTypeManager`], [`EntityStorage`] - Storage engine traits consumed by converters
//! - [`EntityQuery`] - Query builder that cannot execute without an access check
//! - [`Entity`], [`ParameterDeclaration`], [`Route`] - Domain models
//! - [`ParamConverterError`], [`EntityStorageError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use entity_resolver_sdk::{ParamConverter, ParameterDeclaration, Route};
//!
//! let declaration = ParameterDeclaration::new("entity_uuid:node");
//! let route = Route::new("/node/{node}").with_parameter("node", declaration.clone());
//!
//! if converter.applies(&declaration, "node", &route) {
//!     let node = converter
//!         .convert(&ctx, "abc-123", &declaration, "node", &route.defaults)
//!         .await?;
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod query;
pub mod storage;

// Re-export main types at crate root
pub use api::ParamConverter;
pub use error::{EntityStorageError, ParamConverterError};
pub use models::{
    Entity, EntityKey, ParameterDeclaration, ResolvedParam, Route, RouteDefaults, RouteOptions,
};
pub use query::{AccessChecked, Condition, EntityQuery, Unchecked};
pub use storage::{EntityStorage, EntityTypeManager};
