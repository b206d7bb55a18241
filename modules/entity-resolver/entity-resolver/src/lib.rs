//! Entity Resolver Module
//!
//! Resolves stable external identifiers embedded in request paths into
//! internal entities before a request handler runs.
//!
//! The module provides [`EntityUuidConverter`], a [`ParamConverter`] for
//! parameters declared as `type: entity_uuid:<kind>`, and the
//! [`ParamConverterManager`] registry the routing layer dispatches through.
//!
//! [`ParamConverter`]: entity_resolver_sdk::ParamConverter
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::EntityResolverConfig;
pub use domain::{ENTITY_UUID_TAG, EntityUuidConverter, ParamConverterManager};
pub use module::EntityResolverModule;
