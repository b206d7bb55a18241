//! Static Entity Storage Plugin
//!
//! This plugin provides entity categories and their entities from
//! configuration. Useful for testing, development, and simple deployments.
//!
//! ## Configuration
//!
//! Read by [`StaticStoragePluginConfig::load`] from a YAML file, with
//! `STATIC_STORAGE_PLUGIN__`-prefixed environment overrides:
//!
//! ```yaml
//! modules:
//!   static_storage_plugin:
//!     config:
//!       categories:
//!         - kind: node
//!           tenant_scoped: true
//!           entities:
//!             - key: "1"
//!               uuid: "3f2c7a0e-0b7d-4d9f-9a51-1f0c2b8e6a10"
//!               tenant_id: "550e8400-e29b-41d4-a716-446655440001"
//!               fields:
//!                 title: "Welcome"
//!         - kind: taxonomy_term
//!           entities:
//!             - key: "7"
//!               uuid: "b7c1d2e3-0000-4000-8000-000000000007"
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::StaticStoragePluginConfig;
pub use domain::{StaticEntityStorage, StaticEntityTypeManager};
