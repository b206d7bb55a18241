//! Domain layer for the entity resolver.

pub mod manager;
pub mod uuid_converter;

pub use manager::ParamConverterManager;
pub use uuid_converter::{ENTITY_UUID_TAG, EntityUuidConverter};
