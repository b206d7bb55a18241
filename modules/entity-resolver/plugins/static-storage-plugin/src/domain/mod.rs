//! Domain layer for the static storage plugin.

pub mod storage;

pub use storage::{StaticEntityStorage, StaticEntityTypeManager};
