//! Core ModKit library.
//!
//! Hosts the typed configuration access shared by modules and their plugins.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;

pub use config::{ConfigError, ConfigProvider, LayeredConfig, module_config_or_default};
