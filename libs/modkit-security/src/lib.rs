#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod access_scope;
pub mod context;

pub use access_scope::AccessScope;
pub use context::{SecurityContext, SecurityContextBuilder};
