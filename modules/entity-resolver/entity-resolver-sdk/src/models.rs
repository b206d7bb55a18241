//! Public models for the entity resolver module.
//!
//! These are transport-agnostic data structures shared between the routing
//! layer, converters and storage engines.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Route defaults passed to converters alongside the raw value.
pub type RouteDefaults = BTreeMap<String, Value>;

/// Internal storage key of an entity.
///
/// Distinct from the externally visible unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKey(String);

impl EntityKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for EntityKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// An internal domain object, as constructed by a storage engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Category the entity belongs to (e.g. `node`).
    pub kind: String,
    pub key: EntityKey,
    /// Stable external identifier.
    pub uuid: String,
    /// Owning tenant. `None` for global entities.
    #[serde(default)]
    pub tenant_id: Option<Uuid>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Entity {
    /// Name of the field holding the external identifier.
    pub const UUID_FIELD: &'static str = "uuid";

    /// Returns the string value of a field, treating `uuid` as a field.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        if name == Self::UUID_FIELD {
            return Some(&self.uuid);
        }
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Declaration of a single route parameter.
///
/// The `type` key is a colon-delimited `"<tag>:<kind>"` string, e.g.
/// `"entity_uuid:node"`. It may be absent; other keys are preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParameterDeclaration {
    #[must_use]
    pub fn new(param_type: impl Into<String>) -> Self {
        Self {
            param_type: Some(param_type.into()),
            extra: Map::new(),
        }
    }

    /// First colon-delimited segment of `type`, or `""` when `type` is absent.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.param_type
            .as_deref()
            .and_then(|t| t.split(':').next())
            .unwrap_or_default()
    }

    /// Second colon-delimited segment of `type`, if any.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.param_type.as_deref()?.split(':').nth(1)
    }

    /// Returns true if `type` is `"<tag>:..."` for exactly this tag.
    ///
    /// A `type` without a separator never matches, even if it equals `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.param_type
            .as_deref()
            .and_then(|t| t.split_once(':'))
            .is_some_and(|(head, _)| head == tag)
    }
}

/// Route options relevant to parameter conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterDeclaration>,
}

/// A route definition as loaded from configuration.
///
/// ```yaml
/// path: /some/path/to/{node}
/// defaults:
///   _controller: show
/// options:
///   parameters:
///     node:
///       type: entity_uuid:node
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    #[serde(default)]
    pub defaults: RouteDefaults,
    #[serde(default)]
    pub options: RouteOptions,
}

impl Route {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: &str, declaration: ParameterDeclaration) -> Self {
        self.options
            .parameters
            .insert(name.to_owned(), declaration);
        self
    }

    #[must_use]
    pub fn with_default(mut self, key: &str, value: Value) -> Self {
        self.defaults.insert(key.to_owned(), value);
        self
    }

    #[must_use]
    pub fn parameters(&self) -> &BTreeMap<String, ParameterDeclaration> {
        &self.options.parameters
    }
}

/// Outcome of converting one route parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedParam {
    /// A converter resolved the raw value into an entity.
    Entity(Entity),
    /// No converter claimed the parameter; the raw value is passed through.
    Raw(String),
}

impl ResolvedParam {
    #[must_use]
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(entity) => Some(entity),
            Self::Raw(_) => None,
        }
    }
}
