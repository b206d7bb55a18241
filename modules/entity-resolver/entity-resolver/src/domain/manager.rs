//! Registry of route parameter converters.

use std::collections::BTreeMap;
use std::sync::Arc;

use entity_resolver_sdk::{
    ParamConverter, ParamConverterError, ParameterDeclaration, ResolvedParam, Route,
};
use modkit_security::SecurityContext;
use serde_json::Value;
use tracing::{debug, error};

struct RegisteredConverter {
    priority: i16,
    converter: Arc<dyn ParamConverter>,
}

/// Ordered set of converters consulted by the routing layer.
///
/// Converters are consulted by ascending priority (lower = consulted first);
/// converters with equal priority keep their registration order.
#[derive(Default)]
pub struct ParamConverterManager {
    converters: Vec<RegisteredConverter>,
}

impl ParamConverterManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, converter: Arc<dyn ParamConverter>, priority: i16) {
        let pos = self
            .converters
            .partition_point(|c| c.priority <= priority);
        self.converters
            .insert(pos, RegisteredConverter { priority, converter });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// First converter whose `applies` accepts the declaration.
    #[must_use]
    pub fn converter_for(
        &self,
        definition: &ParameterDeclaration,
        name: &str,
        route: &Route,
    ) -> Option<&Arc<dyn ParamConverter>> {
        self.converters
            .iter()
            .map(|c| &c.converter)
            .find(|c| c.applies(definition, name, route))
    }

    /// Convert every raw path value of a matched route.
    ///
    /// Values without a declaration, or whose declaration no converter
    /// claims, are passed through as [`ResolvedParam::Raw`]. Converters see
    /// the route defaults merged with the raw values.
    ///
    /// # Errors
    ///
    /// - `ParamNotConverted` if a converter claims a parameter but finds nothing
    /// - any error returned by a converter, unmodified
    pub async fn convert(
        &self,
        ctx: &SecurityContext,
        route: &Route,
        raw: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, ResolvedParam>, ParamConverterError> {
        let mut defaults = route.defaults.clone();
        for (name, value) in raw {
            defaults.insert(name.clone(), Value::String(value.clone()));
        }

        let mut resolved = BTreeMap::new();
        for (name, value) in raw {
            let claimed = route.parameters().get(name).and_then(|definition| {
                self.converter_for(definition, name, route)
                    .map(|converter| (definition, converter))
            });
            let Some((definition, converter)) = claimed else {
                resolved.insert(name.clone(), ResolvedParam::Raw(value.clone()));
                continue;
            };

            match converter
                .convert(ctx, value, definition, name, &defaults)
                .await
            {
                Ok(Some(entity)) => {
                    resolved.insert(name.clone(), ResolvedParam::Entity(entity));
                }
                Ok(None) => {
                    debug!(param = %name, route = %route.path, "route parameter not converted");
                    return Err(ParamConverterError::ParamNotConverted {
                        name: name.clone(),
                        value: value.clone(),
                    });
                }
                Err(e) => {
                    error!(param = %name, route = %route.path, error = %e, "route parameter conversion failed");
                    return Err(e);
                }
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use entity_resolver_sdk::{Entity, EntityKey, EntityStorageError, RouteDefaults};
    use serde_json::{Map, json};
    use std::sync::Mutex;

    // Claims every declaration tagged with `tag` and answers with `answer`.
    struct StubConverter {
        tag: &'static str,
        answer: Option<&'static str>,
        seen_defaults: Mutex<Vec<RouteDefaults>>,
    }

    impl StubConverter {
        fn new(tag: &'static str, answer: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                tag,
                answer,
                seen_defaults: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ParamConverter for StubConverter {
        fn applies(&self, definition: &ParameterDeclaration, _name: &str, _route: &Route) -> bool {
            definition.has_tag(self.tag)
        }

        async fn convert(
            &self,
            _ctx: &SecurityContext,
            value: &str,
            _definition: &ParameterDeclaration,
            _name: &str,
            defaults: &RouteDefaults,
        ) -> Result<Option<Entity>, ParamConverterError> {
            self.seen_defaults.lock().unwrap().push(defaults.clone());
            if value == "explode" {
                return Err(EntityStorageError::Backend("boom".to_owned()).into());
            }
            Ok(self.answer.map(|uuid| Entity {
                kind: self.tag.to_owned(),
                key: EntityKey::from(value),
                uuid: uuid.to_owned(),
                tenant_id: None,
                fields: Map::new(),
            }))
        }
    }

    fn raw(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn lower_priority_is_consulted_first() {
        let late = StubConverter::new("entity_uuid", Some("late"));
        let early = StubConverter::new("entity_uuid", Some("early"));
        let mut manager = ParamConverterManager::new();
        manager.register(late, 100);
        manager.register(early.clone(), 10);

        let decl = ParameterDeclaration::new("entity_uuid:node");
        let found = manager
            .converter_for(&decl, "node", &Route::new("/n/{node}"))
            .unwrap();

        let expected: Arc<dyn ParamConverter> = early;
        assert!(Arc::ptr_eq(found, &expected));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn equal_priority_keeps_registration_order() {
        let first = StubConverter::new("entity_uuid", None);
        let second = StubConverter::new("entity_uuid", None);
        let mut manager = ParamConverterManager::new();
        manager.register(first.clone(), 0);
        manager.register(second, 0);

        let decl = ParameterDeclaration::new("entity_uuid:node");
        let found = manager
            .converter_for(&decl, "node", &Route::new("/n/{node}"))
            .unwrap();

        let expected: Arc<dyn ParamConverter> = first;
        assert!(Arc::ptr_eq(found, &expected));
    }

    #[test]
    fn undeclared_type_has_no_converter() {
        let mut manager = ParamConverterManager::new();
        manager.register(StubConverter::new("entity_uuid", None), 0);

        let route = Route::new("/n/{node}");
        assert!(
            manager
                .converter_for(&ParameterDeclaration::default(), "node", &route)
                .is_none()
        );
        assert!(
            manager
                .converter_for(&ParameterDeclaration::new("entity:node"), "node", &route)
                .is_none()
        );
    }

    #[tokio::test]
    async fn convert_resolves_claimed_and_passes_through_others() {
        let stub = StubConverter::new("entity_uuid", Some("abc-123"));
        let mut manager = ParamConverterManager::new();
        manager.register(stub.clone(), 0);

        let route = Route::new("/n/{node}/{page}/{slug}")
            .with_parameter("node", ParameterDeclaration::new("entity_uuid:node"))
            .with_parameter("slug", ParameterDeclaration::new("string"))
            .with_default("_controller", json!("show"));

        let resolved = manager
            .convert(
                &SecurityContext::anonymous(),
                &route,
                &raw(&[("node", "abc-123"), ("page", "2"), ("slug", "hello")]),
            )
            .await
            .unwrap();

        assert_eq!(
            resolved.get("node").and_then(ResolvedParam::as_entity).map(|e| e.uuid.as_str()),
            Some("abc-123")
        );
        assert_eq!(resolved.get("page"), Some(&ResolvedParam::Raw("2".to_owned())));
        assert_eq!(resolved.get("slug"), Some(&ResolvedParam::Raw("hello".to_owned())));

        let seen = stub.seen_defaults.lock().unwrap();
        assert_eq!(seen[0].get("_controller"), Some(&json!("show")));
        assert_eq!(seen[0].get("page"), Some(&json!("2")));
    }

    #[tokio::test]
    async fn convert_reports_not_converted() {
        let mut manager = ParamConverterManager::new();
        manager.register(StubConverter::new("entity_uuid", None), 0);

        let route = Route::new("/n/{node}")
            .with_parameter("node", ParameterDeclaration::new("entity_uuid:node"));

        let err = manager
            .convert(&SecurityContext::anonymous(), &route, &raw(&[("node", "zzz")]))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(
            err,
            ParamConverterError::ParamNotConverted { ref name, ref value }
                if name == "node" && value == "zzz"
        ));
    }

    #[tokio::test]
    async fn convert_propagates_converter_errors() {
        let mut manager = ParamConverterManager::new();
        manager.register(StubConverter::new("entity_uuid", Some("x")), 0);

        let route = Route::new("/n/{node}")
            .with_parameter("node", ParameterDeclaration::new("entity_uuid:node"));

        let err = manager
            .convert(&SecurityContext::anonymous(), &route, &raw(&[("node", "explode")]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ParamConverterError::Storage(EntityStorageError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn declared_but_absent_parameters_are_skipped() {
        let mut manager = ParamConverterManager::new();
        manager.register(StubConverter::new("entity_uuid", None), 0);

        let route = Route::new("/n/{node}")
            .with_parameter("node", ParameterDeclaration::new("entity_uuid:node"));

        let resolved = manager
            .convert(&SecurityContext::anonymous(), &route, &BTreeMap::new())
            .await
            .unwrap();

        assert!(resolved.is_empty());
    }
}
