#![allow(dead_code)]

use std::sync::Arc;

use entity_resolver::EntityUuidConverter;
use entity_resolver_sdk::EntityTypeManager;
use modkit_security::SecurityContext;
use static_storage_plugin::{StaticEntityTypeManager, StaticStoragePluginConfig};
use uuid::Uuid;

pub const TENANT_A: Uuid = Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0001);
pub const TENANT_B: Uuid = Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0002);

/// Storage engine with a global `node` category, a tenant-scoped `article`
/// category and a duplicated identifier.
pub fn engine() -> Arc<dyn EntityTypeManager> {
    let cfg: StaticStoragePluginConfig = serde_json::from_value(serde_json::json!({
        "categories": [
            {
                "kind": "node",
                "entities": [
                    { "key": "1", "uuid": "abc-123", "fields": { "title": "Welcome" } },
                    { "key": "2", "uuid": "def-456", "fields": { "title": "About" } },
                    { "key": "5", "uuid": "dup-000" },
                    { "key": "4", "uuid": "dup-000" }
                ]
            },
            {
                "kind": "article",
                "tenant_scoped": true,
                "entities": [
                    { "key": "10", "uuid": "art-a", "tenant_id": TENANT_A.to_string() },
                    { "key": "11", "uuid": "art-b", "tenant_id": TENANT_B.to_string() }
                ]
            }
        ]
    }))
    .expect("valid plugin config");

    Arc::new(StaticEntityTypeManager::from_config(cfg).expect("valid storage"))
}

pub fn converter() -> EntityUuidConverter {
    EntityUuidConverter::new(engine())
}

pub fn tenant_ctx(tenant_id: Uuid) -> SecurityContext {
    SecurityContext::builder()
        .tenant_id(tenant_id)
        .subject_id(Uuid::new_v4())
        .build()
}
