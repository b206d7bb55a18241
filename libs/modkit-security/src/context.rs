use crate::AccessScope;
use uuid::Uuid;

/// `SecurityContext` carries the caller identity for a request or operation.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    tenant_id: Uuid,
    subject_id: Uuid,
    accessible_tenants: Option<Vec<Uuid>>,
    is_system: bool,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Create an anonymous `SecurityContext` with no tenant and no subject
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    /// Create a system `SecurityContext` that resolves to a root scope
    #[must_use]
    pub fn system() -> Self {
        SecurityContextBuilder::default().system().build()
    }

    #[must_use]
    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    #[must_use]
    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    /// Build the `AccessScope` this context is allowed to read.
    ///
    /// Resolution order:
    /// 1. system contexts get a root scope
    /// 2. explicitly provided accessible tenants
    /// 3. the context tenant, when it is not nil
    /// 4. otherwise an empty scope (deny all)
    #[must_use]
    pub fn access_scope(&self) -> AccessScope {
        if self.is_system {
            return AccessScope::root();
        }
        if let Some(tenants) = &self.accessible_tenants {
            return AccessScope::tenants_only(tenants.clone());
        }
        if self.tenant_id != Uuid::default() {
            return AccessScope::tenant(self.tenant_id);
        }
        AccessScope::default()
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    tenant_id: Option<Uuid>,
    subject_id: Option<Uuid>,
    accessible_tenants: Option<Vec<Uuid>>,
    is_system: bool,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: Uuid) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    /// Replace the tenant-derived scope with an explicit tenant list,
    /// typically resolved from a tenant hierarchy by the caller.
    #[must_use]
    pub fn accessible_tenants(mut self, tenants: Vec<Uuid>) -> Self {
        self.accessible_tenants = Some(tenants);
        self
    }

    #[must_use]
    pub fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            tenant_id: self.tenant_id.unwrap_or_default(),
            subject_id: self.subject_id.unwrap_or_default(),
            accessible_tenants: self.accessible_tenants,
            is_system: self.is_system,
        }
    }
}
