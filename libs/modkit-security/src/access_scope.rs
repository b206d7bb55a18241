use uuid::Uuid;

/// Access scope defining which tenants a caller can see.
///
/// An empty scope (no tenants, not root) is a "deny all" scope. A root scope
/// bypasses tenant filtering entirely and is reserved for system callers.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct AccessScope {
    pub(crate) is_root: bool,
    pub(crate) tenant_ids: Vec<Uuid>,
}

impl AccessScope {
    #[inline]
    #[must_use]
    pub fn tenant_ids(&self) -> &[Uuid] {
        &self.tenant_ids
    }

    /// Returns true if this is a root scope (system-level access).
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Returns true if this scope denies everything.
    /// A root scope is never considered empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_root && self.tenant_ids.is_empty()
    }

    #[must_use]
    pub fn has_tenants(&self) -> bool {
        !self.tenant_ids.is_empty()
    }

    #[must_use]
    pub fn root() -> Self {
        Self {
            is_root: true,
            tenant_ids: vec![],
        }
    }

    #[must_use]
    pub fn tenants_only(tenant_ids: Vec<Uuid>) -> Self {
        Self {
            is_root: false,
            tenant_ids,
        }
    }

    #[must_use]
    pub fn tenant(tenant_id: Uuid) -> Self {
        Self::tenants_only(vec![tenant_id])
    }

    /// Checks whether a row owned by `owner` is visible under this scope.
    ///
    /// Rows without an owning tenant are only visible to root scopes.
    #[must_use]
    pub fn permits_tenant(&self, owner: Option<Uuid>) -> bool {
        if self.is_root {
            return true;
        }
        owner.is_some_and(|id| self.tenant_ids.contains(&id))
    }
}
