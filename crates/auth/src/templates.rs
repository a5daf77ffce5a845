use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// Baseline permission sets per role, seeded at system setup.
///
/// Editable by the owner only; the edit path lives outside this engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTemplates {
    templates: HashMap<Role, HashSet<Permission>>,
}

impl RoleTemplates {
    /// An empty registry (every lookup warns and contributes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// The default storefront role→permission mapping.
    ///
    /// Deployments can override this via `set`.
    pub fn seed_defaults() -> Self {
        let mut registry = Self::new();
        registry.set(Role::Owner, [Permission::wildcard()]);
        registry.set(
            Role::Admin,
            [
                Permission::new("reports.view"),
                Permission::new("catalog.read"),
                Permission::new("catalog.write"),
                Permission::new("orders.read"),
                Permission::new("users.read"),
                Permission::new("users.write"),
            ],
        );
        registry.set(
            Role::Manager,
            [
                Permission::new("reports.view"),
                Permission::new("catalog.read"),
                Permission::new("catalog.write"),
                Permission::new("orders.read"),
                Permission::new("users.read"),
            ],
        );
        registry.set(
            Role::Provider,
            [
                Permission::new("reports.view"),
                Permission::new("catalog.read"),
                Permission::new("orders.read"),
            ],
        );
        registry.set(Role::Customer, []);
        registry
    }

    pub fn set(&mut self, role: Role, permissions: impl IntoIterator<Item = Permission>) {
        self.templates
            .insert(role, permissions.into_iter().collect());
    }

    /// Baseline permissions for `role`.
    ///
    /// A missing template contributes nothing rather than failing the request,
    /// but it is a configuration smell worth surfacing to operators.
    pub fn permissions_for(&self, role: Role) -> HashSet<Permission> {
        match self.templates.get(&role) {
            Some(permissions) => permissions.clone(),
            None => {
                tracing::warn!(
                    role = role.as_str(),
                    "no role template seeded; treating baseline permissions as empty"
                );
                HashSet::new()
            }
        }
    }
}
