use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use vendora_core::PrincipalId;

use crate::{Permission, Role};

/// A directory account participating in the management tree.
///
/// `managed_by` points at the direct superior. It is `None` only for the
/// owner and for unaffiliated customers; restricted to `Some` edges the graph
/// forms a forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub role: Role,
    pub managed_by: Option<PrincipalId>,
    /// Principal-specific grants, unioned with the role template baseline.
    pub permissions: HashSet<Permission>,
    pub is_active: bool,
}

impl Principal {
    pub fn new(id: PrincipalId, role: Role, managed_by: Option<PrincipalId>) -> Self {
        Self {
            id,
            role,
            managed_by,
            permissions: HashSet::new(),
            is_active: true,
        }
    }

    /// Builder-style override grant, used heavily in tests.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}
