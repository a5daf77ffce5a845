//! Effective-permission resolution.
//!
//! Two-layer model: role template baseline unioned with per-principal
//! overrides. The union is idempotent and commutative, so source order never
//! matters. Every call returns a freshly computed set; nothing here mutates
//! shared state, so one request can never leak grants into another.

use std::collections::HashSet;

use crate::{Permission, Principal, RoleTemplates};

/// Compute the effective capability set for a principal.
///
/// The owner resolves to the universal-access sentinel rather than a
/// materialized list of every known permission.
pub fn effective_permissions(
    principal: &Principal,
    templates: &RoleTemplates,
) -> HashSet<Permission> {
    if principal.is_owner() {
        return HashSet::from([Permission::wildcard()]);
    }

    let mut permissions = templates.permissions_for(principal.role);
    permissions.extend(principal.permissions.iter().cloned());
    permissions
}

/// True iff `required` is in the principal's effective set (or the principal
/// is the owner).
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn has_permission(
    principal: &Principal,
    templates: &RoleTemplates,
    required: &Permission,
) -> bool {
    if principal.is_owner() {
        return true;
    }

    let permissions = effective_permissions(principal, templates);
    permissions.iter().any(Permission::is_wildcard) || permissions.contains(required)
}

/// True iff `principal` may manage `target`.
///
/// The owner manages everyone; otherwise management requires a strictly
/// higher role rank.
pub fn can_manage(principal: &Principal, target: &Principal) -> bool {
    principal.is_owner() || principal.role.outranks(target.role)
}
