//! Ownership scope: which catalog items a principal is entitled to see.

use std::collections::HashSet;

use vendora_auth::{Principal, PrincipalDirectory};
use vendora_core::{CatalogItemId, EngineResult, PrincipalId};

use crate::Catalog;

/// The item-id visibility of a principal.
///
/// The owner's scope is unbounded and never materialized; new items appear
/// in it without recomputation, matching the wildcard-permission convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnershipScope {
    /// Top-level scope: every item, current and future.
    Global,
    /// Items owned by the principal itself or any transitive report.
    Items(HashSet<CatalogItemId>),
}

impl OwnershipScope {
    pub fn contains(&self, id: CatalogItemId) -> bool {
        match self {
            OwnershipScope::Global => true,
            OwnershipScope::Items(ids) => ids.contains(&id),
        }
    }

    /// Number of catalog items visible through this scope.
    pub fn item_count(&self, catalog: &Catalog) -> usize {
        match self {
            OwnershipScope::Global => catalog.len(),
            OwnershipScope::Items(ids) => ids.len(),
        }
    }
}

/// Compute the ownership scope for a principal.
///
/// Hierarchy resolution runs first (self plus all transitive reports), then
/// the catalog is filtered to items owned inside that set. The result is
/// reused identically by item counting and revenue attribution.
pub fn scoped_item_ids(
    principal: &Principal,
    directory: &PrincipalDirectory,
    catalog: &Catalog,
) -> EngineResult<OwnershipScope> {
    if principal.is_owner() {
        return Ok(OwnershipScope::Global);
    }

    let owners = directory.scope_of(principal.id)?;
    Ok(owned_scope(&owners, catalog))
}

/// Item scope for an already-resolved visibility set.
///
/// Split out so callers that need the visibility set for other sections of a
/// request resolve the hierarchy once and reuse it here.
pub fn owned_scope(owners: &HashSet<PrincipalId>, catalog: &Catalog) -> OwnershipScope {
    let items = catalog.owned_by(owners);
    tracing::debug!(
        owners = owners.len(),
        items = items.len(),
        "resolved ownership scope"
    );
    OwnershipScope::Items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogItem;
    use vendora_auth::Role;
    use vendora_core::PrincipalId;

    #[test]
    fn owner_scope_is_global() {
        let owner = Principal::new(PrincipalId::new(), Role::Owner, None);
        let directory = PrincipalDirectory::from_principals([owner.clone()]);
        let catalog = Catalog::new();

        let scope = scoped_item_ids(&owner, &directory, &catalog).unwrap();
        assert_eq!(scope, OwnershipScope::Global);
        assert!(scope.contains(CatalogItemId::new()));
    }

    #[test]
    fn scope_covers_own_and_descendant_items_only() {
        let owner_id = PrincipalId::new();
        let manager_id = PrincipalId::new();
        let provider_id = PrincipalId::new();
        let outsider_id = PrincipalId::new();

        let manager = Principal::new(manager_id, Role::Manager, Some(owner_id));
        let directory = PrincipalDirectory::from_principals([
            Principal::new(owner_id, Role::Owner, None),
            manager.clone(),
            Principal::new(provider_id, Role::Provider, Some(manager_id)),
            Principal::new(outsider_id, Role::Provider, Some(owner_id)),
        ]);

        let own_item = CatalogItem::new(CatalogItemId::new(), manager_id, "Own", 1000);
        let report_item = CatalogItem::new(CatalogItemId::new(), provider_id, "Report", 2000);
        let outside_item = CatalogItem::new(CatalogItemId::new(), outsider_id, "Outside", 3000);
        let catalog =
            Catalog::from_items([own_item.clone(), report_item.clone(), outside_item.clone()]);

        let scope = scoped_item_ids(&manager, &directory, &catalog).unwrap();
        assert!(scope.contains(own_item.id));
        assert!(scope.contains(report_item.id));
        assert!(!scope.contains(outside_item.id));
        assert_eq!(scope.item_count(&catalog), 2);
    }
}
