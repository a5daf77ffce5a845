//! Read-side engine facade consumed by the transport layer.
//!
//! All inputs are supplied by the collaborating persistence layer at call
//! time; the context borrows a consistent snapshot and computes views from it
//! without IO or mutation.

use chrono::{DateTime, Utc};

use vendora_auth::{Permission, PrincipalDirectory, RoleTemplates, access};
use vendora_catalog::Catalog;
use vendora_core::{EngineError, EngineResult, PrincipalId};
use vendora_orders::Order;

use crate::overview::{self, OverviewRequest, OverviewStats};
use crate::trends::{self, TrendRequest, TrendStats};

/// Permission gating the dashboard views.
pub const REPORTS_VIEW: &str = "reports.view";

/// A borrowed, internally consistent snapshot of the records the engine
/// reads, plus the operations exposed on top of it.
#[derive(Debug, Clone, Copy)]
pub struct EngineContext<'a> {
    pub directory: &'a PrincipalDirectory,
    pub templates: &'a RoleTemplates,
    pub catalog: &'a Catalog,
    pub orders: &'a [Order],
}

impl<'a> EngineContext<'a> {
    pub fn new(
        directory: &'a PrincipalDirectory,
        templates: &'a RoleTemplates,
        catalog: &'a Catalog,
        orders: &'a [Order],
    ) -> Self {
        Self {
            directory,
            templates,
            catalog,
            orders,
        }
    }

    /// Scoped overview dashboard for the requesting principal.
    ///
    /// Fails with `NotFound` when the principal does not resolve and
    /// `Authorization` when it lacks the reports permission; denial is never
    /// silently narrowed into an empty view.
    pub fn overview_stats(
        &self,
        principal_id: PrincipalId,
        request: OverviewRequest,
        as_of: DateTime<Utc>,
    ) -> EngineResult<OverviewStats> {
        let principal = self.directory.require(principal_id)?;
        let required = Permission::new(REPORTS_VIEW);
        if !access::has_permission(principal, self.templates, &required) {
            return Err(EngineError::authorization(format!(
                "principal {principal_id} lacks '{required}'"
            )));
        }

        overview::compute(self, principal, request, as_of)
    }

    /// Global trend statistics for an explicit period.
    pub fn trend_stats(
        &self,
        request: TrendRequest,
        as_of: DateTime<Utc>,
    ) -> EngineResult<TrendStats> {
        Ok(trends::compute(self, request, as_of))
    }

    /// Permission predicate for the transport layer.
    pub fn has_permission(
        &self,
        principal_id: PrincipalId,
        permission: &Permission,
    ) -> EngineResult<bool> {
        let principal = self.directory.require(principal_id)?;
        Ok(access::has_permission(principal, self.templates, permission))
    }

    /// True iff `principal_id` may manage `target_id` (strictly higher role
    /// rank, or the owner).
    pub fn can_manage(
        &self,
        principal_id: PrincipalId,
        target_id: PrincipalId,
    ) -> EngineResult<bool> {
        let principal = self.directory.require(principal_id)?;
        let target = self.directory.require(target_id)?;
        Ok(access::can_manage(principal, target))
    }

    /// True iff `superior_id` is an ancestor of `subordinate_id` in the
    /// management tree.
    pub fn is_in_hierarchy(
        &self,
        superior_id: PrincipalId,
        subordinate_id: PrincipalId,
    ) -> EngineResult<bool> {
        self.directory.is_in_hierarchy(superior_id, subordinate_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendora_auth::{Principal, Role};

    #[test]
    fn unknown_principal_is_not_found() {
        let directory = PrincipalDirectory::new();
        let templates = RoleTemplates::seed_defaults();
        let catalog = Catalog::new();
        let ctx = EngineContext::new(&directory, &templates, &catalog, &[]);

        let err = ctx
            .overview_stats(PrincipalId::new(), OverviewRequest::default(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn missing_reports_permission_is_an_authorization_error() {
        let customer = Principal::new(PrincipalId::new(), Role::Customer, None);
        let customer_id = customer.id;
        let directory = PrincipalDirectory::from_principals([customer]);
        let templates = RoleTemplates::seed_defaults();
        let catalog = Catalog::new();
        let ctx = EngineContext::new(&directory, &templates, &catalog, &[]);

        let err = ctx
            .overview_stats(customer_id, OverviewRequest::default(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, EngineError::Authorization(_)));
    }

    #[test]
    fn override_permission_opens_the_dashboard() {
        let customer = Principal::new(PrincipalId::new(), Role::Customer, None)
            .with_permission(Permission::new(REPORTS_VIEW));
        let customer_id = customer.id;
        let directory = PrincipalDirectory::from_principals([customer]);
        let templates = RoleTemplates::seed_defaults();
        let catalog = Catalog::new();
        let ctx = EngineContext::new(&directory, &templates, &catalog, &[]);

        let stats = ctx
            .overview_stats(customer_id, OverviewRequest::default(), Utc::now())
            .unwrap();
        assert_eq!(stats.orders.total, 0);
        assert_eq!(stats.product_count, 0);
    }

    #[test]
    fn can_manage_requires_both_principals_to_resolve() {
        let admin = Principal::new(PrincipalId::new(), Role::Admin, None);
        let admin_id = admin.id;
        let directory = PrincipalDirectory::from_principals([admin]);
        let templates = RoleTemplates::seed_defaults();
        let catalog = Catalog::new();
        let ctx = EngineContext::new(&directory, &templates, &catalog, &[]);

        let err = ctx.can_manage(admin_id, PrincipalId::new()).unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }
}
