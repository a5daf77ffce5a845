//! Scoped overview dashboard computation.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use vendora_auth::{Principal, PrincipalDirectory, Role};
use vendora_catalog::{OwnershipScope, scope};
use vendora_core::{EngineResult, OrderId, PrincipalId};
use vendora_orders::OrderStatus;

use crate::attribution::{self, BucketTotal};
use crate::calendar;
use crate::engine::EngineContext;
use crate::rollup::{DimensionTotal, rollup};

/// Parameters for the overview dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewRequest {
    /// Year shaping the revenue time series; defaults to the `as_of` year.
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    /// Orders with at least one in-scope line item.
    pub total: u64,
    /// Scoped revenue in smallest currency unit.
    pub total_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentOrder {
    pub order_id: OrderId,
    pub buyer: PrincipalId,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    /// In-scope portion of the order's line-item value.
    pub scoped_revenue: u64,
}

/// The full overview aggregate returned to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub role_counts: Vec<RoleCount>,
    pub product_count: usize,
    pub orders: OrderTotals,
    pub revenue_series: Vec<BucketTotal>,
    pub status_distribution: Vec<StatusCount>,
    pub recent_orders: Vec<RecentOrder>,
    pub by_country: Vec<DimensionTotal>,
    pub by_state: Vec<DimensionTotal>,
    pub by_city: Vec<DimensionTotal>,
    pub available_years: Vec<i32>,
    pub selected_year: i32,
}

/// Compute the overview for an already-authorized principal.
///
/// Strict pipeline: hierarchy resolution, then ownership scoping, then
/// attribution. The visibility set and the item scope are each computed once
/// and reused by every section below.
pub(crate) fn compute(
    ctx: &EngineContext<'_>,
    principal: &Principal,
    request: OverviewRequest,
    as_of: DateTime<Utc>,
) -> EngineResult<OverviewStats> {
    let (visible, item_scope) = if principal.is_owner() {
        (None, OwnershipScope::Global)
    } else {
        let visible = ctx.directory.scope_of(principal.id)?;
        let item_scope = scope::owned_scope(&visible, ctx.catalog);
        (Some(visible), item_scope)
    };

    attribution::log_unresolved_lines(ctx.orders, ctx.catalog);
    let summary = attribution::attribute(ctx.orders, &item_scope);

    let selected_year = request.year.unwrap_or(as_of.year());
    let buckets = calendar::dashboard_buckets(selected_year, as_of);
    let revenue_series = attribution::bucketed(ctx.orders, &item_scope, &buckets);

    let mut status_counts: HashMap<OrderStatus, u64> = HashMap::new();
    let mut recent: Vec<RecentOrder> = Vec::new();
    for order in ctx.orders {
        let Some(scoped_revenue) = attribution::scoped_order_revenue(order, &item_scope) else {
            continue;
        };
        *status_counts.entry(order.status).or_insert(0) += 1;
        recent.push(RecentOrder {
            order_id: order.id,
            buyer: order.buyer,
            created_at: order.created_at,
            status: order.status,
            scoped_revenue,
        });
    }
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(5);

    Ok(OverviewStats {
        role_counts: role_counts(ctx.directory, visible.as_ref()),
        product_count: item_scope.item_count(ctx.catalog),
        orders: OrderTotals {
            total: summary.order_count,
            total_amount: summary.revenue,
        },
        revenue_series,
        status_distribution: OrderStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: status_counts.get(status).copied().unwrap_or(0),
            })
            .collect(),
        recent_orders: recent,
        by_country: rollup(ctx.orders, &item_scope, |o| o.shipping.country.clone()),
        by_state: rollup(ctx.orders, &item_scope, |o| o.shipping.state.clone()),
        by_city: rollup(ctx.orders, &item_scope, |o| o.shipping.city.clone()),
        available_years: calendar::available_years(ctx.orders, as_of),
        selected_year,
    })
}

/// Active principals per role inside the visibility set (`None` = global).
fn role_counts(
    directory: &PrincipalDirectory,
    visible: Option<&HashSet<PrincipalId>>,
) -> Vec<RoleCount> {
    let mut counts: HashMap<Role, u64> = HashMap::new();
    for principal in directory.iter() {
        if !principal.is_active {
            continue;
        }
        if visible.is_none_or(|set| set.contains(&principal.id)) {
            *counts.entry(principal.role).or_insert(0) += 1;
        }
    }

    Role::ALL
        .iter()
        .map(|role| RoleCount {
            role: *role,
            count: counts.get(role).copied().unwrap_or(0),
        })
        .collect()
}
