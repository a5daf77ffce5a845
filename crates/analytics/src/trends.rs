//! Ad hoc trend computation: explicit-granularity series plus product and
//! owner-role breakdowns over the bucketed window.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use vendora_auth::Role;
use vendora_catalog::OwnershipScope;
use vendora_core::CatalogItemId;
use vendora_orders::Order;

use crate::attribution::{self, BucketTotal};
use crate::calendar::{self, Granularity};
use crate::engine::EngineContext;

/// Parameters for an ad hoc trend query.
#[derive(Debug, Clone, Copy)]
pub struct TrendRequest {
    pub period: Granularity,
    /// Defaults to the `as_of` year.
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductQuantity {
    pub item_id: CatalogItemId,
    pub name: String,
    pub quantity_sold: i64,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleRevenue {
    pub role: Role,
    pub revenue: u64,
}

/// The trend aggregate returned to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendStats {
    pub series: Vec<BucketTotal>,
    /// Top five products by quantity sold within the bucketed window.
    pub top_products: Vec<ProductQuantity>,
    /// Line-item revenue grouped by the owning principal's role.
    pub revenue_by_role: Vec<RoleRevenue>,
}

/// Compute global-scope trend statistics.
pub(crate) fn compute(
    ctx: &EngineContext<'_>,
    request: TrendRequest,
    as_of: DateTime<Utc>,
) -> TrendStats {
    let year = request.year.unwrap_or(as_of.year());
    let buckets = calendar::trend_buckets(year, request.period, as_of);
    let series = attribution::bucketed(ctx.orders, &OwnershipScope::Global, &buckets);

    let window = buckets
        .first()
        .map(|b| b.start)
        .zip(buckets.last().map(|b| b.end));
    let in_window: Vec<&Order> = match window {
        Some((start, end)) => ctx
            .orders
            .iter()
            .filter(|order| start <= order.created_at && order.created_at < end)
            .collect(),
        None => Vec::new(),
    };

    let mut by_item: HashMap<CatalogItemId, (i64, u64)> = HashMap::new();
    let mut by_role: HashMap<Role, u64> = HashMap::new();
    for order in &in_window {
        for line in &order.line_items {
            let entry = by_item.entry(line.catalog_item_id).or_insert((0, 0));
            entry.0 += line.quantity.max(0);
            entry.1 = entry.1.saturating_add(line.line_total());

            let Some(item) = ctx.catalog.get(line.catalog_item_id) else {
                continue;
            };
            match ctx.directory.get(item.owner) {
                Some(owner) => {
                    let total = by_role.entry(owner.role).or_insert(0);
                    *total = total.saturating_add(line.line_total());
                }
                None => {
                    tracing::warn!(
                        item = %item.id,
                        owner = %item.owner,
                        "item owner does not resolve; skipped in role breakdown"
                    );
                }
            }
        }
    }
    attribution::log_unresolved_lines(ctx.orders, ctx.catalog);

    let mut top_products: Vec<ProductQuantity> = by_item
        .into_iter()
        .filter_map(|(item_id, (quantity_sold, revenue))| {
            let item = ctx.catalog.get(item_id)?;
            Some(ProductQuantity {
                item_id,
                name: item.name.clone(),
                quantity_sold,
                revenue,
            })
        })
        .collect();
    top_products.sort_by(|a, b| {
        b.quantity_sold
            .cmp(&a.quantity_sold)
            .then_with(|| b.revenue.cmp(&a.revenue))
            .then_with(|| a.item_id.as_uuid().cmp(b.item_id.as_uuid()))
    });
    top_products.truncate(5);

    let mut revenue_by_role: Vec<RoleRevenue> = by_role
        .into_iter()
        .map(|(role, revenue)| RoleRevenue { role, revenue })
        .collect();
    revenue_by_role.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| b.role.rank().cmp(&a.role.rank()))
    });

    TrendStats {
        series,
        top_products,
        revenue_by_role,
    }
}
