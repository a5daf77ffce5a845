//! Line-item revenue attribution across ownership scopes.
//!
//! The same physical order can count toward several disjoint scopes at once,
//! one per distinct owner represented in its line items; each scope sees only
//! its own slice of the order's value.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use vendora_catalog::{Catalog, OwnershipScope};
use vendora_core::OrderId;
use vendora_orders::Order;

use crate::calendar::Bucket;

/// Scoped totals produced by [`attribute`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevenueSummary {
    /// Orders with at least one in-scope line item.
    pub order_count: u64,
    /// Sum of in-scope line values, in smallest currency unit.
    pub revenue: u64,
    pub per_order_revenue: HashMap<OrderId, u64>,
}

/// Attribute order revenue to an ownership scope at line-item granularity.
///
/// Per order: in-scope line values are summed and out-of-scope lines skipped
/// entirely, so nothing outside the scope leaks into the total. An order is
/// counted once per scope however many of its lines matched. Orders with no
/// line items contribute nothing. Pure function of its inputs.
pub fn attribute(orders: &[Order], scope: &OwnershipScope) -> RevenueSummary {
    let mut summary = RevenueSummary::default();
    for order in orders {
        if let Some(order_revenue) = scoped_order_revenue(order, scope) {
            summary.order_count += 1;
            summary.revenue = summary.revenue.saturating_add(order_revenue);
            summary.per_order_revenue.insert(order.id, order_revenue);
        }
    }
    summary
}

/// In-scope revenue for a single order, or `None` when no line matched.
///
/// A matching line of zero value still marks the order as touched.
pub fn scoped_order_revenue(order: &Order, scope: &OwnershipScope) -> Option<u64> {
    let mut revenue = 0u64;
    let mut touched = false;
    for line in &order.line_items {
        if scope.contains(line.catalog_item_id) {
            revenue = revenue.saturating_add(line.line_total());
            touched = true;
        }
    }
    touched.then_some(revenue)
}

/// A bucket with merged scoped totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketTotal {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub revenue: u64,
    pub order_count: u64,
}

/// Merge per-order scoped revenue into pre-built buckets by `created_at`.
///
/// Buckets arrive zero-filled and every one appears in the output whether or
/// not any order matched; the half-open `[start, end)` intervals assign a
/// boundary timestamp to exactly one bucket.
pub fn bucketed(orders: &[Order], scope: &OwnershipScope, buckets: &[Bucket]) -> Vec<BucketTotal> {
    let mut totals: Vec<BucketTotal> = buckets
        .iter()
        .map(|bucket| BucketTotal {
            label: bucket.label.clone(),
            start: bucket.start,
            end: bucket.end,
            revenue: 0,
            order_count: 0,
        })
        .collect();

    for order in orders {
        let Some(order_revenue) = scoped_order_revenue(order, scope) else {
            continue;
        };
        if let Some(slot) = totals
            .iter_mut()
            .find(|b| b.start <= order.created_at && order.created_at < b.end)
        {
            slot.revenue = slot.revenue.saturating_add(order_revenue);
            slot.order_count += 1;
        }
    }

    totals
}

/// Surface line items whose catalog reference no longer resolves.
///
/// Such lines cannot be attributed to an owner; they are absent from every
/// owner-derived scope by construction, and worth logging rather than failing
/// the aggregation.
pub fn log_unresolved_lines(orders: &[Order], catalog: &Catalog) {
    for order in orders {
        for line in &order.line_items {
            if !catalog.contains(line.catalog_item_id) {
                tracing::warn!(
                    order = %order.id,
                    item = %line.catalog_item_id,
                    "line item references a catalog item that does not resolve; excluded from scoping"
                );
            }
        }
    }
}
