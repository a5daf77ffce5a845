//! Categorical rollups of scoped revenue.

use std::collections::HashMap;

use serde::Serialize;

use vendora_catalog::OwnershipScope;
use vendora_orders::Order;

use crate::attribution::scoped_order_revenue;

/// One row of a dimension rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionTotal {
    pub key: String,
    pub revenue: u64,
    pub order_count: u64,
}

/// Group scoped revenue by a categorical dimension of the order.
///
/// An order contributes to exactly one key (its own dimension value) and, as
/// with the global attribution, only the in-scope portion of its value.
/// Sorted descending by revenue with a key tie-break so output is stable.
pub fn rollup<F>(orders: &[Order], scope: &OwnershipScope, dimension: F) -> Vec<DimensionTotal>
where
    F: Fn(&Order) -> String,
{
    let mut grouped: HashMap<String, (u64, u64)> = HashMap::new();
    for order in orders {
        let Some(order_revenue) = scoped_order_revenue(order, scope) else {
            continue;
        };
        let entry = grouped.entry(dimension(order)).or_insert((0, 0));
        entry.0 = entry.0.saturating_add(order_revenue);
        entry.1 += 1;
    }

    let mut rows: Vec<DimensionTotal> = grouped
        .into_iter()
        .map(|(key, (revenue, order_count))| DimensionTotal {
            key,
            revenue,
            order_count,
        })
        .collect();
    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.key.cmp(&b.key)));
    rows
}
