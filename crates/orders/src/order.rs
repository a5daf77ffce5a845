use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendora_core::{CatalogItemId, OrderId, PrincipalId};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// One entry within an order: a single catalog item at purchase-time price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub catalog_item_id: CatalogItemId,
    pub quantity: i64,
    /// Unit price in smallest currency unit (e.g., cents), frozen at purchase.
    pub unit_price: u64,
}

impl LineItem {
    pub fn new(catalog_item_id: CatalogItemId, quantity: i64, unit_price: u64) -> Self {
        Self {
            catalog_item_id,
            quantity,
            unit_price,
        }
    }

    /// Line value. Non-positive quantities contribute nothing.
    pub fn line_total(&self) -> u64 {
        u64::try_from(self.quantity)
            .unwrap_or(0)
            .saturating_mul(self.unit_price)
    }
}

/// Shipping destination fields used for regional rollups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRegion {
    pub country: String,
    pub state: String,
    pub city: String,
}

impl ShippingRegion {
    pub fn new(
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            state: state.into(),
            city: city.into(),
        }
    }
}

/// A completed or in-flight transaction.
///
/// Line items may reference catalog items owned by different principals;
/// nothing downstream may assume a single vendor per order. `created_at` is
/// the sole temporal anchor for bucketing (not arrival time, not
/// last-modified time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub buyer: PrincipalId,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub line_items: Vec<LineItem>,
    pub shipping: ShippingRegion,
}

impl Order {
    /// Sum of all line values, regardless of scope.
    ///
    /// This is the pure line-item-derived figure; it is not the order's
    /// stored grand total, which may carry tax/shipping surcharges.
    pub fn line_item_total(&self) -> u64 {
        self.line_items
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.line_total()))
    }
}
