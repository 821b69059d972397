//! Order records exchanged with the order service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CustomerId, OrderId, ProductId};
use super::status::OrderStatus;

/// A single line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Product reference (owned by the product service).
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: i64,
    /// Price per unit at the time of ordering.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

/// An order as returned by the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier.
    pub order_id: OrderId,
    /// Customer reference (owned by the customer service).
    pub customer_id: CustomerId,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Ordered lines.
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    /// Order total as computed by the order service.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Creation timestamp (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp (server-assigned).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Payload for creating or replacing an order.
///
/// The total is computed server-side and therefore absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
}
