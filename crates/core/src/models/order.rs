//! Order models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::types::{OrderId, UserId};

/// Order lifecycle status.
///
/// Orders are created as `pending` and there are no transition operations;
/// the enum exists so the persisted string stays well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// One line item of an order: a product snapshot plus a quantity.
///
/// The product fields are flattened into the line item, matching the
/// client's cart-entry shape (`{...product, quantity}`). The snapshot is
/// whatever the client sent at placement time, not a live catalog
/// reference; later catalog edits do not affect existing orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub quantity: u32,
}

/// A placed order, as persisted in `orders.json`.
///
/// Owned by the user who placed it; visible to that user or to any admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Request body for order placement.
///
/// The body is taken as given: items and total are not cross-checked
/// against each other or against the live catalog.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub shipping_address: String,
}

impl Order {
    /// Build an order for `user_id` from a placement request.
    #[must_use]
    pub fn place(new: NewOrder, user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::random(),
            user_id,
            items: new.items,
            total: new.total,
            shipping_address: new.shipping_address,
            status: OrderStatus::Pending,
            created_at: now,
        }
    }
}
