/// Represents a customer order.
///
/// # Table Framework
/// This struct implements the [`TableRecord`](table_framework::TableRecord)
/// trait, allowing it to be managed by a generic
/// [`TableController`](table_framework::TableController).
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use table_framework::TableRecord;

use crate::model::ProductId;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    /// Computed server-side from the prices of the selected products.
    pub total: f64,
    pub product_ids: Vec<ProductId>,
}

/// Payload for creating a new order. The id and the total are assigned by
/// the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub date: NaiveDate,
    pub product_ids: Vec<ProductId>,
}

/// Partial payload for updating an order; omitted fields are left
/// unchanged server-side. Changing the product selection makes the server
/// recompute the total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<ProductId>>,
}

impl TableRecord for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn kind_label() -> &'static str {
        "Order"
    }
}
