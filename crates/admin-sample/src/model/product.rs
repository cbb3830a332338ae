/// Represents a product in the catalog.
///
/// # Table Framework
/// This struct implements the [`TableRecord`](table_framework::TableRecord)
/// trait, allowing it to be managed by a generic
/// [`TableController`](table_framework::TableController).
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use table_framework::TableRecord;

use crate::model::CategoryId;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_ids: Vec<CategoryId>,
    /// Assigned server-side when the product image is stored.
    pub image_url: String,
}

/// Payload for creating a new product. The id and the image url are
/// assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_ids: Vec<CategoryId>,
}

/// Partial payload for updating a product; omitted fields are left
/// unchanged server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<CategoryId>>,
}

impl TableRecord for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn kind_label() -> &'static str {
        "Product"
    }
}
