//! # Orders API
//!
//! In-memory stand-in for the remote `/orders` endpoint. Mirrors the
//! backend's rules: the product selection must exist, and the order total
//! is always recomputed server-side from the current product prices,
//! rounded to 2 decimal places.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use table_framework::{ApiError, EntityApi};

use crate::api::ProductsApi;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate, ProductId};

pub struct OrdersApi {
    rows: Mutex<Vec<Order>>,
    next_id: AtomicU32,
    products: Arc<ProductsApi>,
}

impl OrdersApi {
    pub fn new(products: Arc<ProductsApi>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
            products,
        }
    }

    /// Sum of the selected products' prices. Every id must exist; callers
    /// check with [`ProductsApi::missing_ids`] first.
    fn total_of(&self, product_ids: &[ProductId]) -> f64 {
        let total: f64 = product_ids
            .iter()
            .filter_map(|id| self.products.price_of(id))
            .sum();
        (total * 100.0).round() / 100.0
    }

    fn check_products(&self, product_ids: &[ProductId]) -> Result<(), ApiError> {
        let missing = self.products.missing_ids(product_ids);
        if missing.is_empty() {
            return Ok(());
        }
        let ids = missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ApiError::NotFound(format!(
            "Products with ids {ids} do not exist"
        )))
    }
}

#[async_trait]
impl EntityApi<Order> for OrdersApi {
    async fn fetch_all(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.rows.lock().expect("order store poisoned").clone())
    }

    async fn create(&self, params: OrderCreate) -> Result<Order, ApiError> {
        self.check_products(&params.product_ids)?;
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let order = Order {
            id: OrderId::new(format!("order_{n}")),
            date: params.date,
            total: self.total_of(&params.product_ids),
            product_ids: params.product_ids,
        };
        self.rows
            .lock()
            .expect("order store poisoned")
            .push(order.clone());
        Ok(order)
    }

    async fn update(&self, id: OrderId, params: OrderUpdate) -> Result<Order, ApiError> {
        // Validate and price the new selection before taking the row lock.
        let repriced = match &params.product_ids {
            Some(product_ids) => {
                self.check_products(product_ids)?;
                Some(self.total_of(product_ids))
            }
            None => None,
        };
        let mut rows = self.rows.lock().expect("order store poisoned");
        let order = rows
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Order with id {id} does not exist")))?;
        if let Some(date) = params.date {
            order.date = date;
        }
        if let (Some(product_ids), Some(total)) = (params.product_ids, repriced) {
            order.product_ids = product_ids;
            order.total = total;
        }
        Ok(order.clone())
    }

    async fn delete(&self, id: OrderId) -> Result<(), ApiError> {
        self.rows
            .lock()
            .expect("order store poisoned")
            .retain(|order| order.id != id);
        Ok(())
    }
}
