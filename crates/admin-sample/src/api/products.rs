//! # Products API
//!
//! In-memory stand-in for the remote `/products` endpoint. Category ids on
//! a product are validated against the categories collection, the way the
//! backend does before persisting.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use table_framework::{ApiError, EntityApi};

use crate::api::CategoriesApi;
use crate::model::{CategoryId, Product, ProductCreate, ProductId, ProductUpdate};

pub struct ProductsApi {
    rows: Mutex<Vec<Product>>,
    next_id: AtomicU32,
    categories: Arc<CategoriesApi>,
}

impl ProductsApi {
    pub fn new(categories: Arc<CategoriesApi>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
            categories,
        }
    }

    fn missing_categories(&self, ids: &[CategoryId]) -> Vec<CategoryId> {
        ids.iter()
            .filter(|id| !self.categories.contains(id))
            .cloned()
            .collect()
    }

    pub(crate) fn price_of(&self, id: &ProductId) -> Option<f64> {
        self.rows
            .lock()
            .expect("product store poisoned")
            .iter()
            .find(|product| product.id == *id)
            .map(|product| product.price)
    }

    pub(crate) fn missing_ids(&self, ids: &[ProductId]) -> Vec<ProductId> {
        let rows = self.rows.lock().expect("product store poisoned");
        ids.iter()
            .filter(|id| !rows.iter().any(|product| product.id == **id))
            .cloned()
            .collect()
    }
}

fn join_ids<I: std::fmt::Display>(ids: &[I]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl EntityApi<Product> for ProductsApi {
    async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.rows.lock().expect("product store poisoned").clone())
    }

    async fn create(&self, params: ProductCreate) -> Result<Product, ApiError> {
        let missing = self.missing_categories(&params.category_ids);
        if !missing.is_empty() {
            return Err(ApiError::NotFound(format!(
                "Categories with ids {} do not exist",
                join_ids(&missing)
            )));
        }
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let id = ProductId::new(format!("product_{n}"));
        let product = Product {
            image_url: format!("/static/products/{id}.png"),
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category_ids: params.category_ids,
        };
        self.rows
            .lock()
            .expect("product store poisoned")
            .push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, params: ProductUpdate) -> Result<Product, ApiError> {
        if let Some(category_ids) = &params.category_ids {
            let missing = self.missing_categories(category_ids);
            if !missing.is_empty() {
                return Err(ApiError::NotFound(format!(
                    "Categories with ids {} do not exist",
                    join_ids(&missing)
                )));
            }
        }
        let mut rows = self.rows.lock().expect("product store poisoned");
        let product = rows
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Product with id {id} does not exist")))?;
        if let Some(name) = params.name {
            product.name = name;
        }
        if let Some(description) = params.description {
            product.description = description;
        }
        if let Some(price) = params.price {
            product.price = price;
        }
        if let Some(category_ids) = params.category_ids {
            product.category_ids = category_ids;
        }
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.rows
            .lock()
            .expect("product store poisoned")
            .retain(|product| product.id != id);
        Ok(())
    }
}
