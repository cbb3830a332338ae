//! # Categories API
//!
//! In-memory stand-in for the remote `/categories` endpoint.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use table_framework::{ApiError, EntityApi};

use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};

/// Serves the category collection the way the remote backend would:
/// server-assigned ids, full-collection fetches, partial updates.
pub struct CategoriesApi {
    rows: Mutex<Vec<Category>>,
    next_id: AtomicU32,
}

impl Default for CategoriesApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoriesApi {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }

    pub(crate) fn contains(&self, id: &CategoryId) -> bool {
        self.rows
            .lock()
            .expect("category store poisoned")
            .iter()
            .any(|category| category.id == *id)
    }
}

#[async_trait]
impl EntityApi<Category> for CategoriesApi {
    async fn fetch_all(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.rows.lock().expect("category store poisoned").clone())
    }

    async fn create(&self, params: CategoryCreate) -> Result<Category, ApiError> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let category = Category {
            id: CategoryId::new(format!("category_{n}")),
            name: params.name,
        };
        self.rows
            .lock()
            .expect("category store poisoned")
            .push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: CategoryId, params: CategoryUpdate) -> Result<Category, ApiError> {
        let mut rows = self.rows.lock().expect("category store poisoned");
        let category = rows
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Category with id {id} does not exist")))?;
        if let Some(name) = params.name {
            category.name = name;
        }
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> Result<(), ApiError> {
        self.rows
            .lock()
            .expect("category store poisoned")
            .retain(|category| category.id != id);
        Ok(())
    }
}
