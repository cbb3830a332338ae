//! # Dashboard Metrics
//!
//! Sales metrics aggregated over the order collection, optionally limited
//! to an inclusive date range: order counts and revenue overall and per
//! day, the most ordered products, and revenue per category. The shapes
//! mirror the `/dashboard` endpoint's JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use table_framework::{ApiError, EntityApi};

use crate::api::{CategoriesApi, OrdersApi, ProductsApi};
use crate::model::{Category, CategoryId, Order, Product, ProductId};

/// How many products the "top products" list carries.
const TOP_PRODUCT_LIMIT: usize = 5;

/// One day's worth of orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    pub count: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: ProductId,
    pub product_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category_id: CategoryId,
    pub category_name: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_orders: u64,
    pub average_order_value: f64,
    pub total_revenue: f64,
    /// Keyed by `YYYY-MM-DD`; the map keeps the days sorted.
    pub orders_by_period: BTreeMap<String, PeriodBucket>,
    pub top_products: Vec<TopProduct>,
    pub revenue_by_category: Vec<CategoryRevenue>,
}

/// Aggregates the metrics over the given collections. Orders outside the
/// inclusive `[start_date, end_date]` range are ignored; either bound may
/// be absent. Order entries referencing unknown products, and products
/// referencing unknown categories, are skipped rather than reported.
pub fn compute_metrics(
    orders: &[Order],
    products: &[Product],
    categories: &[Category],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> DashboardMetrics {
    let selected: Vec<&Order> = orders
        .iter()
        .filter(|order| {
            start_date.is_none_or(|start| order.date >= start)
                && end_date.is_none_or(|end| order.date <= end)
        })
        .collect();

    let total_orders = selected.len() as u64;
    let total_revenue: f64 = selected.iter().map(|order| order.total).sum();
    let average_order_value = if total_orders > 0 {
        total_revenue / total_orders as f64
    } else {
        0.0
    };

    let mut orders_by_period: BTreeMap<String, PeriodBucket> = BTreeMap::new();
    for order in &selected {
        let bucket = orders_by_period
            .entry(order.date.format("%Y-%m-%d").to_string())
            .or_default();
        bucket.count += 1;
        bucket.revenue += order.total;
    }

    let mut order_counts: HashMap<&ProductId, u64> = HashMap::new();
    for order in &selected {
        for product_id in &order.product_ids {
            *order_counts.entry(product_id).or_default() += 1;
        }
    }
    let mut ranked: Vec<(&ProductId, u64)> = order_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let top_products = ranked
        .into_iter()
        .filter_map(|(product_id, count)| {
            products
                .iter()
                .find(|product| product.id == *product_id)
                .map(|product| TopProduct {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    count,
                })
        })
        .take(TOP_PRODUCT_LIMIT)
        .collect();

    let mut category_revenue: HashMap<&CategoryId, f64> = HashMap::new();
    for order in &selected {
        for product_id in &order.product_ids {
            let Some(product) = products.iter().find(|product| product.id == *product_id) else {
                continue;
            };
            for category_id in &product.category_ids {
                *category_revenue.entry(category_id).or_default() += product.price;
            }
        }
    }
    let mut revenue_by_category: Vec<CategoryRevenue> = category_revenue
        .into_iter()
        .filter_map(|(category_id, revenue)| {
            categories
                .iter()
                .find(|category| category.id == *category_id)
                .map(|category| CategoryRevenue {
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                    revenue,
                })
        })
        .collect();
    revenue_by_category.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });

    DashboardMetrics {
        total_orders,
        average_order_value,
        total_revenue,
        orders_by_period,
        top_products,
        revenue_by_category,
    }
}

/// The `/dashboard` collaborator: reads the three collections and
/// aggregates them.
pub struct DashboardApi {
    orders: Arc<OrdersApi>,
    products: Arc<ProductsApi>,
    categories: Arc<CategoriesApi>,
}

impl DashboardApi {
    pub fn new(
        orders: Arc<OrdersApi>,
        products: Arc<ProductsApi>,
        categories: Arc<CategoriesApi>,
    ) -> Self {
        Self {
            orders,
            products,
            categories,
        }
    }

    pub async fn metrics(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<DashboardMetrics, ApiError> {
        let orders = self.orders.fetch_all().await?;
        let products = self.products.fetch_all().await?;
        let categories = self.categories.fetch_all().await?;
        Ok(compute_metrics(
            &orders,
            &products,
            &categories,
            start_date,
            end_date,
        ))
    }
}
