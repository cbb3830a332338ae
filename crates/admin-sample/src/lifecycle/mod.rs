//! # Panel Lifecycle & Orchestration
//!
//! This module wires the whole admin panel together: it builds the API
//! collaborators, spawns one table controller per entity kind with its
//! context injected, and coordinates graceful shutdown.
//!
//! ## The Orchestration Pattern
//!
//! Individual tables are simple; **wiring them** is where the coupling
//! lives. Dependencies are injected late, at `run()` time: the controllers
//! are created first, then started with the collaborators they need. The
//! same pattern keeps the panel testable — tests wire the controllers to
//! mock collaborators instead.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles** - closes the request channels.
//! 2. **Controllers detect closure** - `recv()` returns `None` and the run
//!    loops exit.
//! 3. **Await completion** - wait for all controller tasks to finish.

use std::sync::Arc;
use table_framework::{RemovalConfirm, StaticConfirm, TableContext, TableHandle};
use tracing::{error, info};

use crate::api::{CategoriesApi, OrdersApi, ProductsApi};
use crate::dashboard::DashboardApi;
use crate::model::{Category, Order, Product};
use crate::pages;

/// The running admin panel: one table per entity kind, the API
/// collaborators behind them, and the dashboard aggregator.
pub struct AdminPanel {
    /// Handle for the products table controller.
    pub products: TableHandle<Product>,
    /// Handle for the categories table controller.
    pub categories: TableHandle<Category>,
    /// Handle for the orders table controller.
    pub orders: TableHandle<Order>,

    /// The `/products` collaborator, shared with the product dialogs.
    pub products_api: Arc<ProductsApi>,
    /// The `/categories` collaborator, shared with the category dialogs.
    pub categories_api: Arc<CategoriesApi>,
    /// The `/orders` collaborator, shared with the order dialogs.
    pub orders_api: Arc<OrdersApi>,

    /// The `/dashboard` collaborator.
    pub dashboard: DashboardApi,

    /// Task handles for all running controllers (used for shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminPanel {
    /// Creates and starts a panel whose removal prompts are auto-accepted.
    pub fn new() -> Self {
        Self::with_confirmation(Arc::new(StaticConfirm(true)))
    }

    /// Creates and starts a panel with the given confirmation collaborator.
    pub fn with_confirmation(confirm: Arc<dyn RemovalConfirm>) -> Self {
        // 1. Build the backend stand-ins; orders price themselves from
        //    products, products validate against categories.
        let categories_api = Arc::new(CategoriesApi::new());
        let products_api = Arc::new(ProductsApi::new(Arc::clone(&categories_api)));
        let orders_api = Arc::new(OrdersApi::new(Arc::clone(&products_api)));

        // 2. Create the controllers (no dependencies yet).
        let (categories_controller, categories) = pages::categories::table();
        let (products_controller, products) = pages::products::table();
        let (orders_controller, orders) = pages::orders::table();

        // 3. Start each controller with its context injected.
        let categories_handle = tokio::spawn(categories_controller.run(TableContext {
            api: categories_api.clone(),
            confirm: confirm.clone(),
        }));
        let products_handle = tokio::spawn(products_controller.run(TableContext {
            api: products_api.clone(),
            confirm: confirm.clone(),
        }));
        let orders_handle = tokio::spawn(orders_controller.run(TableContext {
            api: orders_api.clone(),
            confirm,
        }));

        let dashboard = DashboardApi::new(
            Arc::clone(&orders_api),
            Arc::clone(&products_api),
            Arc::clone(&categories_api),
        );

        Self {
            products,
            categories,
            orders,
            products_api,
            categories_api,
            orders_api,
            dashboard,
            handles: vec![categories_handle, products_handle, orders_handle],
        }
    }

    /// Gracefully shuts down the panel: drops the table handles, which
    /// closes the controller channels, then waits for every controller
    /// task to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down admin panel...");

        drop(self.products);
        drop(self.categories);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Controller task failed: {:?}", e);
                return Err(format!("Controller task failed: {e:?}"));
            }
        }

        info!("Admin panel shutdown complete.");
        Ok(())
    }
}

impl Default for AdminPanel {
    fn default() -> Self {
        Self::new()
    }
}
