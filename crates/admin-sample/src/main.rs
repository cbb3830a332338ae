//! # Sales Admin Panel Demo
//!
//! Drives the admin panel end to end the way the UI would: loads the
//! tables, creates records through the dialogs (including a validation
//! miss), edits and removes through the grid actions, and prints the
//! dashboard metrics.

use admin_sample::lifecycle::AdminPanel;
use admin_sample::pages::{categories, orders, products};
use table_framework::tracing::setup_tracing;
use table_framework::{ColumnKind, RowActions};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting sales admin panel");
    let panel = AdminPanel::new();

    // Initial fetch for all three screens
    let loaded = (
        panel.products.load().await.map_err(|e| e.to_string())?,
        panel.categories.load().await.map_err(|e| e.to_string())?,
        panel.orders.load().await.map_err(|e| e.to_string())?,
    );
    info!(products = loaded.0, categories = loaded.1, orders = loaded.2, "Tables loaded");

    // Create a category through its dialog
    let span = tracing::info_span!("category_creation");
    let category = async {
        let mut dialog =
            categories::create_dialog(panel.categories_api.clone(), panel.categories.clone());
        dialog.open().await.map_err(|e| e.to_string())?;
        dialog.form_mut().name = "Beverages".to_string();
        let outcome = dialog.submit().await.map_err(|e| e.to_string())?;
        info!(?outcome, "Category dialog submitted");
        let snapshot = panel.categories.snapshot().await.map_err(|e| e.to_string())?;
        snapshot
            .items
            .first()
            .cloned()
            .ok_or_else(|| "category did not reach the table".to_string())
    }
    .instrument(span)
    .await?;

    // Create two products; the first submit shows inline validation
    let span = tracing::info_span!("product_creation");
    async {
        let mut dialog =
            products::create_dialog(panel.products_api.clone(), panel.products.clone());
        dialog.open().await.map_err(|e| e.to_string())?;

        let outcome = dialog.submit().await.map_err(|e| e.to_string())?;
        info!(?outcome, "Empty product form submitted");
        for error in dialog.errors().iter() {
            info!(field = error.field, message = error.message, "Field error");
        }

        dialog.form_mut().name = "Cold brew".to_string();
        dialog.form_mut().description = "Slow-steeped coffee".to_string();
        dialog.form_mut().price = "R$ 19,90".to_string();
        dialog.form_mut().category_ids = vec![category.id.clone()];
        let outcome = dialog.submit().await.map_err(|e| e.to_string())?;
        info!(?outcome, "First product saved");

        dialog.form_mut().name = "Loose leaf tea".to_string();
        dialog.form_mut().description = "A tin of green tea".to_string();
        dialog.form_mut().price = "R$ 12,50".to_string();
        dialog.form_mut().category_ids = vec![category.id.clone()];
        let outcome = dialog.submit().await.map_err(|e| e.to_string())?;
        info!(?outcome, "Second product saved");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Place an order for both products through the order dialog
    let span = tracing::info_span!("order_processing");
    async {
        let catalog = panel
            .products
            .snapshot()
            .await
            .map_err(|e| e.to_string())?
            .items;
        let mut dialog = orders::create_dialog(
            panel.orders_api.clone(),
            panel.orders.clone(),
            catalog.clone(),
        );
        dialog.open().await.map_err(|e| e.to_string())?;
        dialog.form_mut().product_ids = catalog.iter().map(|p| p.id.clone()).collect();
        info!(total = dialog.form().total(), "Running order total");
        let outcome = dialog.submit().await.map_err(|e| e.to_string())?;
        info!(?outcome, "Order placed");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Render the products grid the way the rendering collaborator would
    let columns = products::columns(RowActions::new(panel.products.clone()));
    let snapshot = panel.products.snapshot().await.map_err(|e| e.to_string())?;
    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    info!(row = headers.join(" | "), "Grid header");
    for row in snapshot.page_rows() {
        let cells: Vec<String> = columns.iter().filter_map(|c| c.cell(row)).collect();
        info!(row = cells.join(" | "), "Grid row");
    }

    // Edit the first product through its update dialog
    let first = snapshot.items[0].clone();
    panel
        .products
        .open_update(first.id.clone())
        .await
        .map_err(|e| e.to_string())?;
    let mut dialog =
        products::update_dialog(first, panel.products_api.clone(), panel.products.clone());
    dialog.form_mut().price = "R$ 24,90".to_string();
    let outcome = dialog.submit().await.map_err(|e| e.to_string())?;
    info!(?outcome, "Product repriced");

    // Remove the second product through the grid's delete action
    let second_id = snapshot.items[1].id.clone();
    if let Some(actions) = columns.iter().find_map(|c| match &c.kind {
        ColumnKind::Actions(actions) => Some(actions.clone()),
        _ => None,
    }) {
        let removed = actions.remove(second_id).await.map_err(|e| e.to_string())?;
        info!(removed, "Delete action clicked");
    }

    // Dashboard metrics over everything created above
    let metrics = panel
        .dashboard
        .metrics(None, None)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        total_orders = metrics.total_orders,
        total_revenue = metrics.total_revenue,
        average_order_value = metrics.average_order_value,
        "Dashboard metrics"
    );
    for product in &metrics.top_products {
        info!(product = %product.product_id, name = %product.product_name, count = product.count, "Top product");
    }

    // Shutdown: every handle clone must go before the controllers can
    // drain, including the ones held by the open dialog and the grid
    // columns.
    drop(dialog);
    drop(columns);
    panel.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
