use std::sync::Arc;
use std::time::Duration;

use admin_sample::lifecycle::AdminPanel;
use admin_sample::pages::{categories, orders, products};
use chrono::NaiveDate;
use table_framework::{EntityApi, StaticConfirm, SubmitOutcome};

/// Full end-to-end test with the real controllers, dialogs and the
/// in-memory backend working together.
#[tokio::test]
async fn test_full_admin_panel_flow() {
    let panel = AdminPanel::new();

    // Initial fetches; everything starts empty.
    assert_eq!(panel.categories.load().await.unwrap(), 0);
    assert_eq!(panel.products.load().await.unwrap(), 0);
    assert_eq!(panel.orders.load().await.unwrap(), 0);

    // Create a category through its dialog.
    let mut category_dialog =
        categories::create_dialog(panel.categories_api.clone(), panel.categories.clone());
    category_dialog.open().await.unwrap();
    assert!(panel.categories.snapshot().await.unwrap().create_open);

    category_dialog.form_mut().name = "Coffee".to_string();
    assert_eq!(category_dialog.submit().await.unwrap(), SubmitOutcome::Saved);

    let snapshot = panel.categories.snapshot().await.unwrap();
    assert!(!snapshot.create_open, "a successful submit closes the dialog");
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(
        snapshot.notification.as_ref().map(|n| n.message.as_str()),
        Some("Category created successfully")
    );
    let category = snapshot.items[0].clone();
    assert_eq!(category.name, "Coffee");

    // Create two products through the product dialog.
    let mut product_dialog =
        products::create_dialog(panel.products_api.clone(), panel.products.clone());
    product_dialog.open().await.unwrap();

    product_dialog.form_mut().name = "Cold brew".to_string();
    product_dialog.form_mut().description = "Slow-steeped coffee".to_string();
    product_dialog.form_mut().price = "R$ 10,50".to_string();
    product_dialog.form_mut().category_ids = vec![category.id.clone()];
    assert_eq!(product_dialog.submit().await.unwrap(), SubmitOutcome::Saved);

    product_dialog.open().await.unwrap();
    product_dialog.form_mut().name = "Moka pot".to_string();
    product_dialog.form_mut().description = "Stovetop espresso maker".to_string();
    product_dialog.form_mut().price = "R$ 5,25".to_string();
    product_dialog.form_mut().category_ids = vec![category.id.clone()];
    assert_eq!(product_dialog.submit().await.unwrap(), SubmitOutcome::Saved);

    let catalog = panel.products.snapshot().await.unwrap().items;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].id.to_string(), "product_1");
    assert_eq!(catalog[1].id.to_string(), "product_2");
    assert!(
        !catalog[0].image_url.is_empty(),
        "the server assigns the image url"
    );

    // Place an order for both products.
    let mut order_dialog = orders::create_dialog(
        panel.orders_api.clone(),
        panel.orders.clone(),
        catalog.clone(),
    );
    order_dialog.open().await.unwrap();

    // An empty selection is blocked locally, before any network call.
    assert_eq!(order_dialog.submit().await.unwrap(), SubmitOutcome::Invalid);
    assert!(!order_dialog.errors().is_empty());

    order_dialog.form_mut().date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    order_dialog.form_mut().product_ids = catalog.iter().map(|p| p.id.clone()).collect();
    assert_eq!(order_dialog.form().total(), 15.75);
    assert_eq!(order_dialog.submit().await.unwrap(), SubmitOutcome::Saved);

    let snapshot = panel.orders.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    let order = snapshot.items[0].clone();
    assert_eq!(order.total, 15.75, "the server reprices the order");
    assert_eq!(order.product_ids.len(), 2);

    // Edit the first product; the row is replaced in place.
    assert!(panel
        .products
        .open_update(catalog[0].id.clone())
        .await
        .unwrap());
    let mut update_dialog = products::update_dialog(
        catalog[0].clone(),
        panel.products_api.clone(),
        panel.products.clone(),
    );
    update_dialog.form_mut().price = "R$ 12,00".to_string();
    assert_eq!(update_dialog.submit().await.unwrap(), SubmitOutcome::Saved);

    let snapshot = panel.products.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.items[0].id, catalog[0].id, "position preserved");
    assert_eq!(snapshot.items[0].price, 12.0);
    assert!(!snapshot.update_open(), "a successful submit closes the dialog");
    assert_eq!(
        snapshot.notification.as_ref().map(|n| n.message.as_str()),
        Some("Product updated successfully")
    );

    // Remove the second product; the row disappears locally at once and
    // the delete call reaches the backend shortly after.
    assert!(panel.products.remove(catalog[1].id.clone()).await.unwrap());
    assert_eq!(panel.products.snapshot().await.unwrap().items.len(), 1);

    let mut attempts = 0;
    loop {
        let server_rows = panel.products_api.fetch_all().await.unwrap();
        if server_rows.len() == 1 {
            break;
        }
        attempts += 1;
        assert!(attempts < 100, "delete never reached the backend");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // The dashboard sees everything created above.
    let metrics = panel.dashboard.metrics(None, None).await.unwrap();
    assert_eq!(metrics.total_orders, 1);
    assert_eq!(metrics.total_revenue, 15.75);
    assert_eq!(metrics.orders_by_period["2024-03-14"].count, 1);

    // Dialogs hold handle clones; they must go before shutdown can drain.
    drop(category_dialog);
    drop(product_dialog);
    drop(order_dialog);
    drop(update_dialog);
    panel.shutdown().await.unwrap();
}

/// Declining the confirmation prompt leaves both the table and the
/// backend untouched.
#[tokio::test]
async fn test_remove_declined_by_the_confirmation_collaborator() {
    let panel = AdminPanel::with_confirmation(Arc::new(StaticConfirm(false)));
    panel.categories.load().await.unwrap();

    let mut dialog =
        categories::create_dialog(panel.categories_api.clone(), panel.categories.clone());
    dialog.open().await.unwrap();
    dialog.form_mut().name = "Tea".to_string();
    assert_eq!(dialog.submit().await.unwrap(), SubmitOutcome::Saved);

    let category = panel.categories.snapshot().await.unwrap().items[0].clone();
    let removed = panel.categories.remove(category.id.clone()).await.unwrap();
    assert!(!removed);

    assert_eq!(panel.categories.snapshot().await.unwrap().items.len(), 1);
    assert_eq!(panel.categories_api.fetch_all().await.unwrap().len(), 1);

    drop(dialog);
    panel.shutdown().await.unwrap();
}

/// Cancelling a dialog resets its form and reports nothing to the table.
#[tokio::test]
async fn test_cancel_resets_the_form_without_reporting() {
    let panel = AdminPanel::new();
    panel.products.load().await.unwrap();

    let mut dialog = products::create_dialog(panel.products_api.clone(), panel.products.clone());
    dialog.open().await.unwrap();
    dialog.form_mut().name = "Half-typed".to_string();
    dialog.cancel().await.unwrap();

    assert!(dialog.form().name.is_empty(), "cancel resets the form");
    let snapshot = panel.products.snapshot().await.unwrap();
    assert!(!snapshot.create_open);
    assert!(snapshot.items.is_empty());
    assert!(snapshot.notification.is_none(), "cancel is not an outcome");

    drop(dialog);
    panel.shutdown().await.unwrap();
}
