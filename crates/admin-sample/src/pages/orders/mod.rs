//! # Orders Page
//!
//! Per-entity glue for the order table. The order dialogs carry the
//! product catalog so they can show a running total for the current
//! selection; the authoritative total is still computed server-side.

pub mod total;

pub use total::calculate_total;

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use table_framework::{
    ColumnSpec, CreateModal, EntityApi, EntityForm, FieldErrors, RowActions, TableController,
    TableHandle, UpdateModal,
};

use crate::model::{Order, OrderCreate, OrderUpdate, Product, ProductId};

/// Form state behind the order dialogs.
#[derive(Debug, Clone)]
pub struct OrderForm {
    pub date: NaiveDate,
    pub product_ids: Vec<ProductId>,
    catalog: Vec<Product>,
}

impl OrderForm {
    /// An empty form dated today, for the create dialog.
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            date: Local::now().date_naive(),
            product_ids: Vec::new(),
            catalog,
        }
    }

    pub fn prefilled(item: &Order, catalog: Vec<Product>) -> Self {
        Self {
            date: item.date,
            product_ids: item.product_ids.clone(),
            catalog,
        }
    }

    /// Running total of the current selection, for display next to the
    /// product picker.
    pub fn total(&self) -> f64 {
        calculate_total(&self.catalog, &self.product_ids)
    }
}

impl EntityForm<Order> for OrderForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require_selection("product_ids", &self.product_ids, "Products are required");
        errors
    }

    fn create_params(&self) -> OrderCreate {
        OrderCreate {
            date: self.date,
            product_ids: self.product_ids.clone(),
        }
    }

    fn update_params(&self) -> OrderUpdate {
        // The dialog always submits both fields; the server reprices when
        // the selection changes.
        OrderUpdate {
            date: Some(self.date),
            product_ids: Some(self.product_ids.clone()),
        }
    }
}

/// Creates the order table controller and its handle.
pub fn table() -> (TableController<Order>, TableHandle<Order>) {
    TableController::new(32)
}

pub fn columns(actions: RowActions<Order>) -> Vec<ColumnSpec<Order>> {
    vec![
        ColumnSpec::value("id", "ID", 200, |o: &Order| o.id.to_string()),
        ColumnSpec::value("date", "Date", 150, |o: &Order| {
            o.date.format("%d/%m/%Y").to_string()
        }),
        ColumnSpec::value("total", "Total", 150, |o: &Order| format!("R$ {}", o.total)),
        ColumnSpec::actions(200, actions),
    ]
}

pub fn create_dialog(
    api: Arc<dyn EntityApi<Order>>,
    table: TableHandle<Order>,
    catalog: Vec<Product>,
) -> CreateModal<Order, OrderForm> {
    CreateModal::new(OrderForm::new(catalog), api, table)
}

pub fn update_dialog(
    item: Order,
    api: Arc<dyn EntityApi<Order>>,
    table: TableHandle<Order>,
    catalog: Vec<Product>,
) -> UpdateModal<Order, OrderForm> {
    let form = OrderForm::prefilled(&item, catalog);
    UpdateModal::new(item, form, api, table)
}
