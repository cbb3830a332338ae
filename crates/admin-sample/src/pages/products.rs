//! # Products Page
//!
//! Per-entity glue for the product table: the form behind both dialogs
//! (with the locale price field), the column set, and the wiring
//! factories.

use std::sync::Arc;
use table_framework::{
    ColumnSpec, CreateModal, EntityApi, EntityForm, FieldErrors, RowActions, TableController,
    TableHandle, UpdateModal,
};

use crate::model::{CategoryId, Product, ProductCreate, ProductUpdate};

/// Form state behind the product dialogs.
///
/// The price is kept as the raw input string ("R$ 19,90") and parsed on
/// submission, like the numeric input widget it mirrors.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_ids: Vec<CategoryId>,
}

impl ProductForm {
    pub fn prefilled(item: &Product) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: format!("{:.2}", item.price),
            category_ids: item.category_ids.clone(),
        }
    }

    fn parsed_price(&self) -> Option<f64> {
        let raw = self.price.replace("R$", "").replace(',', ".");
        raw.trim().parse::<f64>().ok()
    }
}

impl EntityForm<Product> for ProductForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require("description", &self.description, "Description is required");
        errors.require("price", &self.price, "Price is required");
        if !self.price.trim().is_empty() && self.parsed_price().is_none() {
            errors.push("price", "Price must be a number");
        }
        errors
    }

    fn create_params(&self) -> ProductCreate {
        ProductCreate {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.parsed_price().unwrap_or(0.0),
            category_ids: self.category_ids.clone(),
        }
    }

    fn update_params(&self) -> ProductUpdate {
        ProductUpdate {
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            price: self.parsed_price(),
            category_ids: (!self.category_ids.is_empty()).then(|| self.category_ids.clone()),
        }
    }
}

/// Creates the product table controller and its handle.
pub fn table() -> (TableController<Product>, TableHandle<Product>) {
    TableController::new(32)
}

pub fn columns(actions: RowActions<Product>) -> Vec<ColumnSpec<Product>> {
    vec![
        ColumnSpec::value("id", "ID", 200, |p: &Product| p.id.to_string()),
        ColumnSpec::value("name", "Name", 200, |p: &Product| p.name.clone()),
        ColumnSpec::value("description", "Description", 250, |p: &Product| {
            p.description.clone()
        }),
        ColumnSpec::value("price", "Price", 150, |p: &Product| format!("R$ {}", p.price)),
        ColumnSpec::actions(200, actions),
    ]
}

pub fn create_dialog(
    api: Arc<dyn EntityApi<Product>>,
    table: TableHandle<Product>,
) -> CreateModal<Product, ProductForm> {
    CreateModal::new(ProductForm::default(), api, table)
}

pub fn update_dialog(
    item: Product,
    api: Arc<dyn EntityApi<Product>>,
    table: TableHandle<Product>,
) -> UpdateModal<Product, ProductForm> {
    let form = ProductForm::prefilled(&item);
    UpdateModal::new(item, form, api, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn product() -> Product {
        Product {
            id: ProductId::new("product_1"),
            name: "Cold brew".into(),
            description: "Slow-steeped coffee".into(),
            price: 19.9,
            category_ids: vec![CategoryId::new("category_1")],
            image_url: "/static/products/product_1.png".into(),
        }
    }

    #[test]
    fn test_required_fields() {
        let errors = ProductForm::default().validate();
        assert_eq!(errors.message_for("name"), Some("Name is required"));
        assert_eq!(
            errors.message_for("description"),
            Some("Description is required")
        );
        assert_eq!(errors.message_for("price"), Some("Price is required"));
    }

    #[test]
    fn test_price_must_parse() {
        let form = ProductForm {
            name: "Cold brew".into(),
            description: "Coffee".into(),
            price: "a lot".into(),
            category_ids: vec![],
        };
        let errors = form.validate();
        assert_eq!(errors.message_for("price"), Some("Price must be a number"));
    }

    #[test]
    fn test_locale_price_input_is_accepted() {
        let form = ProductForm {
            name: "Cold brew".into(),
            description: "Coffee".into(),
            price: "R$ 19,90".into(),
            category_ids: vec![],
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.create_params().price, 19.9);
    }

    #[test]
    fn test_prefilled_round_trips_the_price() {
        let form = ProductForm::prefilled(&product());
        assert_eq!(form.price, "19.90");
        assert!(form.validate().is_empty());
        assert_eq!(form.create_params().price, 19.9);
    }

    #[test]
    fn test_update_params_omit_untouched_fields() {
        let form = ProductForm {
            name: String::new(),
            description: String::new(),
            price: "24,90".into(),
            category_ids: vec![],
        };
        let params = form.update_params();
        assert!(params.name.is_none());
        assert!(params.description.is_none());
        assert_eq!(params.price, Some(24.9));
        assert!(params.category_ids.is_none());
    }
}
