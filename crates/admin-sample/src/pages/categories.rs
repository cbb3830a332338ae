//! # Categories Page
//!
//! Per-entity glue for the category table: the form behind both dialogs,
//! the column set, and the wiring factories.

use std::sync::Arc;
use table_framework::{
    ColumnSpec, CreateModal, EntityApi, EntityForm, FieldErrors, RowActions, TableController,
    TableHandle, UpdateModal,
};

use crate::model::{Category, CategoryCreate, CategoryUpdate};

/// Form state behind the category dialogs.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn prefilled(item: &Category) -> Self {
        Self {
            name: item.name.clone(),
        }
    }
}

impl EntityForm<Category> for CategoryForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors
    }

    fn create_params(&self) -> CategoryCreate {
        CategoryCreate {
            name: self.name.clone(),
        }
    }

    fn update_params(&self) -> CategoryUpdate {
        CategoryUpdate {
            name: (!self.name.is_empty()).then(|| self.name.clone()),
        }
    }
}

/// Creates the category table controller and its handle.
pub fn table() -> (TableController<Category>, TableHandle<Category>) {
    TableController::new(32)
}

pub fn columns(actions: RowActions<Category>) -> Vec<ColumnSpec<Category>> {
    vec![
        ColumnSpec::value("id", "ID", 200, |c: &Category| c.id.to_string()),
        ColumnSpec::value("name", "Name", 200, |c: &Category| c.name.clone()),
        ColumnSpec::actions(200, actions),
    ]
}

pub fn create_dialog(
    api: Arc<dyn EntityApi<Category>>,
    table: TableHandle<Category>,
) -> CreateModal<Category, CategoryForm> {
    CreateModal::new(CategoryForm::default(), api, table)
}

pub fn update_dialog(
    item: Category,
    api: Arc<dyn EntityApi<Category>>,
    table: TableHandle<Category>,
) -> UpdateModal<Category, CategoryForm> {
    let form = CategoryForm::prefilled(&item);
    UpdateModal::new(item, form, api, table)
}
