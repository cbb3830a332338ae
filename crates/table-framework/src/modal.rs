//! # Create/Update Dialog Contract
//!
//! A pair of generic form dialogs per entity kind, unified by one contract:
//!
//! * The dialog owns the entity create/update network call. The table
//!   controller never calls `create` or `update` itself; it only learns the
//!   outcome as a record-or-`None` signal.
//! * `None` means "did not happen", and the dialog **stays open** so the
//!   user can retry or correct input. Only a successful submit closes it.
//! * Required fields are validated locally before any network call; a
//!   validation failure surfaces inline field errors and never reaches the
//!   controller.
//! * Cancelling resets the form to its pristine values and closes, without
//!   reporting any outcome.
//!
//! Entity-specific knowledge (which fields exist, which are required, how
//! they map onto the API payloads) is supplied by each page as an
//! [`EntityForm`] implementation; the submission flow is written once here.

use crate::api::EntityApi;
use crate::error::TableError;
use crate::handle::TableHandle;
use crate::record::TableRecord;
use std::sync::Arc;
use tracing::{debug, warn};

/// One inline field error, e.g. `("name", "Name is required")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// The inline errors of one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    /// Flags `field` when `value` is empty after trimming.
    pub fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    /// Flags `field` when the selection is empty.
    pub fn require_selection<X>(&mut self, field: &'static str, values: &[X], message: &'static str) {
        if values.is_empty() {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// The form value behind a dialog for entity kind `T`.
///
/// A page defines one form type per entity and uses it for both the create
/// and the update dialog (the update dialog starts from a prefilled
/// instance). The dialog keeps a pristine clone for cancel/reset.
pub trait EntityForm<T: TableRecord>: Clone + Send {
    /// Check the entity's required-field set. An empty result allows
    /// submission.
    fn validate(&self) -> FieldErrors;

    /// The create payload for the API collaborator.
    fn create_params(&self) -> T::Create;

    /// The update payload for the API collaborator. Fields the user left
    /// untouched may be omitted (partial-update semantics).
    fn update_params(&self) -> T::Update;
}

/// What a submit attempt did, for the surrounding UI.
///
/// The table only ever sees the record-or-`None` signal; this value lets
/// the caller decide whether to keep the dialog on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted. The record went to the table and the dialog closed.
    Saved,
    /// The API call failed. The table was told `None`; the dialog stays
    /// open for a retry.
    Rejected,
    /// Required fields are missing. Nothing was sent anywhere; the errors
    /// are available inline.
    Invalid,
}

/// The create dialog for entity kind `T`.
pub struct CreateModal<T: TableRecord, F: EntityForm<T>> {
    form: F,
    pristine: F,
    errors: FieldErrors,
    api: Arc<dyn EntityApi<T>>,
    table: TableHandle<T>,
}

impl<T: TableRecord, F: EntityForm<T>> CreateModal<T, F> {
    pub fn new(form: F, api: Arc<dyn EntityApi<T>>, table: TableHandle<T>) -> Self {
        Self {
            pristine: form.clone(),
            form,
            errors: FieldErrors::default(),
            api,
            table,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// The rendering surface edits fields through this.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Inline errors of the last submit attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Make the dialog visible on the table's modal layer.
    pub async fn open(&self) -> Result<(), TableError> {
        self.table.open_create().await
    }

    /// Validate, create through the API, and report to the table.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, TableError> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            debug!(kind = T::kind_label(), ?errors, "Create blocked by validation");
            self.errors = errors;
            return Ok(SubmitOutcome::Invalid);
        }
        self.errors = FieldErrors::default();

        match self.api.create(self.form.create_params()).await {
            Ok(item) => {
                self.table.create_result(Some(item)).await?;
                self.table.close_create().await?;
                self.form = self.pristine.clone();
                Ok(SubmitOutcome::Saved)
            }
            Err(e) => {
                // Detail stays in the logs; the table only learns "did not
                // happen" and the dialog stays open.
                warn!(kind = T::kind_label(), error = %e, "Create rejected");
                self.table.create_result(None).await?;
                Ok(SubmitOutcome::Rejected)
            }
        }
    }

    /// Reset the form and close without reporting an outcome.
    pub async fn cancel(&mut self) -> Result<(), TableError> {
        self.form = self.pristine.clone();
        self.errors = FieldErrors::default();
        self.table.close_create().await
    }
}

/// The update dialog for entity kind `T`, carrying the record being edited.
pub struct UpdateModal<T: TableRecord, F: EntityForm<T>> {
    item: T,
    form: F,
    pristine: F,
    errors: FieldErrors,
    api: Arc<dyn EntityApi<T>>,
    table: TableHandle<T>,
}

impl<T: TableRecord, F: EntityForm<T>> UpdateModal<T, F> {
    /// `form` is expected to be prefilled from `item` by the page factory.
    pub fn new(item: T, form: F, api: Arc<dyn EntityApi<T>>, table: TableHandle<T>) -> Self {
        Self {
            item,
            pristine: form.clone(),
            form,
            errors: FieldErrors::default(),
            api,
            table,
        }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate, update through the API, and report to the table.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, TableError> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            debug!(kind = T::kind_label(), ?errors, "Update blocked by validation");
            self.errors = errors;
            return Ok(SubmitOutcome::Invalid);
        }
        self.errors = FieldErrors::default();

        match self
            .api
            .update(self.item.id().clone(), self.form.update_params())
            .await
        {
            Ok(item) => {
                self.table.update_result(Some(item)).await?;
                self.table.close_update().await?;
                self.form = self.pristine.clone();
                Ok(SubmitOutcome::Saved)
            }
            Err(e) => {
                warn!(kind = T::kind_label(), error = %e, "Update rejected");
                self.table.update_result(None).await?;
                Ok(SubmitOutcome::Rejected)
            }
        }
    }

    /// Reset the form to the prefilled values and close without reporting
    /// an outcome.
    pub async fn cancel(&mut self) -> Result<(), TableError> {
        self.form = self.pristine.clone();
        self.errors = FieldErrors::default();
        self.table.close_update().await
    }
}
