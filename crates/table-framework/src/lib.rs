//! # Table Framework
//!
//! This crate provides the foundational building blocks for admin-panel
//! CRUD screens in Rust: a **generic data-table controller** that drives
//! fetch/create/update/delete/pagination/notification flow uniformly for
//! any entity kind, and the **create/update dialog contract** the screens
//! plug into it.
//!
//! ## Why a generic controller?
//!
//! Admin panels repeat the same screen over and over: a paginated grid of
//! rows, an "add" dialog, an "edit" dialog, a delete button with a
//! confirmation, and a snackbar that reports outcomes. Only the entity
//! changes. This framework writes that loop **once**:
//!
//! - **Separation**: each entity kind (Product, Category, Order) gets its
//!   own controller instance with completely isolated state.
//! - **Uniformity**: every screen gets the same list/modal/notification
//!   semantics, including the failure behavior (keep prior state, surface
//!   exactly one transient notification).
//! - **Type safety**: associated types on [`TableRecord`] make it
//!   impossible to feed a `CategoryCreate` payload into a Product table.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Record Layer** ([`TableRecord`], [`EntityForm`]) - your entities
//!    and their form/payload mappings.
//! 2. **Runtime Layer** ([`TableController`]) - sequential request
//!    processing over the table state.
//! 3. **Interface Layer** ([`TableHandle`], [`CreateModal`],
//!    [`UpdateModal`], [`RowActions`]) - type-safe communication for pages,
//!    dialogs and grid columns.
//!
//! The controller runs as its own Tokio task and processes requests
//! sequentially, so the row list has a single logical writer and no locks.
//! Collaborators (the entity API, the removal confirmation) are injected at
//! `run()` time through [`TableContext`].
//!
//! ## Side-effect boundaries
//!
//! Network I/O is split deliberately:
//!
//! - the **controller** owns `fetch_all` and the fire-and-forget `delete`;
//! - the **dialogs** own `create` and `update`, and report back to the
//!   table only as "here is the record" or "it did not happen" (`None`).
//!   On `None` the dialog stays open so the user can retry.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use table_framework::{
//!     ApiError, EntityApi, StaticConfirm, TableContext, TableController, TableRecord,
//! };
//!
//! // 1. Define the record and its API payloads
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: String,
//!     text: String,
//! }
//!
//! #[derive(Debug)]
//! struct NoteCreate {
//!     text: String,
//! }
//!
//! #[derive(Debug)]
//! struct NoteUpdate {
//!     text: Option<String>,
//! }
//!
//! impl TableRecord for Note {
//!     type Id = String;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!
//!     fn id(&self) -> &String {
//!         &self.id
//!     }
//!
//!     fn kind_label() -> &'static str {
//!         "Note"
//!     }
//! }
//!
//! // 2. Provide the API collaborator (a stub here)
//! struct NotesApi;
//!
//! #[async_trait]
//! impl EntityApi<Note> for NotesApi {
//!     async fn fetch_all(&self) -> Result<Vec<Note>, ApiError> {
//!         Ok(vec![Note { id: "note_1".into(), text: "hello".into() }])
//!     }
//!     async fn create(&self, params: NoteCreate) -> Result<Note, ApiError> {
//!         Ok(Note { id: "note_2".into(), text: params.text })
//!     }
//!     async fn update(&self, id: String, params: NoteUpdate) -> Result<Note, ApiError> {
//!         Ok(Note { id, text: params.text.unwrap_or_default() })
//!     }
//!     async fn delete(&self, _id: String) -> Result<(), ApiError> {
//!         Ok(())
//!     }
//! }
//!
//! // 3. Run the table
//! #[tokio::main]
//! async fn main() {
//!     let (controller, table) = TableController::<Note>::new(16);
//!     tokio::spawn(controller.run(TableContext {
//!         api: Arc::new(NotesApi),
//!         confirm: Arc::new(StaticConfirm(true)),
//!     }));
//!
//!     let count = table.load().await.unwrap();
//!     assert_eq!(count, 1);
//!
//!     let opened = table.open_update("note_1".to_string()).await.unwrap();
//!     assert!(opened);
//!
//!     let snapshot = table.snapshot().await.unwrap();
//!     assert_eq!(snapshot.editing.as_ref().map(|n| n.text.as_str()), Some("hello"));
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module ships two doubles for the [`EntityApi`] boundary: an
//! expectation-queue [`mock::MockApi`] for straight-line flows and a
//! channel-backed [`mock::channel_api`] for tests that need to observe or
//! delay individual requests (e.g. the fire-and-forget delete).

pub mod api;
pub mod columns;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod modal;
pub mod record;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use api::{ApiError, EntityApi};
pub use columns::{ColumnFactory, ColumnKind, ColumnSpec, RowActions};
pub use confirm::{RemovalConfirm, StaticConfirm};
pub use controller::{TableContext, TableController};
pub use error::TableError;
pub use handle::TableHandle;
pub use message::{Response, TableRequest};
pub use modal::{CreateModal, EntityForm, FieldError, FieldErrors, SubmitOutcome, UpdateModal};
pub use record::TableRecord;
pub use state::{
    ListPhase, Notification, PageRequest, TableSnapshot, DEFAULT_PAGE_SIZE,
    NOTIFICATION_AUTO_HIDE, PAGE_SIZE_OPTIONS,
};
