//! # TableRecord Trait
//!
//! The `TableRecord` trait defines the contract that every entity shown in a
//! data table (Product, Category, Order, …) must implement to be managed by
//! the generic [`TableController`](crate::controller::TableController). It
//! specifies associated types for ids and for the create/update payloads the
//! API collaborator understands. Implementing this trait enables the
//! framework to offer a uniform fetch/create/update/delete/paginate flow for
//! any entity kind.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract (`TableRecord`) that all our row types must
//! satisfy, we can write the table controller and the dialog plumbing *once*
//! and reuse them for every admin screen. The controller itself never looks
//! at a row beyond its id and its kind label.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type
//! safety. A `Product` table requires a `ProductCreate` payload, and you
//! can't accidentally hand it a `CategoryCreate`. The compiler prevents this
//! class of bugs entirely.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any row entity must implement to be managed by a
/// [`TableController`](crate::controller::TableController).
///
/// The table treats rows as opaque values with a unique id: every list
/// mutation (append, replace-by-id, remove-by-id) and the update-dialog
/// lookup go through [`TableRecord::id`]. Everything else about the row is
/// the concern of the page that renders it.
pub trait TableRecord: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity. Assigned by the remote API,
    /// opaque to the table.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The payload sent to the API collaborator to create a new instance.
    type Create: Send + Sync + Debug;

    /// The payload sent to the API collaborator to update an existing
    /// instance. Fields omitted from it are left unchanged server-side.
    type Update: Send + Sync + Debug;

    /// The row's unique id.
    fn id(&self) -> &Self::Id;

    /// Human-facing name of the entity kind (e.g. `"Product"`), used in
    /// notifications ("Product created successfully") and structured logs.
    fn kind_label() -> &'static str;
}
