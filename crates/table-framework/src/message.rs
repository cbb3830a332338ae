//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between a [`TableHandle`](crate::handle::TableHandle) and its
//! [`TableController`](crate::controller::TableController).

use crate::error::TableError;
use crate::record::TableRecord;
use crate::state::{PageRequest, TableSnapshot};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by controllers.
pub type Response<V> = oneshot::Sender<Result<V, TableError>>;

/// Internal message type sent to the controller to request operations.
///
/// Instead of ad-hoc messages, the variants standardize on the operation set
/// every admin table needs: one fetch, the modal layer transitions, the
/// record-or-`None` results reported by the dialogs, the optimistic remove,
/// and the pure view updates (pagination, notification dismissal).
///
/// This type is generic over `T: TableRecord`, so a "Product" handle cannot
/// feed rows into a "Category" table.
#[derive(Debug)]
pub enum TableRequest<T: TableRecord> {
    /// Fetch the full collection through the API collaborator and replace
    /// the row list. Responds with the row count, or with
    /// [`TableError::FetchFailed`] after the controller has recovered.
    Load { respond_to: Response<usize> },
    /// Read a point-in-time copy of the table state.
    Snapshot {
        respond_to: Response<TableSnapshot<T>>,
    },
    OpenCreate { respond_to: Response<()> },
    CloseCreate { respond_to: Response<()> },
    /// Open the update dialog for the row with this id. Responds `false`
    /// (and changes nothing) when the id is not in the list.
    OpenUpdate {
        id: T::Id,
        respond_to: Response<bool>,
    },
    CloseUpdate { respond_to: Response<()> },
    /// Outcome of a create dialog submission: the created record, or
    /// `None` when the create did not happen.
    CreateResult {
        item: Option<T>,
        respond_to: Response<()>,
    },
    /// Outcome of an update dialog submission: the updated record, or
    /// `None` when the update did not happen.
    UpdateResult {
        item: Option<T>,
        respond_to: Response<()>,
    },
    /// Confirm, dispatch the delete call, and drop the row locally.
    /// Responds with whether a row was removed.
    Remove {
        id: T::Id,
        respond_to: Response<bool>,
    },
    /// Move the pagination window. Never refetches.
    SetPage {
        page: PageRequest,
        respond_to: Response<()>,
    },
    /// Explicitly clear the pending notification (the snackbar's close
    /// button, or its auto-hide timer firing).
    DismissNotification { respond_to: Response<()> },
}
