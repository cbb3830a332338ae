//! # Generic Table Handle
//!
//! This module defines the generic handle for communicating with a running
//! [`TableController`](crate::controller::TableController).

use crate::error::TableError;
use crate::message::TableRequest;
use crate::record::TableRecord;
use crate::state::{PageRequest, TableSnapshot};
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cloneable interface to one table controller.
///
/// * **Cloneable** - holds only a sender, so cloning is inexpensive; pages,
///   dialogs and column actions all share clones of the same handle.
/// * **Async API** - every method suspends until the controller has applied
///   the operation and replied.
#[derive(Clone)]
pub struct TableHandle<T: TableRecord> {
    sender: mpsc::Sender<TableRequest<T>>,
}

impl<T: TableRecord> TableHandle<T> {
    pub(crate) fn new(sender: mpsc::Sender<TableRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<V>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<V, TableError>>) -> TableRequest<T>,
    ) -> Result<V, TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| TableError::ControllerClosed)?;
        response.await.map_err(|_| TableError::ControllerDropped)?
    }

    /// Fetch the full collection and replace the row list. Returns the row
    /// count on success.
    pub async fn load(&self) -> Result<usize, TableError> {
        self.request(|respond_to| TableRequest::Load { respond_to })
            .await
    }

    /// Read a point-in-time copy of the table state.
    pub async fn snapshot(&self) -> Result<TableSnapshot<T>, TableError> {
        self.request(|respond_to| TableRequest::Snapshot { respond_to })
            .await
    }

    pub async fn open_create(&self) -> Result<(), TableError> {
        self.request(|respond_to| TableRequest::OpenCreate { respond_to })
            .await
    }

    pub async fn close_create(&self) -> Result<(), TableError> {
        self.request(|respond_to| TableRequest::CloseCreate { respond_to })
            .await
    }

    /// Open the update dialog for `id`. Returns `false` when the id is not
    /// in the list (already removed elsewhere); nothing changes in that
    /// case.
    pub async fn open_update(&self, id: T::Id) -> Result<bool, TableError> {
        self.request(|respond_to| TableRequest::OpenUpdate { id, respond_to })
            .await
    }

    pub async fn close_update(&self) -> Result<(), TableError> {
        self.request(|respond_to| TableRequest::CloseUpdate { respond_to })
            .await
    }

    /// Report the outcome of a create dialog submission.
    pub async fn create_result(&self, item: Option<T>) -> Result<(), TableError> {
        self.request(|respond_to| TableRequest::CreateResult { item, respond_to })
            .await
    }

    /// Report the outcome of an update dialog submission.
    pub async fn update_result(&self, item: Option<T>) -> Result<(), TableError> {
        self.request(|respond_to| TableRequest::UpdateResult { item, respond_to })
            .await
    }

    /// Confirm and remove the row with `id`. Returns whether a row was
    /// removed from the local list.
    pub async fn remove(&self, id: T::Id) -> Result<bool, TableError> {
        self.request(|respond_to| TableRequest::Remove { id, respond_to })
            .await
    }

    /// Move the pagination window.
    pub async fn set_page(&self, page: PageRequest) -> Result<(), TableError> {
        self.request(|respond_to| TableRequest::SetPage { page, respond_to })
            .await
    }

    /// Clear the pending notification.
    pub async fn dismiss_notification(&self) -> Result<(), TableError> {
        self.request(|respond_to| TableRequest::DismissNotification { respond_to })
            .await
    }
}
