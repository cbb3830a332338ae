//! # Generic Table Controller
//!
//! This module defines the `TableController`, the core component that owns
//! the state of one admin data table. It processes requests sequentially
//! from a channel, ensuring exclusive access to the row list without locks.
//!
//! # Architecture Note
//! This struct is the "server" half of the table. It owns the state (rows,
//! modal layer, pagination, notification) and the receiver end of the
//! channel.
//!
//! **Concurrency Model**:
//! Three tables (Products, Categories, Orders) can run at once, but each one
//! processes its own requests *sequentially* in a loop, so the row list has
//! a single logical writer. Async completions (a finished create, a late
//! update) are applied in the order they arrive on the channel, which may
//! differ from the order the user issued them; that is tolerated because
//! append, replace-by-id and remove-by-id commute for distinct ids.
//!
//! # Usage Pattern
//!
//! 1.  **Create**: Call `TableController::new()` to get the controller
//!     (server) and the [`TableHandle`] (interface).
//! 2.  **Wire**: Pass the collaborators (entity API, removal confirmation)
//!     into `controller.run(context)`.
//! 3.  **Run**: Spawn the run loop in a background task, then drive the
//!     table through the handle.
//!
//! # Operations
//!
//! * **Load**: fetch-all through the API collaborator. On success the row
//!   list is replaced wholesale; on failure prior rows are kept and a
//!   notification is raised ("Error getting data").
//! * **OpenCreate / CloseCreate / OpenUpdate / CloseUpdate**: modal layer
//!   transitions. The two dialogs are mutually exclusive; opening one while
//!   the other is open is ignored. Opening the update dialog for an id that
//!   is no longer in the list is a silent no-op.
//! * **CreateResult / UpdateResult**: the record-or-`None` signal reported
//!   by a dialog. `None` means "did not happen": the list stays untouched
//!   and a failure notification is raised. A record is appended (create) or
//!   replaces the first row with the same id in place (update).
//! * **Remove**: asks the confirmation collaborator, dispatches the delete
//!   call fire-and-forget, and drops the row from the local list without
//!   waiting for the server.
//! * **SetPage**: pure view update; the full list is fetched once and paged
//!   client-side.

use crate::api::EntityApi;
use crate::confirm::RemovalConfirm;
use crate::error::TableError;
use crate::handle::TableHandle;
use crate::message::TableRequest;
use crate::record::TableRecord;
use crate::state::{ListPhase, Notification, PageRequest, TableSnapshot};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The collaborators injected into the controller's run loop.
///
/// # Context Injection
/// Dependencies are bound at `run()` time, not at construction time. The
/// controller and its handle can be created first and wired to whatever
/// API implementation (real client, in-memory stand-in, mock) the caller
/// chooses when starting the loop.
pub struct TableContext<T: TableRecord> {
    /// The remote entity API. The controller only calls `fetch_all` and
    /// `delete`; `create`/`update` belong to the dialogs.
    pub api: Arc<dyn EntityApi<T>>,
    /// Gate consulted before any removal.
    pub confirm: Arc<dyn RemovalConfirm>,
}

impl<T: TableRecord> Clone for TableContext<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            confirm: Arc::clone(&self.confirm),
        }
    }
}

/// Which dialog is on screen. The variants are mutually exclusive by
/// construction, and the update dialog always carries the record being
/// edited; closing it drops the record.
enum ModalLayer<T> {
    Closed,
    CreateOpen,
    UpdateOpen(T),
}

/// The generic controller that manages one table's state.
pub struct TableController<T: TableRecord> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    items: Vec<T>,
    phase: ListPhase,
    page: PageRequest,
    modal: ModalLayer<T>,
    notification: Option<Notification>,
}

impl<T: TableRecord> TableController<T> {
    /// Creates a new `TableController` and its associated [`TableHandle`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. If the channel
    ///   is full, calls on the handle wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, TableHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let controller = Self {
            receiver,
            items: Vec::new(),
            phase: ListPhase::Idle,
            page: PageRequest::default(),
            modal: ModalLayer::Closed,
            notification: None,
        };
        let handle = TableHandle::new(sender);
        (controller, handle)
    }

    /// Runs the controller's event loop, processing requests until every
    /// handle is dropped and the channel closes.
    pub async fn run(mut self, context: TableContext<T>) {
        let kind = T::kind_label();
        info!(kind, "Table controller started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableRequest::Load { respond_to } => {
                    debug!(kind, "Load");
                    self.phase = ListPhase::Loading;
                    match context.api.fetch_all().await {
                        Ok(items) => {
                            let count = items.len();
                            self.items = items;
                            self.phase = ListPhase::Loaded;
                            info!(kind, count, "Loaded");
                            let _ = respond_to.send(Ok(count));
                        }
                        Err(e) => {
                            // Prior rows stay on screen; only the
                            // notification tells the user anything went wrong.
                            warn!(kind, error = %e, "Load failed");
                            self.phase = ListPhase::Error;
                            self.notify("Error getting data");
                            let _ = respond_to.send(Err(TableError::FetchFailed(e)));
                        }
                    }
                }
                TableRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                TableRequest::OpenCreate { respond_to } => {
                    debug!(kind, "OpenCreate");
                    match self.modal {
                        ModalLayer::Closed => self.modal = ModalLayer::CreateOpen,
                        _ => debug!(kind, "OpenCreate ignored, a dialog is already open"),
                    }
                    let _ = respond_to.send(Ok(()));
                }
                TableRequest::CloseCreate { respond_to } => {
                    debug!(kind, "CloseCreate");
                    if matches!(self.modal, ModalLayer::CreateOpen) {
                        self.modal = ModalLayer::Closed;
                    }
                    let _ = respond_to.send(Ok(()));
                }
                TableRequest::OpenUpdate { id, respond_to } => {
                    debug!(kind, %id, "OpenUpdate");
                    let opened = match self.modal {
                        ModalLayer::Closed => {
                            match self.items.iter().find(|item| *item.id() == id) {
                                Some(item) => {
                                    self.modal = ModalLayer::UpdateOpen(item.clone());
                                    true
                                }
                                // A stale row id is a tolerated race with the
                                // server, not an error.
                                None => false,
                            }
                        }
                        _ => {
                            debug!(kind, "OpenUpdate ignored, a dialog is already open");
                            false
                        }
                    };
                    let _ = respond_to.send(Ok(opened));
                }
                TableRequest::CloseUpdate { respond_to } => {
                    debug!(kind, "CloseUpdate");
                    if matches!(self.modal, ModalLayer::UpdateOpen(_)) {
                        self.modal = ModalLayer::Closed;
                    }
                    let _ = respond_to.send(Ok(()));
                }
                TableRequest::CreateResult { item, respond_to } => {
                    match item {
                        Some(item) => {
                            info!(kind, id = %item.id(), size = self.items.len() + 1, "Created");
                            self.items.push(item);
                            self.notify(format!("{kind} created successfully"));
                        }
                        None => {
                            warn!(kind, "Create did not happen");
                            self.notify(format!("Error creating {}", kind.to_lowercase()));
                        }
                    }
                    let _ = respond_to.send(Ok(()));
                }
                TableRequest::UpdateResult { item, respond_to } => {
                    match item {
                        Some(item) => {
                            match self.items.iter().position(|prev| prev.id() == item.id()) {
                                Some(at) => {
                                    info!(kind, id = %item.id(), "Updated");
                                    self.items[at] = item;
                                }
                                // The row may have been removed while the
                                // update was in flight; never write out of
                                // bounds for it.
                                None => {
                                    debug!(kind, id = %item.id(), "Update target no longer listed")
                                }
                            }
                            self.notify(format!("{kind} updated successfully"));
                        }
                        None => {
                            warn!(kind, "Update did not happen");
                            self.notify(format!("Error updating {}", kind.to_lowercase()));
                        }
                    }
                    let _ = respond_to.send(Ok(()));
                }
                TableRequest::Remove { id, respond_to } => {
                    debug!(kind, %id, "Remove");
                    let prompt =
                        format!("Do you really want to remove this {}?", kind.to_lowercase());
                    if !context.confirm.confirm(&prompt).await {
                        let _ = respond_to.send(Ok(false));
                        continue;
                    }
                    // The delete call races independently of the local
                    // mirror; the row disappears from the screen now.
                    let api = Arc::clone(&context.api);
                    let delete_id = id.clone();
                    tokio::spawn(async move {
                        if let Err(e) = api.delete(delete_id).await {
                            warn!(kind, error = %e, "Delete request failed");
                        }
                    });
                    let before = self.items.len();
                    self.items.retain(|item| *item.id() != id);
                    let removed = self.items.len() < before;
                    if removed {
                        info!(kind, %id, size = self.items.len(), "Removed");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                TableRequest::SetPage { page, respond_to } => {
                    debug!(kind, index = page.index, size = page.size, "SetPage");
                    self.page = page;
                    let _ = respond_to.send(Ok(()));
                }
                TableRequest::DismissNotification { respond_to } => {
                    self.notification = None;
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(kind, size = self.items.len(), "Shutdown");
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
        });
    }

    fn snapshot(&self) -> TableSnapshot<T> {
        TableSnapshot {
            items: self.items.clone(),
            phase: self.phase,
            page: self.page,
            create_open: matches!(self.modal, ModalLayer::CreateOpen),
            editing: match &self.modal {
                ModalLayer::UpdateOpen(item) => Some(item.clone()),
                _ => None,
            },
            notification: self.notification.clone(),
        }
    }
}
