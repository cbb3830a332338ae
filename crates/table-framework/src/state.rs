//! # Table State
//!
//! Value types describing what a data table looks like at one instant:
//! the row list, the list-loading phase, the pagination window, and the
//! transient notification. The controller owns the mutable originals;
//! consumers read them through [`TableSnapshot`].

use crate::record::TableRecord;
use std::time::Duration;

/// How long the rendering surface should keep a notification visible
/// before auto-dismissing it. The surface owns the timer; the controller
/// only exposes the duration and an explicit dismiss operation.
pub const NOTIFICATION_AUTO_HIDE: Duration = Duration::from_millis(1000);

/// Initial page size of every table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes the grid offers.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// The requested pagination window. Pure view state: changing it never
/// refetches; the full list is fetched once and sliced client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub index: usize,
    /// Rows per page.
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Lifecycle of the row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing fetched yet.
    Idle,
    /// A fetch-all call is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; any previously loaded rows are kept.
    Error,
}

/// A transient message for the snackbar surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// A point-in-time view of one table, cloned out of the controller.
#[derive(Debug, Clone)]
pub struct TableSnapshot<T: TableRecord> {
    /// All rows, in fetch/append order. Never two rows with the same id.
    pub items: Vec<T>,
    pub phase: ListPhase,
    pub page: PageRequest,
    /// Whether the create dialog is open.
    pub create_open: bool,
    /// The record behind the update dialog, when it is open.
    pub editing: Option<T>,
    /// Pending notification, if any.
    pub notification: Option<Notification>,
}

impl<T: TableRecord> TableSnapshot<T> {
    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn update_open(&self) -> bool {
        self.editing.is_some()
    }

    /// The rows of the current page. Out-of-range windows yield an empty
    /// slice rather than a panic.
    pub fn page_rows(&self) -> &[T] {
        let start = self
            .page
            .index
            .saturating_mul(self.page.size)
            .min(self.items.len());
        let end = start.saturating_add(self.page.size).min(self.items.len());
        &self.items[start..end]
    }
}
