//! # Column Descriptors
//!
//! Headless description of a table's columns. Each page supplies a factory
//! producing an ordered set of [`ColumnSpec`]s: value columns that render a
//! row into a cell string, and one actions column wired to the edit/remove
//! callbacks of the table. The paginated grid that draws them is a
//! rendering collaborator, out of scope here.

use crate::error::TableError;
use crate::handle::TableHandle;
use crate::record::TableRecord;

/// The row-level callbacks available to an actions column: open the update
/// dialog for a row, or remove it. Both are bound to the table handle.
#[derive(Clone)]
pub struct RowActions<T: TableRecord> {
    table: TableHandle<T>,
}

impl<T: TableRecord> RowActions<T> {
    pub fn new(table: TableHandle<T>) -> Self {
        Self { table }
    }

    /// The "Edit" button: opens the update dialog for `id`. Returns `false`
    /// on a stale id (row already gone), which the grid ignores.
    pub async fn edit(&self, id: T::Id) -> Result<bool, TableError> {
        self.table.open_update(id).await
    }

    /// The "Delete" button: confirmation, optimistic removal, and the
    /// fire-and-forget delete call all happen controller-side.
    pub async fn remove(&self, id: T::Id) -> Result<bool, TableError> {
        self.table.remove(id).await
    }
}

/// What a column shows.
pub enum ColumnKind<T: TableRecord> {
    /// A plain cell rendered from the row.
    Value(Box<dyn Fn(&T) -> String + Send + Sync>),
    /// The actions cell (edit/remove buttons).
    Actions(RowActions<T>),
}

/// One column of the grid.
pub struct ColumnSpec<T: TableRecord> {
    pub field: &'static str,
    pub header: &'static str,
    pub width: u16,
    pub kind: ColumnKind<T>,
}

impl<T: TableRecord> ColumnSpec<T> {
    pub fn value(
        field: &'static str,
        header: &'static str,
        width: u16,
        render: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            header,
            width,
            kind: ColumnKind::Value(Box::new(render)),
        }
    }

    pub fn actions(width: u16, actions: RowActions<T>) -> Self {
        Self {
            field: "actions",
            header: "Actions",
            width,
            kind: ColumnKind::Actions(actions),
        }
    }

    /// The cell string for `row`, or `None` for the actions column.
    pub fn cell(&self, row: &T) -> Option<String> {
        match &self.kind {
            ColumnKind::Value(render) => Some(render(row)),
            ColumnKind::Actions(_) => None,
        }
    }
}

/// A page's column factory. It receives the row actions so the factory can
/// place them wherever its actions column lives; every factory must expose
/// at least an id-bearing column and the actions column.
pub type ColumnFactory<T> = fn(RowActions<T>) -> Vec<ColumnSpec<T>>;
