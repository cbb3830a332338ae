//! # Entity API Collaborator
//!
//! This module defines the contract for the remote entity API the table
//! depends on. The wire format behind it (REST/JSON, anything else) is a
//! collaborator detail; the table only sees the four asynchronous
//! operations below and a generic error.

use crate::record::TableRecord;
use async_trait::async_trait;

/// Failure reported by the API collaborator.
///
/// Richer detail (status codes, server messages) belongs in the variants'
/// payloads and in the logs; callers only branch on "it failed".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (network failure,
    /// closed connection, timeout).
    #[error("Request failed: {0}")]
    Unreachable(String),

    /// The server does not know the addressed entity.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server understood the request and refused it.
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Asynchronous CRUD surface for one entity kind.
///
/// Ownership of these calls is split: the table controller only ever
/// invokes [`fetch_all`](EntityApi::fetch_all) and
/// [`delete`](EntityApi::delete); `create` and `update` are invoked by the
/// dialogs, which report back to the table with a record-or-`None` signal.
#[async_trait]
pub trait EntityApi<T: TableRecord>: Send + Sync {
    /// Fetch the full collection. No pagination parameters; paging is a
    /// client-side view concern.
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError>;

    /// Create a new entity. The server assigns the id.
    async fn create(&self, params: T::Create) -> Result<T, ApiError>;

    /// Update an existing entity. Partial semantics: fields omitted from
    /// `params` are left unchanged server-side.
    async fn update(&self, id: T::Id, params: T::Update) -> Result<T, ApiError>;

    /// Delete an entity. Fire-and-forget from the caller's perspective.
    async fn delete(&self, id: T::Id) -> Result<(), ApiError>;
}
