//! # Framework Errors
//!
//! This module defines the common error types used throughout the table
//! framework. By centralizing error definitions, we ensure consistent error
//! handling across all controllers and dialogs.

use crate::api::ApiError;

/// Errors that can occur within the table framework itself.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The controller task is gone; its request channel is closed.
    #[error("Table controller closed")]
    ControllerClosed,
    /// The controller dropped the response channel before answering.
    #[error("Table controller dropped response channel")]
    ControllerDropped,
    /// The fetch-all call failed. The controller has already recovered
    /// (prior rows kept, notification raised); this is the caller's copy
    /// of the outcome.
    #[error("Could not load table data")]
    FetchFailed(#[source] ApiError),
}
