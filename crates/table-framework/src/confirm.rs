//! # Removal Confirmation Collaborator
//!
//! Destructive row removal is gated by a confirmation prompt. The prompt
//! itself (a browser dialog, a TUI popup) is environment-specific, so the
//! controller consumes it through this trait and stays testable with a
//! deterministic stub.

use async_trait::async_trait;
use tracing::debug;

/// Asks the user whether a removal should proceed.
#[async_trait]
pub trait RemovalConfirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Deterministic confirmation stub: always answers with the wrapped value.
pub struct StaticConfirm(pub bool);

#[async_trait]
impl RemovalConfirm for StaticConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        debug!(prompt, answer = self.0, "Removal prompt answered statically");
        self.0
    }
}
