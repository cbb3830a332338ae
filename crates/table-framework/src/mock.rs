//! # Mock API Collaborators & Testing Guide
//!
//! Two test doubles for the [`EntityApi`] boundary, so controller and
//! dialog logic can be exercised without any real backend.
//!
//! ## When to use which
//!
//! | Feature | [`MockApi`] | [`channel_api`] |
//! |---------|-------------|-----------------|
//! | **Setup** | Fluent expectations up front | Respond per request, in-line |
//! | **Determinism** | Responses pre-scripted | Test decides *when* to answer |
//! | **Use case** | Straight-line flows | Observing request order / racing completions |
//! | **Error injection** | Easy (`return_err`) | Easy (send an `Err`) |
//!
//! `MockApi` answers immediately from a queue of expectations and panics on
//! any call it was not told to expect; [`MockApi::verify`] panics if some
//! expectations were never consumed.
//!
//! `channel_api` hands every call to the test as an [`ApiCall`] carrying the
//! request payload and a responder. That makes it the right tool for the
//! fire-and-forget paths: the test can assert the local state changed
//! *before* ever answering the delete request.

use crate::api::{ApiError, EntityApi};
use crate::record::TableRecord;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock API.
enum ApiExpectation<T: TableRecord> {
    FetchAll {
        response: Result<Vec<T>, ApiError>,
    },
    Create {
        response: Result<T, ApiError>,
    },
    Update {
        id: T::Id,
        response: Result<T, ApiError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), ApiError>,
    },
}

impl<T: TableRecord> ApiExpectation<T> {
    fn name(&self) -> &'static str {
        match self {
            ApiExpectation::FetchAll { .. } => "fetch_all",
            ApiExpectation::Create { .. } => "create",
            ApiExpectation::Update { .. } => "update",
            ApiExpectation::Delete { .. } => "delete",
        }
    }
}

/// An [`EntityApi`] with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let api = MockApi::<Product>::new();
/// api.expect_fetch_all().return_ok(vec![widget.clone()]);
/// api.expect_create().return_err(ApiError::Rejected("invalid".into()));
///
/// // hand `Arc::new(api.clone())` to the code under test...
/// api.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone)]
pub struct MockApi<T: TableRecord> {
    expectations: Arc<Mutex<VecDeque<ApiExpectation<T>>>>,
}

impl<T: TableRecord> Default for MockApi<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableRecord> MockApi<T> {
    /// Creates a new mock API with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    fn pop(&self) -> Option<ApiExpectation<T>> {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .pop_front()
    }

    fn push(&self, expectation: ApiExpectation<T>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(expectation);
    }

    /// Expects a `fetch_all` call.
    pub fn expect_fetch_all(&self) -> FetchAllExpectation<T> {
        FetchAllExpectation { mock: self.clone() }
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> CreateExpectation<T> {
        CreateExpectation { mock: self.clone() }
    }

    /// Expects an `update` call for `id`.
    pub fn expect_update(&self, id: T::Id) -> UpdateExpectation<T> {
        UpdateExpectation {
            id,
            mock: self.clone(),
        }
    }

    /// Expects a `delete` call for `id`.
    pub fn expect_delete(&self, id: T::Id) -> DeleteExpectation<T> {
        DeleteExpectation {
            id,
            mock: self.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .expect("expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl<T: TableRecord> EntityApi<T> for MockApi<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        match self.pop() {
            Some(ApiExpectation::FetchAll { response }) => response,
            Some(other) => panic!("Expected {} call, got fetch_all", other.name()),
            None => panic!("Unexpected fetch_all call"),
        }
    }

    async fn create(&self, _params: T::Create) -> Result<T, ApiError> {
        match self.pop() {
            Some(ApiExpectation::Create { response }) => response,
            Some(other) => panic!("Expected {} call, got create", other.name()),
            None => panic!("Unexpected create call"),
        }
    }

    async fn update(&self, id: T::Id, _params: T::Update) -> Result<T, ApiError> {
        match self.pop() {
            Some(ApiExpectation::Update {
                id: expected,
                response,
            }) => {
                assert_eq!(expected, id, "update called with unexpected id");
                response
            }
            Some(other) => panic!("Expected {} call, got update", other.name()),
            None => panic!("Unexpected update call"),
        }
    }

    async fn delete(&self, id: T::Id) -> Result<(), ApiError> {
        match self.pop() {
            Some(ApiExpectation::Delete {
                id: expected,
                response,
            }) => {
                assert_eq!(expected, id, "delete called with unexpected id");
                response
            }
            Some(other) => panic!("Expected {} call, got delete", other.name()),
            None => panic!("Unexpected delete call"),
        }
    }
}

/// Builder for `fetch_all` expectations.
pub struct FetchAllExpectation<T: TableRecord> {
    mock: MockApi<T>,
}

impl<T: TableRecord> FetchAllExpectation<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.mock
            .push(ApiExpectation::FetchAll { response: Ok(items) });
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(ApiExpectation::FetchAll {
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<T: TableRecord> {
    mock: MockApi<T>,
}

impl<T: TableRecord> CreateExpectation<T> {
    pub fn return_ok(self, item: T) {
        self.mock
            .push(ApiExpectation::Create { response: Ok(item) });
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(ApiExpectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectation<T: TableRecord> {
    id: T::Id,
    mock: MockApi<T>,
}

impl<T: TableRecord> UpdateExpectation<T> {
    pub fn return_ok(self, item: T) {
        self.mock.push(ApiExpectation::Update {
            id: self.id,
            response: Ok(item),
        });
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(ApiExpectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectation<T: TableRecord> {
    id: T::Id,
    mock: MockApi<T>,
}

impl<T: TableRecord> DeleteExpectation<T> {
    pub fn return_ok(self) {
        self.mock.push(ApiExpectation::Delete {
            id: self.id,
            response: Ok(()),
        });
    }

    pub fn return_err(self, error: ApiError) {
        self.mock.push(ApiExpectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-BACKED MOCK
// =============================================================================

/// One API call as seen by the test: the payload plus a responder.
#[derive(Debug)]
pub enum ApiCall<T: TableRecord> {
    FetchAll {
        respond_to: oneshot::Sender<Result<Vec<T>, ApiError>>,
    },
    Create {
        params: T::Create,
        respond_to: oneshot::Sender<Result<T, ApiError>>,
    },
    Update {
        id: T::Id,
        params: T::Update,
        respond_to: oneshot::Sender<Result<T, ApiError>>,
    },
    Delete {
        id: T::Id,
        respond_to: oneshot::Sender<Result<(), ApiError>>,
    },
}

/// An [`EntityApi`] that forwards every call to a channel the test holds.
pub struct ChannelApi<T: TableRecord> {
    sender: mpsc::Sender<ApiCall<T>>,
}

/// Creates a channel-backed API and the receiver for asserting requests.
///
/// # Testing Strategy
/// The test receives every call as an [`ApiCall`] and decides when (and
/// whether) to answer. This lets it simulate the remote API's behavior
/// (success, failure, delays, never answering) deterministically, and to
/// interleave its answers with assertions on the table state.
pub fn channel_api<T: TableRecord>(buffer_size: usize) -> (ChannelApi<T>, mpsc::Receiver<ApiCall<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelApi { sender }, receiver)
}

#[async_trait]
impl<T: TableRecord> EntityApi<T> for ChannelApi<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ApiCall::FetchAll { respond_to })
            .await
            .map_err(|_| ApiError::Unreachable("mock api channel closed".into()))?;
        response
            .await
            .map_err(|_| ApiError::Unreachable("mock api dropped responder".into()))?
    }

    async fn create(&self, params: T::Create) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ApiCall::Create { params, respond_to })
            .await
            .map_err(|_| ApiError::Unreachable("mock api channel closed".into()))?;
        response
            .await
            .map_err(|_| ApiError::Unreachable("mock api dropped responder".into()))?
    }

    async fn update(&self, id: T::Id, params: T::Update) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ApiCall::Update {
                id,
                params,
                respond_to,
            })
            .await
            .map_err(|_| ApiError::Unreachable("mock api channel closed".into()))?;
        response
            .await
            .map_err(|_| ApiError::Unreachable("mock api dropped responder".into()))?
    }

    async fn delete(&self, id: T::Id) -> Result<(), ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ApiCall::Delete { id, respond_to })
            .await
            .map_err(|_| ApiError::Unreachable("mock api channel closed".into()))?;
        response
            .await
            .map_err(|_| ApiError::Unreachable("mock api dropped responder".into()))?
    }
}

/// Helper to verify that the next call is a fetch-all request.
pub async fn expect_fetch_all<T: TableRecord>(
    receiver: &mut mpsc::Receiver<ApiCall<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, ApiError>>> {
    match receiver.recv().await {
        Some(ApiCall::FetchAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next call is a create request.
pub async fn expect_create<T: TableRecord>(
    receiver: &mut mpsc::Receiver<ApiCall<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, ApiError>>)> {
    match receiver.recv().await {
        Some(ApiCall::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is an update request.
pub async fn expect_update<T: TableRecord>(
    receiver: &mut mpsc::Receiver<ApiCall<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, ApiError>>)> {
    match receiver.recv().await {
        Some(ApiCall::Update {
            id,
            params,
            respond_to,
        }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is a delete request.
pub async fn expect_delete<T: TableRecord>(
    receiver: &mut mpsc::Receiver<ApiCall<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), ApiError>>)> {
    match receiver.recv().await {
        Some(ApiCall::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
