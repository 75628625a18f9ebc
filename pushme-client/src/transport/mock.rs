//! Mock transport for testing.
//!
//! Scripts exchange outcomes and captures every request descriptor for
//! verification.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use pushme_types::{ApiRequest, ApiResponse};

use super::{Transport, TransportError};

/// Mock transport for testing.
///
/// Outcomes queued with [`queue_response`](MockTransport::queue_response)
/// and [`queue_failure`](MockTransport::queue_failure) are replayed in
/// order, one per `send`. Every descriptor passed to `send` is recorded
/// for inspection, whatever the outcome.
#[derive(Debug, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Debug, Default)]
struct MockTransportInner {
    requests: Vec<ApiRequest>,
    outcomes: VecDeque<Result<ApiResponse, TransportError>>,
}

impl MockTransport {
    /// Create a new mock transport with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for an upcoming `send()` call.
    pub fn queue_response(&self, status: u16, body: Value) {
        let mut inner = self.inner.lock().unwrap();
        inner.outcomes.push_back(Ok(ApiResponse { status, body }));
    }

    /// Queue a transport failure for an upcoming `send()` call.
    pub fn queue_failure(&self, error: TransportError) {
        let mut inner = self.inner.lock().unwrap();
        inner.outcomes.push_back(Err(error));
    }

    /// All request descriptors seen so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.clone()
    }

    /// The most recent request descriptor.
    pub fn last_request(&self) -> Option<ApiRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.last().cloned()
    }

    /// How many times `send()` was called.
    pub fn request_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.requests.len()
    }

    /// Clear all state (recorded requests and queued outcomes).
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        *inner = MockTransportInner::default();
    }
}

impl Clone for MockTransport {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        inner
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::ConnectionFailed("no outcome queued".to_string())))
    }
}
