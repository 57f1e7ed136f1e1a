//! Mock extraction provider for tests.
//!
//! Canned envelopes behind shared state, with call recording, so agent and
//! interpreter behavior can be asserted without a network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::client::{ExtractResponse, ExtractionProvider};
use crate::error::{ExtractError, ExtractResult};
use crate::request::ExtractionRequest;

/// Canned-response extraction provider.
///
/// Queued envelopes are returned in order; with an empty queue, an
/// unsuccessful empty envelope is returned. Every request is recorded for
/// later assertion.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use property_search::testing::MockExtractor;
///
/// let mock = MockExtractor::new()
///     .with_response(MockExtractor::success_envelope(json!({"properties": []})));
/// ```
#[derive(Default)]
pub struct MockExtractor {
    responses: Arc<RwLock<VecDeque<ExtractResponse>>>,
    calls: Arc<RwLock<Vec<ExtractionRequest>>>,
    fail_message: Arc<RwLock<Option<String>>>,
}

impl MockExtractor {
    /// Create a new empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an envelope to be returned by the next call.
    pub fn push_response(&self, response: ExtractResponse) {
        self.responses.write().unwrap().push_back(response);
    }

    /// Builder variant of [`push_response`](Self::push_response).
    pub fn with_response(self, response: ExtractResponse) -> Self {
        self.push_response(response);
        self
    }

    /// Make every following call fail at the transport level.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_message.write().unwrap() = Some(message.into());
    }

    /// Requests seen so far, in call order.
    pub fn calls(&self) -> Vec<ExtractionRequest> {
        self.calls.read().unwrap().clone()
    }

    /// Number of extraction calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// A successful envelope carrying `data` as its payload.
    pub fn success_envelope(data: serde_json::Value) -> ExtractResponse {
        serde_json::from_value(serde_json::json!({
            "success": true,
            "data": data,
            "status": "completed",
            "expiresAt": "2099-01-01T00:00:00Z",
        }))
        .unwrap()
    }

    /// An unsuccessful envelope with an empty payload.
    pub fn failure_envelope() -> ExtractResponse {
        serde_json::from_value(serde_json::json!({
            "success": false,
            "data": {},
            "status": "failed",
        }))
        .unwrap()
    }
}

impl Clone for MockExtractor {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
            fail_message: Arc::clone(&self.fail_message),
        }
    }
}

#[async_trait]
impl ExtractionProvider for MockExtractor {
    async fn extract(&self, request: &ExtractionRequest) -> ExtractResult<ExtractResponse> {
        self.calls.write().unwrap().push(request.clone());

        if let Some(message) = self.fail_message.read().unwrap().clone() {
            return Err(ExtractError::Http(message.into()));
        }

        Ok(self
            .responses
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(Self::failure_envelope))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
